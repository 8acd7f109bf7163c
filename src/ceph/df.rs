//! Cluster capacity, from `ceph df`
//!
//! The thresholds are percentages of total capacity that *available* space
//! is compared against, and the comparison alerts when available space is at
//! or above the boundary. That reads backwards from "alert when the cluster is
//! filling up", but it is the behavior existing deployments are configured
//! against, so it is kept as is.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::ceph::{Ceph, CephError};
use crate::command::Execute;
use crate::Status;

/// Printed, with a WARNING exit, if ceph can't be run or its output parsed
pub const NOT_FOUND: &str = "[WARN] ceph not found ?";

/// Printed, with a WARNING exit, if used and avail don't add up to total
pub const INCONSISTENT: &str = "[ERR] Used + Avail. != Total space";

/// What we care about from `ceph df --format=json`
#[derive(Debug, Deserialize, PartialEq)]
pub struct DfReport {
    pub stats: DfStats,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DfStats {
    pub total_space: u64,
    pub total_used: u64,
    pub total_avail: u64,
}

/// Warning and critical boundaries, as percents of total capacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn: f64,
    pub crit: f64,
}

impl Default for Thresholds {
    fn default() -> Thresholds {
        Thresholds {
            warn: 85.0,
            crit: 98.0,
        }
    }
}

/// `percent`% of `value`
pub fn per(percent: f64, value: u64) -> f64 {
    (percent / 100.0) * value as f64
}

/// Capacity numbers for a cluster at one moment
///
/// All three are in whatever unit the installed ceph reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacitySnapshot {
    pub total: u64,
    pub used: u64,
    pub avail: u64,
}

impl From<DfStats> for CapacitySnapshot {
    fn from(stats: DfStats) -> CapacitySnapshot {
        CapacitySnapshot {
            total: stats.total_space,
            used: stats.total_used,
            avail: stats.total_avail,
        }
    }
}

impl CapacitySnapshot {
    /// Parse the output of `ceph df --format=json`
    pub fn parse(json: &[u8]) -> Result<CapacitySnapshot, CephError> {
        let report: DfReport = serde_json::from_slice(json)?;
        Ok(report.stats.into())
    }

    /// Fail unless `used + avail == total`
    pub fn validate(self) -> Result<CapacitySnapshot, CephError> {
        match self.used.checked_add(self.avail) {
            Some(sum) if sum == self.total => Ok(self),
            _ => Err(CephError::Inconsistent {
                total: self.total,
                used: self.used,
                avail: self.avail,
            }),
        }
    }

    /// Compare available space against the thresholds, first match wins
    pub fn evaluate(&self, thresholds: &Thresholds) -> (Status, String) {
        let avail = self.avail as f64;
        if avail >= per(thresholds.crit, self.total) {
            (
                Status::Critical,
                format!("[ERR] Ceph df avail. critical {}", self.remaining()),
            )
        } else if avail >= per(thresholds.warn, self.total) {
            (
                Status::Warning,
                format!("[WARN] Ceph df avail. warning {}", self.remaining()),
            )
        } else {
            (
                Status::Ok,
                format!("[OK] Ceph df avail. seems good {}", self.remaining()),
            )
        }
    }

    /// Always divides by 1024, whatever unit ceph used
    fn remaining(&self) -> String {
        format!("({}MB/{}MB)", self.avail / 1024, self.total / 1024)
    }
}

/// Run `ceph df` and decide how worried to be
///
/// Every failure collapses into a WARNING with a fixed message.
pub fn check<E: Execute>(ceph: &Ceph<E>, thresholds: &Thresholds) -> (Status, String) {
    let snapshot = match ceph
        .df_json()
        .map_err(CephError::from)
        .and_then(|json| CapacitySnapshot::parse(&json))
    {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %e, "unable to read ceph df");
            return (Status::Warning, NOT_FOUND.to_owned());
        }
    };
    debug!(?snapshot, ?thresholds, "parsed ceph df");

    match snapshot.validate() {
        Ok(snapshot) => snapshot.evaluate(thresholds),
        Err(e) => {
            warn!(error = %e, "inconsistent ceph df");
            (Status::Warning, INCONSISTENT.to_owned())
        }
    }
}
