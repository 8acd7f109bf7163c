//! Ceph plugins: strongly typed Nagios/Sensu checks for ceph clusters
//!
//! Every check in here shells out to the `ceph` administration command,
//! interprets what it says, prints exactly one line to stdout and exits with
//! one of the standard monitoring exit codes described by [`Status`].
//!
//! See the [scripts](scripts/index.html) module for documentation on the
//! individual binaries.
//!
//! The pieces are usable on their own, mostly so that the checks can be tested
//! without a cluster:
//!
//! ```rust
//! use ceph_plugins::ceph::df::{CapacitySnapshot, Thresholds};
//! use ceph_plugins::Status;
//!
//! let snapshot = CapacitySnapshot { total: 1000, used: 200, avail: 800 };
//! let (status, message) = snapshot.evaluate(&Thresholds::default());
//! assert_eq!(status, Status::Ok);
//! assert_eq!(message, "[OK] Ceph df avail. seems good (0MB/0MB)");
//! ```

use std::fmt;
use std::process;
use std::str::FromStr;

pub mod ceph;
pub mod command;
pub mod logging;
pub mod scripts;

/// All possible exit statuses for a check
///
/// Statuses are ordered by severity, so `std::cmp::max` of two statuses is
/// the worse one.
#[must_use]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
    /// Reserved by the calling convention, never produced by these checks
    Dependent,
}

impl Status {
    /// The numeric exit code the supervisor expects
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
            Status::Dependent => 4,
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self.code())
    }

    pub fn str_values() -> [&'static str; 5] {
        ["ok", "warning", "critical", "unknown", "dependent"]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Status::Ok => "ok",
            Status::Warning => "warning",
            Status::Critical => "critical",
            Status::Unknown => "unknown",
            Status::Dependent => "dependent",
        };
        f.write_str(name)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Status, String> {
        match s {
            "ok" => Ok(Status::Ok),
            "warning" | "warn" => Ok(Status::Warning),
            "critical" => Ok(Status::Critical),
            "unknown" => Ok(Status::Unknown),
            "dependent" => Ok(Status::Dependent),
            _ => Err(format!("Unexpected exit status: {}", s)),
        }
    }
}
