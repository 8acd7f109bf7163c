//! Cluster health, from `ceph health`

use tracing::warn;

use crate::ceph::Ceph;
use crate::command::{CommandError, Execute};
use crate::Status;

/// Turn the output of `ceph health` into a status and message
///
/// The first space-separated word is the cluster's opinion of itself,
/// anything after the first space is passed through. Only a space separates
/// words, a tab does not.
pub fn interpret(output: &str) -> (Status, String) {
    let output = output.trim_end();
    let (word, rest) = match output.find(' ') {
        Some(i) => (&output[..i], &output[i + 1..]),
        None => (output, ""),
    };
    match word {
        "HEALTH_OK" => (Status::Ok, format!("CEPH OK: {}", rest)),
        "HEALTH_WARN" => (Status::Warning, format!("CEPH WARNING: {}", rest)),
        "HEALTH_ERR" => (Status::Critical, format!("CEPH CRITICAL: {}", rest)),
        _ => (Status::Unknown, format!("CEPH UNKNOWN: {}", output)),
    }
}

/// Run `ceph health` and interpret it
///
/// Not being able to ask is UNKNOWN, not an alert.
pub fn check<E: Execute>(ceph: &Ceph<E>) -> (Status, String) {
    match ceph.health() {
        Ok(output) => interpret(&output),
        Err(CommandError::Failed { output, .. }) => {
            (Status::Unknown, format!("CEPH UNKNOWN: {}", output.trim_end()))
        }
        Err(e @ CommandError::Spawn(_)) => {
            warn!(error = %e, "unable to launch ceph health");
            (
                Status::Unknown,
                "CEPH UNKNOWN: unable to launch ceph health".to_owned(),
            )
        }
    }
}
