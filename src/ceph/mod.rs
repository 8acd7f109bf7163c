//! Talk to a ceph cluster through its administration command
//!
//! Each submodule holds one check: the types parsed out of the command's
//! output and the logic that turns them into a [`Status`](crate::Status).

use std::fmt;

use derive_more::From;

use crate::command::{CommandError, Execute, Program};

pub mod df;
pub mod health;

/// Errors that can happen while asking ceph about itself
///
/// Anything underneath a check can be converted into a `CephError`.
#[derive(Debug, From)]
pub enum CephError {
    /// Running the `ceph` command went wrong
    Command(CommandError),
    /// The command said something that isn't the JSON we expected
    Parse(serde_json::Error),
    /// The numbers reported don't add up
    #[from(ignore)]
    Inconsistent { total: u64, used: u64, avail: u64 },
}

impl fmt::Display for CephError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CephError::Command(ref e) => write!(f, "ceph {}", e),
            CephError::Parse(ref e) => write!(f, "unable to parse ceph output: {}", e),
            CephError::Inconsistent { total, used, avail } => write!(
                f,
                "used ({}) + avail ({}) != total ({})",
                used, avail, total
            ),
        }
    }
}

impl std::error::Error for CephError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            CephError::Command(ref e) => Some(e),
            CephError::Parse(ref e) => Some(e),
            CephError::Inconsistent { .. } => None,
        }
    }
}

/// The `ceph` command, or anything pretending to be it
pub struct Ceph<E = Program> {
    exec: E,
}

impl Ceph<Program> {
    /// Use the `ceph` binary at `path`, which may just be a name on `$PATH`
    pub fn at(path: &str) -> Ceph<Program> {
        Ceph::new(Program::new(path))
    }
}

impl<E: Execute> Ceph<E> {
    pub fn new(exec: E) -> Ceph<E> {
        Ceph { exec }
    }

    /// Raw JSON from `ceph df --format=json`
    pub fn df_json(&self) -> Result<Vec<u8>, CommandError> {
        self.exec.execute(&["df", "--format=json"])
    }

    /// Whatever `ceph health` prints
    pub fn health(&self) -> Result<String, CommandError> {
        let out = self.exec.execute(&["health"])?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
