//! Run external commands and capture what they say
//!
//! Checks don't talk to `std::process` directly, they go through
//! [`Execute`] so that tests can hand them canned output.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::Command;

use derive_more::From;
use tracing::{debug, warn};

/// Errors from running a command
#[derive(Debug, From)]
pub enum CommandError {
    /// The program could not be started at all
    Spawn(io::Error),
    /// The program ran but did not exit successfully
    ///
    /// `code` is `None` if it was killed by a signal. `output` is stdout
    /// followed by stderr.
    #[from(ignore)]
    Failed { code: Option<i32>, output: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CommandError::Spawn(ref e) => write!(f, "unable to launch: {}", e),
            CommandError::Failed {
                code: Some(code),
                ref output,
            } => write!(f, "exited with status {}: {}", code, output.trim()),
            CommandError::Failed {
                code: None,
                ref output,
            } => write!(f, "killed by a signal: {}", output.trim()),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            CommandError::Spawn(ref e) => Some(e),
            CommandError::Failed { .. } => None,
        }
    }
}

/// Something that can be asked to run with some arguments
pub trait Execute {
    /// Run to completion, returning stdout on success
    fn execute(&self, args: &[&str]) -> Result<Vec<u8>, CommandError>;
}

/// A program found on `$PATH` or at an explicit location
///
/// Waits for the program to exit, however long that takes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    path: OsString,
}

impl Program {
    pub fn new<S: Into<OsString>>(path: S) -> Program {
        Program { path: path.into() }
    }
}

impl Execute for Program {
    fn execute(&self, args: &[&str]) -> Result<Vec<u8>, CommandError> {
        debug!(program = ?self.path, ?args, "executing");
        let out = Command::new(&self.path).args(args).output().map_err(|e| {
            warn!(program = ?self.path, error = %e, "unable to launch");
            e
        })?;
        if out.status.success() {
            return Ok(out.stdout);
        }

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));
        warn!(program = ?self.path, status = ?out.status.code(), "command failed");
        Err(CommandError::Failed {
            code: out.status.code(),
            output,
        })
    }
}
