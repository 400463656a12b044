use std::error::Error;
use std::fmt;
use std::io;

use derive_more::From;

use crate::Status;

/// Every way a check can fail to produce a health reading
///
/// Each variant knows which `Status` it should be reported as, see
/// `CephError::status`.
#[derive(Debug, From)]
pub enum CephError {
    /// The arguments did not select a check
    #[from(ignore)]
    Usage(String),
    /// A file named on the command line does not exist
    #[from(ignore)]
    NoSuchFile(String),
    /// The ceph executable could not be spawned
    #[from(ignore)]
    ExecutableNotFound { exe: String, source: io::Error },
    /// `ceph` exited non-zero and exit statuses are being checked
    #[from(ignore)]
    ToolFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },
    /// `ceph` printed nothing on stdout, but complained on stderr
    #[from(ignore)]
    Stderr(String),
    /// `ceph ping` was asked about a monitor that doesn't exist
    #[from(ignore)]
    InvalidMon(String),
    /// `ceph ping` answered without any health status
    #[from(ignore)]
    NoMons,
    /// The reply to `ceph ping` was not the JSON we expect
    UnparseableReply(serde_json::Error),
    /// Nothing at all on stdout or stderr
    #[from(ignore)]
    NoOutput,
}

impl CephError {
    pub fn status(&self) -> Status {
        match *self {
            CephError::UnparseableReply(_) => Status::Unknown,
            _ => Status::Critical,
        }
    }
}

impl fmt::Display for CephError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::CephError::*;
        match *self {
            Usage(ref msg) => write!(f, "ERROR: {}", msg),
            NoSuchFile(ref path) => write!(f, "No such file - {}", path),
            ExecutableNotFound { ref exe, .. } => {
                write!(f, "Ceph executable not found - {}", exe)
            }
            ToolFailed {
                ref command,
                code,
                ref output,
            } => {
                match code {
                    Some(code) => write!(f, "ERROR: `{}` exited with {}", command, code)?,
                    None => write!(f, "ERROR: `{}` was killed by a signal", command)?,
                }
                if !output.is_empty() {
                    write!(f, ": {}", output)?;
                }
                Ok(())
            }
            Stderr(ref err) => write!(f, "ERROR: {}", err),
            InvalidMon(ref id) => write!(f, "{} is not a valid ceph mon", id),
            NoMons => f.write_str("No mons found"),
            UnparseableReply(_) => f.write_str("Unknown error"),
            NoOutput => f.write_str("CRITICAL: no output from ceph"),
        }
    }
}

impl Error for CephError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CephError::ExecutableNotFound { ref source, .. } => Some(source),
            CephError::UnparseableReply(ref e) => Some(e),
            _ => None,
        }
    }
}
