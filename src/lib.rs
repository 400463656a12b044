//! Nagios plugins for Ceph clusters
//!
//! Every check in here asks the `ceph` command line tool about the cluster
//! and turns what it says into one of the four Nagios statuses plus a single
//! line of output.
//!
//! Expected use: build a `ceph::CheckConfig`, hand it to `ceph::run_check`
//! along with a runner, and exit with the status of the result:
//!
//! ```rust,no_run
//! use ceph_nagios_plugins::ceph::{run_check, CheckConfig, CheckKind, CheckResult, SystemRunner};
//!
//! let config = CheckConfig::new(CheckKind::Health);
//! let result = run_check(&config, &SystemRunner).unwrap_or_else(CheckResult::from);
//! println!("{}", result.message);
//! result.status.exit();
//! ```

use std::fmt;
use std::process;
use std::str::FromStr;

pub mod ceph;

/// All possible statuses of a check, ordered from best to worst
#[must_use]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// The exit code that tells the monitoring system about this status
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn exit(self) -> ! {
        process::exit(self.code())
    }

    pub fn str_values() -> [&'static str; 4] {
        ["ok", "warning", "critical", "unknown"]
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseStatusError(String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "'{}' is not a status, expected one of {}",
            self.0,
            Status::str_values().join(", ")
        )
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Case-insensitive, and accepts the short forms Ceph uses in its
    /// `HEALTH_*` strings (`warn`, `err`)
    fn from_str(s: &str) -> Result<Status, ParseStatusError> {
        match s.to_ascii_lowercase().as_ref() {
            "ok" => Ok(Status::Ok),
            "warn" | "warning" => Ok(Status::Warning),
            "err" | "error" | "critical" => Ok(Status::Critical),
            "unknown" => Ok(Status::Unknown),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::cmp::max;

    use super::Status;

    #[test]
    fn codes_match_nagios() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::Warning.code(), 1);
        assert_eq!(Status::Critical.code(), 2);
        assert_eq!(Status::Unknown.code(), 3);
    }

    #[test]
    fn worst_status_wins() {
        assert_eq!(max(Status::Ok, Status::Warning), Status::Warning);
        assert_eq!(max(Status::Critical, Status::Warning), Status::Critical);
    }

    #[test]
    fn parses_ceph_suffixes() {
        assert_eq!("OK".parse(), Ok(Status::Ok));
        assert_eq!("WARN".parse(), Ok(Status::Warning));
        assert_eq!("warning".parse(), Ok(Status::Warning));
        assert_eq!("ERR".parse(), Ok(Status::Critical));
        assert_eq!("UNKNOWN".parse(), Ok(Status::Unknown));
        assert!("HEALTHY".parse::<Status>().is_err());
    }

    #[test]
    fn displays_uppercase() {
        assert_eq!(Status::Warning.to_string(), "WARNING");
    }
}
