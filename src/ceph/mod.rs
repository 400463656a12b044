//! Checks that ask the `ceph` command line tool about cluster health
//!
//! A check goes through three steps: a `CheckConfig` describes what to ask,
//! `build_command` turns it into the argument vector for `ceph`, and
//! `run_check` runs that vector and classifies whatever comes back.

use std::fmt;

mod command;
mod error;
mod mon;
mod output;
mod runner;

pub use self::command::{build_command, CommandVector};
pub use self::error::CephError;
pub use self::output::{interpret, run_check, CheckResult};
pub use self::runner::{CommandOutput, Runner, SystemRunner};

pub const DEFAULT_CEPH_EXE: &str = "/usr/bin/ceph";
pub const DEFAULT_CEPH_CONF: &str = "/etc/ceph/ceph.conf";

/// Which `ceph` subcommand to run
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CheckKind {
    // common
    Status,
    Health,
    Quorum,
    Df,
    // mon
    MonStatus,
    MonStat,
    /// Ping a single monitor by id and report its health
    MonPing(String),
    // osd
    OsdStat,
    OsdTree,
    // mds
    MdsStat,
}

impl CheckKind {
    /// The subject group on the command line that selects this kind
    pub fn subject(&self) -> &'static str {
        use self::CheckKind::*;
        match *self {
            Status | Health | Quorum | Df => "common",
            MonStatus | MonStat | MonPing(_) => "mon",
            OsdStat | OsdTree => "osd",
            MdsStat => "mds",
        }
    }

    /// The tokens that go after the global flags
    pub fn subcommand(&self) -> Vec<String> {
        use self::CheckKind::*;
        let tokens: &[&str] = match *self {
            Status => &["status"],
            Health => &["health"],
            Quorum => &["quorum_status"],
            Df => &["df"],
            MonStatus => &["mon_status"],
            MonStat => &["mon", "stat"],
            MonPing(ref id) => return vec!["ping".to_owned(), format!("mon.{}", id)],
            OsdStat => &["osd", "stat"],
            OsdTree => &["osd", "tree"],
            MdsStat => &["mds", "stat"],
        };
        tokens.iter().map(|t| (*t).to_owned()).collect()
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.subject(), self.subcommand().join(" "))
    }
}

/// Everything needed to run one check, fixed once the arguments are parsed
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CheckConfig {
    pub exe: String,
    pub conf: String,
    pub monaddress: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub keyring: Option<String>,
    pub kind: CheckKind,
    /// Report a non-zero exit of `ceph` as critical, whatever it printed
    pub check_exit_status: bool,
}

impl CheckConfig {
    /// A config using the default executable and ceph.conf
    pub fn new(kind: CheckKind) -> CheckConfig {
        CheckConfig {
            exe: DEFAULT_CEPH_EXE.to_owned(),
            conf: DEFAULT_CEPH_CONF.to_owned(),
            monaddress: None,
            id: None,
            name: None,
            keyring: None,
            kind,
            check_exit_status: false,
        }
    }
}
