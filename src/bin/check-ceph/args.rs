use std::ffi::OsString;

use structopt::clap::{AppSettings, ArgGroup, ErrorKind};
use structopt::StructOpt;

use ceph_nagios_plugins::ceph::{CephError, CheckConfig, CheckKind};
use ceph_nagios_plugins::Status;

/// Check the health of a Ceph cluster using the ceph command line tool
///
/// Exits 0 (OK), 1 (WARNING), 2 (CRITICAL) or 3 (UNKNOWN).
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-ceph (part of ceph-nagios-plugins)",
    setting = AppSettings::ColoredHelp,
    setting = AppSettings::SubcommandRequiredElseHelp,
    version_short = "v"
)]
pub(crate) struct Args {
    #[structopt(
        short = "e",
        long = "exe",
        help = "ceph executable",
        default_value = "/usr/bin/ceph"
    )]
    pub exe: String,
    #[structopt(
        short = "c",
        long = "conf",
        help = "alternative ceph conf file",
        default_value = "/etc/ceph/ceph.conf"
    )]
    pub conf: String,
    #[structopt(short = "m", long = "monaddress", help = "ceph monitor address[:port]")]
    pub monaddress: Option<String>,
    #[structopt(short = "i", long = "id", alias = "user", help = "ceph client id")]
    pub id: Option<String>,
    #[structopt(short = "n", long = "name", help = "ceph client name")]
    pub name: Option<String>,
    #[structopt(short = "k", long = "keyring", help = "ceph client keyring file")]
    pub keyring: Option<String>,
    #[structopt(
        long = "check-exit-status",
        help = "Go critical if ceph exits non-zero, whatever it printed"
    )]
    pub check_exit_status: bool,
    #[structopt(long = "debug", help = "Log what the check is doing to stderr")]
    pub debug: bool,
    #[structopt(subcommand)]
    pub subject: Subject,
}

#[derive(StructOpt, Debug)]
pub(crate) enum Subject {
    /// Ceph common options
    #[structopt(name = "common")]
    Common(CommonChecks),
    /// Ceph monitor options
    #[structopt(name = "mon")]
    Mon(MonChecks),
    /// Ceph osd options
    #[structopt(name = "osd")]
    Osd(OsdChecks),
    /// Ceph mds options
    #[structopt(name = "mds")]
    Mds(MdsChecks),
}

#[derive(StructOpt, Debug, Default)]
#[structopt(group = ArgGroup::with_name("check").required(true))]
pub(crate) struct CommonChecks {
    #[structopt(long = "status", group = "check", help = "Show ceph status")]
    pub status: bool,
    #[structopt(long = "health", group = "check", help = "Show ceph health")]
    pub health: bool,
    #[structopt(long = "quorum", group = "check", help = "Show ceph quorum")]
    pub quorum: bool,
    #[structopt(long = "df", group = "check", help = "Show ceph pools status")]
    pub df: bool,
}

#[derive(StructOpt, Debug, Default)]
#[structopt(group = ArgGroup::with_name("check").required(true))]
pub(crate) struct MonChecks {
    #[structopt(long = "monstatus", group = "check", help = "Show ceph mon status")]
    pub monstatus: bool,
    #[structopt(long = "monstat", group = "check", help = "Show ceph mon stat")]
    pub monstat: bool,
    #[structopt(
        long = "monhealth",
        name = "ID",
        group = "check",
        help = "Ping the monitor with this id and report its health"
    )]
    pub monhealth: Option<String>,
}

#[derive(StructOpt, Debug, Default)]
#[structopt(group = ArgGroup::with_name("check").required(true))]
pub(crate) struct OsdChecks {
    #[structopt(long = "stat", group = "check", help = "Show ceph osd status")]
    pub stat: bool,
    #[structopt(long = "tree", group = "check", help = "Show ceph osd tree")]
    pub tree: bool,
}

#[derive(StructOpt, Debug, Default)]
#[structopt(group = ArgGroup::with_name("check").required(true))]
pub(crate) struct MdsChecks {
    #[structopt(long = "mdsstat", group = "check", help = "Show ceph mds status")]
    pub mdsstat: bool,
}

impl Subject {
    /// The single check selected within this subject
    fn kind(self) -> Option<CheckKind> {
        match self {
            Subject::Common(c) => match (c.status, c.health, c.quorum, c.df) {
                (true, false, false, false) => Some(CheckKind::Status),
                (false, true, false, false) => Some(CheckKind::Health),
                (false, false, true, false) => Some(CheckKind::Quorum),
                (false, false, false, true) => Some(CheckKind::Df),
                _ => None,
            },
            Subject::Mon(m) => match (m.monstatus, m.monstat, m.monhealth) {
                (true, false, None) => Some(CheckKind::MonStatus),
                (false, true, None) => Some(CheckKind::MonStat),
                (false, false, Some(id)) => Some(CheckKind::MonPing(id)),
                _ => None,
            },
            Subject::Osd(o) => match (o.stat, o.tree) {
                (true, false) => Some(CheckKind::OsdStat),
                (false, true) => Some(CheckKind::OsdTree),
                _ => None,
            },
            Subject::Mds(m) => {
                if m.mdsstat {
                    Some(CheckKind::MdsStat)
                } else {
                    None
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        match *self {
            Subject::Common(_) => "common",
            Subject::Mon(_) => "mon",
            Subject::Osd(_) => "osd",
            Subject::Mds(_) => "mds",
        }
    }
}

/// Parsing stopped before a check could run: print `message` and exit
#[derive(Debug)]
pub(crate) struct EarlyExit {
    pub status: Status,
    pub message: String,
    /// Usage errors go to stderr, help and version to stdout
    pub to_stderr: bool,
}

impl Args {
    /// Parse `argv`, deciding the exit status for everything that isn't a check
    ///
    /// No arguments at all prints the help and is critical, as is any usage
    /// error. `--help` and `--version` are ok.
    pub(crate) fn from_argv<I>(argv: I) -> Result<Args, EarlyExit>
    where
        I: IntoIterator,
        I::Item: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.len() <= 1 {
            let mut help = Vec::new();
            // writing into a Vec can't fail
            let _ = Args::clap().write_help(&mut help);
            return Err(EarlyExit {
                status: Status::Critical,
                message: String::from_utf8_lossy(&help).into_owned(),
                to_stderr: false,
            });
        }
        Args::from_iter_safe(argv).map_err(|e| match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => EarlyExit {
                status: Status::Ok,
                message: e.message,
                to_stderr: false,
            },
            _ => EarlyExit {
                status: Status::Critical,
                message: e.message,
                to_stderr: true,
            },
        })
    }

    /// Fix the parsed arguments into the config for one check
    pub fn into_config(self) -> Result<CheckConfig, CephError> {
        let subject = self.subject.name();
        let kind = self.subject.kind().ok_or_else(|| {
            CephError::Usage(format!("exactly one check must be chosen for `{}`", subject))
        })?;
        Ok(CheckConfig {
            exe: self.exe,
            conf: self.conf,
            monaddress: self.monaddress,
            id: self.id,
            name: self.name,
            keyring: self.keyring,
            kind,
            check_exit_status: self.check_exit_status,
        })
    }
}
