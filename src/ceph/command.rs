//! Turn a `CheckConfig` into the argv for `ceph`

use std::fmt;
use std::path::Path;

use crate::ceph::{CephError, CheckConfig};

/// The literal argument vector to execute, program first
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CommandVector(Vec<String>);

impl CommandVector {
    /// Lay out the global flags in the order `ceph` has always been called
    /// with, followed by the subcommand for the check kind
    pub fn new(config: &CheckConfig) -> CommandVector {
        let mut cmd = vec![config.exe.clone(), "-c".to_owned(), config.conf.clone()];
        let optional = [
            ("-m", &config.monaddress),
            ("--id", &config.id),
            ("--name", &config.name),
            ("--keyring", &config.keyring),
        ];
        for &(flag, value) in optional.iter() {
            if let Some(ref value) = *value {
                cmd.push(flag.to_owned());
                cmd.push(value.clone());
            }
        }
        cmd.extend(config.kind.subcommand());
        CommandVector(cmd)
    }

    #[cfg(test)]
    pub(crate) fn from_tokens(tokens: Vec<String>) -> CommandVector {
        CommandVector(tokens)
    }

    pub fn program(&self) -> &str {
        &self.0[0]
    }

    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

fn require_file(path: &str) -> Result<(), CephError> {
    if Path::new(path).exists() {
        Ok(())
    } else {
        Err(CephError::NoSuchFile(path.to_owned()))
    }
}

/// Check that the files the config points at exist, then build the command
///
/// The executable itself is not checked here, it may be a bare name that is
/// looked up in `PATH` when it is run.
pub fn build_command(config: &CheckConfig) -> Result<CommandVector, CephError> {
    require_file(&config.conf)?;
    if let Some(ref keyring) = config.keyring {
        require_file(keyring)?;
    }
    Ok(CommandVector::new(config))
}

#[cfg(test)]
mod test {
    use tempfile::NamedTempFile;

    use super::{build_command, CommandVector};
    use crate::ceph::{CephError, CheckConfig, CheckKind};

    fn config_with(kind: CheckKind) -> CheckConfig {
        let mut config = CheckConfig::new(kind);
        config.exe = "ceph".into();
        config.conf = "/etc/ceph/test.conf".into();
        config
    }

    fn path_of(file: &NamedTempFile) -> String {
        file.path().to_str().unwrap().to_owned()
    }

    #[test]
    fn minimal_status_command() {
        let cmd = CommandVector::new(&config_with(CheckKind::Status));
        assert_eq!(cmd.tokens(), &["ceph", "-c", "/etc/ceph/test.conf", "status"]);
        assert_eq!(cmd.program(), "ceph");
        assert_eq!(cmd.to_string(), "ceph -c /etc/ceph/test.conf status");
    }

    #[test]
    fn global_flags_keep_their_order() {
        let mut config = config_with(CheckKind::Status);
        config.keyring = Some("/etc/ceph/client.keyring".into());
        config.name = Some("client.nagios".into());
        config.monaddress = Some("10.0.0.1:6789".into());
        config.id = Some("nagios".into());

        let cmd = CommandVector::new(&config);
        assert_eq!(
            cmd.tokens(),
            &[
                "ceph",
                "-c",
                "/etc/ceph/test.conf",
                "-m",
                "10.0.0.1:6789",
                "--id",
                "nagios",
                "--name",
                "client.nagios",
                "--keyring",
                "/etc/ceph/client.keyring",
                "status",
            ]
        );
        assert_eq!(cmd.tokens().last().unwrap(), "status");
    }

    #[test]
    fn trailing_tokens_per_kind() {
        let cases = vec![
            (CheckKind::Health, vec!["health"]),
            (CheckKind::Df, vec!["df"]),
            (CheckKind::MonStatus, vec!["mon_status"]),
            (CheckKind::MonPing("ceph-1".into()), vec!["ping", "mon.ceph-1"]),
            (CheckKind::OsdStat, vec!["osd", "stat"]),
            (CheckKind::OsdTree, vec!["osd", "tree"]),
            (CheckKind::MdsStat, vec!["mds", "stat"]),
        ];
        for (kind, tail) in cases {
            let cmd = CommandVector::new(&config_with(kind));
            assert_eq!(&cmd.args()[2..], tail.as_slice());
        }
    }

    #[test]
    fn building_is_repeatable() {
        let mut config = config_with(CheckKind::OsdTree);
        config.id = Some("admin".into());
        assert_eq!(CommandVector::new(&config), CommandVector::new(&config));
    }

    #[test]
    fn missing_conf_is_rejected() {
        let config = config_with(CheckKind::Health);
        match build_command(&config) {
            Err(CephError::NoSuchFile(path)) => assert_eq!(path, "/etc/ceph/test.conf"),
            other => panic!("expected NoSuchFile, got {:?}", other),
        }
    }

    #[test]
    fn missing_keyring_is_rejected() {
        let conf = NamedTempFile::new().unwrap();
        let mut config = config_with(CheckKind::Health);
        config.conf = path_of(&conf);
        config.keyring = Some("/nonexistent/ceph.keyring".into());
        let err = build_command(&config).unwrap_err();
        assert_eq!(err.to_string(), "No such file - /nonexistent/ceph.keyring");
    }

    #[test]
    fn existing_files_build() {
        let conf = NamedTempFile::new().unwrap();
        let keyring = NamedTempFile::new().unwrap();
        let mut config = config_with(CheckKind::Health);
        config.conf = path_of(&conf);
        config.keyring = Some(path_of(&keyring));
        let cmd = build_command(&config).unwrap();
        assert_eq!(cmd, CommandVector::new(&config));
    }
}
