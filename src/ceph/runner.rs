use std::io;
use std::process::{Command, Stdio};

use log::debug;

use crate::ceph::CommandVector;

/// What came back from running a `CommandVector`
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can run a `CommandVector` to completion
pub trait Runner {
    /// Errors only if the program could not be started at all
    fn run(&self, command: &CommandVector) -> io::Result<CommandOutput>;
}

/// Runs commands as child processes, without a shell in between
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, command: &CommandVector) -> io::Result<CommandOutput> {
        let output = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output()?;
        debug!("`{}` exited with {}", command, output.status);
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
