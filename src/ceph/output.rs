//! Run `ceph` and decide what its output means

use log::debug;

use crate::ceph::mon::{is_object_not_found, status_from_health, PingReply};
use crate::ceph::{build_command, CephError, CheckConfig, CheckKind, CommandOutput, Runner};
use crate::Status;

/// The health markers `ceph` prints, in the order they are looked for
const MARKERS: [(&str, Status); 3] = [
    ("HEALTH_OK", Status::Ok),
    ("HEALTH_WARN", Status::Warning),
    ("HEALTH_ERR", Status::Critical),
];

/// The status to exit with and the line to print
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
}

impl CheckResult {
    fn new<S: Into<String>>(status: Status, message: S) -> CheckResult {
        CheckResult {
            status,
            message: message.into(),
        }
    }
}

impl From<CephError> for CheckResult {
    fn from(e: CephError) -> CheckResult {
        CheckResult::new(e.status(), e.to_string())
    }
}

/// Validate the config, run the command it describes and classify the output
///
/// Nothing is spawned if validation fails.
pub fn run_check<R: Runner>(config: &CheckConfig, runner: &R) -> Result<CheckResult, CephError> {
    let command = build_command(config)?;
    debug!("running `{}` for {}", command, config.kind);
    let output = runner
        .run(&command)
        .map_err(|source| CephError::ExecutableNotFound {
            exe: config.exe.clone(),
            source,
        })?;
    if config.check_exit_status && !output.success() {
        return Err(CephError::ToolFailed {
            command: command.to_string(),
            code: output.code,
            output: one_line(&format!("{}\n{}", output.stdout, output.stderr)),
        });
    }
    interpret(&config.kind, &output)
}

/// Classify the captured output of a check of `kind`
pub fn interpret(kind: &CheckKind, output: &CommandOutput) -> Result<CheckResult, CephError> {
    if let CheckKind::MonPing(ref id) = *kind {
        return interpret_ping(id, output);
    }

    let stdout = one_line(&output.stdout);
    if !stdout.is_empty() {
        for &(marker, status) in MARKERS.iter() {
            if stdout.contains(marker) {
                debug!("found {} in output", marker);
                return Ok(CheckResult::new(status, stdout));
            }
        }
        debug!("no health marker in output");
        return Ok(CheckResult::new(Status::Ok, format!("OK: {}", stdout)));
    }

    match first_error_line(&output.stderr) {
        Some(err) => Err(CephError::Stderr(err)),
        None => Err(CephError::NoOutput),
    }
}

fn interpret_ping(id: &str, output: &CommandOutput) -> Result<CheckResult, CephError> {
    let reply: PingReply = match serde_json::from_str(&output.stdout) {
        Ok(reply) => reply,
        Err(e) => {
            if is_object_not_found(&output.stdout) || is_object_not_found(&output.stderr) {
                return Err(CephError::InvalidMon(id.to_owned()));
            }
            debug!("unable to parse ping reply: {}", e);
            return Err(CephError::from(e));
        }
    };
    let health = reply.health_status().ok_or(CephError::NoMons)?;
    Ok(CheckResult::new(status_from_health(health), health))
}

/// Trim and join lines with "; " so the result fits on one Nagios line
fn one_line(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Whether `prefix` is a ceph log header: a timestamp and a thread id
fn is_log_header(prefix: &str) -> bool {
    let mut tokens = prefix.split_whitespace().peekable();
    tokens.peek().is_some()
        && tokens.all(|token| {
            token
                .chars()
                .all(|c| c.is_ascii_hexdigit() || ":.-+T".contains(c))
        })
}

/// The first line of stderr, without the log header ceph puts before `-1 `
fn first_error_line(stderr: &str) -> Option<String> {
    let line = stderr.lines().map(str::trim).find(|line| !line.is_empty())?;
    let message = line
        .match_indices("-1 ")
        .find(|&(idx, _)| is_log_header(&line[..idx]))
        .map_or(line, |(idx, marker)| line[idx + marker.len()..].trim());
    Some(message.to_owned())
}
