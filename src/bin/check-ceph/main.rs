//! Check the health of a Ceph cluster
//!
//! Runs one `ceph` subcommand, chosen on the command line, and reports what
//! it says as a Nagios status.

mod args;

use std::env;
use std::io::{self, Write};

use log::debug;

use ceph_nagios_plugins::ceph::{run_check, CephError, CheckResult, SystemRunner};
use ceph_nagios_plugins::Status;

use crate::args::Args;

fn init_logging(debug: bool) {
    let level = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("failed to initialize logger: {}", e);
    }
}

/// Write the result line, failures included, and return the status to exit with
///
/// Nagios only reads stdout, so this is where every outcome of a check goes.
fn report<W: Write>(out: &mut W, outcome: Result<CheckResult, CephError>) -> Status {
    let result = outcome.unwrap_or_else(CheckResult::from);
    if let Err(e) = writeln!(out, "{}", result.message) {
        eprintln!("unable to write check output: {}", e);
    }
    result.status
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args = match Args::from_argv(env::args_os()) {
        Ok(args) => args,
        Err(exit) => {
            if exit.to_stderr {
                eprintln!("{}", exit.message);
            } else if !exit.message.is_empty() {
                println!("{}", exit.message);
            }
            exit.status.exit();
        }
    };
    init_logging(args.debug);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = args.into_config().and_then(|config| {
        debug!("checking {:?}", config);
        run_check(&config, &SystemRunner)
    });
    let status = report(&mut out, outcome);
    // process::exit skips destructors, so flush before leaving
    let _ = out.flush();
    status.exit();
}
