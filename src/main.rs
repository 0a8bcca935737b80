//! `hmcl-build` entrypoint.
//!
//! Generates the OpenJFX dependency manifest, warms mirror caches, checks
//! translations and prints host coordinates for the HMCL launcher build.

use clap::Parser;
use hmcl_build::cli::Cli;
use hmcl_build::config::BuildConfig;
use hmcl_build::jobs::{self, Result};
use hmcl_build::logging;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stderr = std::io::stderr();
    if let Err(err) = logging::init(logging::level_filter(cli.verbosity, cli.quiet)) {
        write_stderr_line(&mut stderr, format!("logging unavailable: {err}"));
    }
    let run_result = run(&cli, &mut std::io::stdout());
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let config = BuildConfig::load(cli.config.as_deref())?;
    jobs::dispatch(cli.command, &config, stdout)
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Nothing left to report to.
    }
}
