use clap::ArgMatches;
use tracing::{error, info};

use donner_core::process::{self, EXIT_EXEC_FAILED};

use super::{load_config, mode_flags};

pub(crate) fn handle_run_command(
    matches: &ArgMatches,
) -> Result<i32, Box<dyn std::error::Error>> {
    let args: Vec<String> = matches
        .get_many::<String>("command")
        .ok_or("Command argument is required")?
        .cloned()
        .collect();
    let (strict, fallback) = mode_flags(matches);

    info!(
        event = "cli.run_started",
        command = args.first().map(String::as_str),
        strict = strict,
        fallback = fallback
    );

    let config = load_config()?;
    let argv = config.dispatch(&args, strict, fallback).inspect_err(|e| {
        error!(event = "cli.run_resolve_failed", error = %e);
    })?;

    match process::run_command(&argv) {
        Ok(code) => {
            info!(event = "cli.run_completed", exit_code = code);
            Ok(code)
        }
        Err(e) => {
            eprintln!("donner: {}", e);
            error!(event = "cli.run_exec_failed", error = %e);
            Ok(EXIT_EXEC_FAILED)
        }
    }
}
