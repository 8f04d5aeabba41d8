use clap::ArgMatches;
use tracing::{error, warn};

use donner_core::config::{self, ConfigError, Configuration};
use donner_core::events;
use donner_core::DonnerError;

mod aliases;
mod commands_list;
mod completions;
mod run;

/// Dispatch the parsed subcommand. Returns the process exit code.
pub fn run_command(matches: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("aliases", sub_matches)) => {
            aliases::handle_aliases_command(sub_matches).map(|()| 0)
        }
        Some(("commands", sub_matches)) => {
            commands_list::handle_commands_command(sub_matches).map(|()| 0)
        }
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches).map(|()| 0)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load the configuration, logging why it failed.
fn load_config() -> Result<Configuration, ConfigError> {
    config::load_config().inspect_err(|e| {
        warn!(
            event = "cli.config.load_failed",
            error = %e,
            error_code = e.error_code()
        );
    })
}

/// Strict and fallback mode flags shared by `run` and `aliases`.
fn mode_flags(matches: &ArgMatches) -> (bool, bool) {
    (matches.get_flag("strict"), matches.get_flag("fallback"))
}
