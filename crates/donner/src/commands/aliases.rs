use clap::ArgMatches;
use tracing::info;

use donner_core::aliases::write_aliases;

use super::{load_config, mode_flags};

pub(crate) fn handle_aliases_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let (strict, fallback) = mode_flags(matches);
    let config = load_config()?;
    let commands = config.list_commands();

    let mut stdout = std::io::stdout().lock();
    write_aliases(&mut stdout, &commands, strict, fallback)?;

    info!(event = "cli.aliases_completed", count = commands.len());
    Ok(())
}
