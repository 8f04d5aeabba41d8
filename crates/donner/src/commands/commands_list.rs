use clap::ArgMatches;

use super::load_config;

pub(crate) fn handle_commands_command(
    _matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    let commands = config.list_commands();
    let width = commands.iter().map(|c| c.len()).max().unwrap_or(0);

    for command in commands {
        let strategy = config.strategy_for(command).unwrap_or("-");
        let handler = config.strategy(strategy).map_or("-", |h| h.name());
        println!("{command:<width$}  {strategy} ({handler})");
    }

    if let Some(default) = config.default_strategy() {
        println!();
        println!("default strategy: {default}");
    }

    Ok(())
}
