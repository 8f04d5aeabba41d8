use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

fn strict_arg() -> Arg {
    Arg::new("strict")
        .short('s')
        .long("strict")
        .help("Require an explicit command binding; unmapped commands fail")
        .action(ArgAction::SetTrue)
}

fn fallback_arg() -> Arg {
    Arg::new("fallback")
        .short('f')
        .long("fallback")
        .help("Run unmapped commands locally, without wrapping")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("donner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generic command wrapper for containerized development")
        .long_about("Donner wraps commands in strategies such as 'docker-compose exec' or 'docker run', configured per command in a .donner.yml file. You no longer have to remember which service to use or whether to run or exec a command.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .visible_alias("r")
                .about("Run a command through its configured strategy")
                .arg(strict_arg())
                .arg(fallback_arg())
                .arg(
                    Arg::new("command")
                        .help("Command to run, followed by its arguments")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true) // Pass flags like -la through to the command
                        .index(1)
                )
        )
        .subcommand(
            Command::new("aliases")
                .visible_alias("a")
                .about("Generate shell aliases for every configured command")
                .arg(strict_arg())
                .arg(fallback_arg())
        )
        .subcommand(
            Command::new("commands")
                .about("List configured commands and their strategies")
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .index(1)
                )
        )
}
