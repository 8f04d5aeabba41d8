//! Shell alias generation for configured commands.

use std::io::{self, Write};

use tracing::warn;

const EVAL_INSTRUCTION: &str = "\n# copy and paste the output into your terminal or run\n";

/// Flags echoed into every alias, in the order `--strict`, `--fallback`.
fn mode_flags(strict: bool, fallback: bool) -> Vec<&'static str> {
    let mut flags = Vec::with_capacity(2);
    if strict {
        flags.push("--strict");
    }
    if fallback {
        flags.push("--fallback");
    }
    flags
}

/// Whether `command` can be used verbatim as an alias name and inside the
/// single-quoted alias body.
fn is_alias_safe(command: &str) -> bool {
    !command.is_empty()
        && command
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+' | ':' | '@'))
}

/// Write one `alias` definition per command followed by an `eval` hint.
///
/// Commands whose names would need shell quoting are skipped with a warning.
pub fn write_aliases<W: Write>(
    w: &mut W,
    commands: &[&str],
    strict: bool,
    fallback: bool,
) -> io::Result<()> {
    let flags = mode_flags(strict, fallback);

    for command in commands {
        if !is_alias_safe(command) {
            warn!(event = "core.aliases.command_skipped", command = *command);
            continue;
        }
        let invocation: Vec<&str> = flags.iter().copied().chain([*command]).collect();
        writeln!(w, "alias {}='donner run {}';", command, invocation.join(" "))?;
    }

    let alias_command: Vec<&str> = ["donner", "aliases"].into_iter().chain(flags).collect();
    write!(w, "{}", EVAL_INSTRUCTION)?;
    writeln!(w, "#  eval $({})", alias_command.join(" "))?;

    Ok(())
}
