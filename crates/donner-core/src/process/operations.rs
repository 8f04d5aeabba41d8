use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::process::errors::ProcessError;

/// Exit status used when the wrapped command could not be started at all.
pub const EXIT_EXEC_FAILED: i32 = 127;

/// Run `argv` attached to the current terminal and wait for it.
///
/// stdin, stdout and stderr are inherited. The program is looked up on `PATH`
/// only to report a missing executable; the child sees `argv[0]` as typed.
/// Returns the child's exit code verbatim; a child terminated by a signal is
/// reported as `128 + signal`.
pub fn run_command(argv: &[String]) -> Result<i32, ProcessError> {
    let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

    let executable = which::which(program).map_err(|e| {
        debug!(event = "core.process.lookup_failed", program = program.as_str(), error = %e);
        ProcessError::NotFound {
            program: program.clone(),
        }
    })?;

    info!(
        event = "core.process.spawn_started",
        program = program.as_str(),
        executable = %executable.display(),
        args = ?args
    );

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| ProcessError::SpawnFailed {
            program: program.clone(),
            source,
        })?;

    let code = exit_code(status);
    info!(
        event = "core.process.spawn_completed",
        program = program.as_str(),
        exit_code = code
    );

    Ok(code)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
