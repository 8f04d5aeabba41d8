use crate::errors::DonnerError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("No command to execute")]
    EmptyCommand,

    #[error("Executable '{program}' not found in PATH")]
    NotFound { program: String },

    #[error("Failed to start '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl DonnerError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::EmptyCommand => "PROCESS_EMPTY_COMMAND",
            ProcessError::NotFound { .. } => "PROCESS_NOT_FOUND",
            ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProcessError::EmptyCommand | ProcessError::NotFound { .. }
        )
    }
}
