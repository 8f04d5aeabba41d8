use std::path::PathBuf;

use crate::errors::DonnerError;
use crate::handlers::HandlerError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No config file found (looked for {searched})")]
    ConfigNotFound { searched: String },

    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {message}")]
    MalformedInput { message: String },

    #[error("No strategies specified")]
    NoStrategiesSpecified,

    #[error("No commands specified")]
    NoCommandsSpecified,

    #[error("Strategy '{strategy}': {source}")]
    StrategyError {
        strategy: String,
        #[source]
        source: HandlerError,
    },

    #[error("Default strategy '{strategy}' is not defined")]
    InvalidHandler { strategy: String },

    #[error("Command '{command}' references undefined strategy '{strategy}'")]
    InvalidStrategy { command: String, strategy: String },

    #[error("Command '{command}' must be a bare executable name, not a path")]
    PathSpecifiedInCommand { command: String },
}

impl DonnerError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::MalformedInput { .. } => "CONFIG_MALFORMED_INPUT",
            ConfigError::NoStrategiesSpecified => "NO_STRATEGIES_SPECIFIED",
            ConfigError::NoCommandsSpecified => "NO_COMMANDS_SPECIFIED",
            ConfigError::StrategyError { .. } => "STRATEGY_ERROR",
            ConfigError::InvalidHandler { .. } => "INVALID_HANDLER",
            ConfigError::InvalidStrategy { .. } => "INVALID_STRATEGY",
            ConfigError::PathSpecifiedInCommand { .. } => "PATH_SPECIFIED_IN_COMMAND",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, ConfigError::Io { .. })
    }
}
