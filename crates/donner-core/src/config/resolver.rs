//! Command resolution against a built [`Configuration`].
//!
//! Resolution order:
//! 1. Exact binding for the command's base name
//! 2. Strict mode without fallback: error
//! 3. Fallback mode: passthrough handler
//! 4. Default strategy, if configured
//! 5. Error

use std::path::Path;

use tracing::debug;

use super::builder::Configuration;
use crate::errors::DonnerError;
use crate::handlers::Handler;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Command '{command}' is not defined in the configuration")]
    UndefinedCommand { command: String },

    #[error("No command for execution specified")]
    MissingCommand,
}

impl DonnerError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::UndefinedCommand { .. } => "UNDEFINED_COMMAND",
            ResolveError::MissingCommand => "MISSING_COMMAND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// Strip any leading directories from a command token.
fn base_name(command: &str) -> &str {
    Path::new(command)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(command)
}

impl Configuration {
    /// Resolve the handler for `command`.
    pub fn resolve(&self, command: &str, strict: bool, fallback: bool) -> Result<&Handler, ResolveError> {
        let name = base_name(command);

        if let Some(strategy) = self.commands.get(name)
            && let Some(handler) = self.strategies.get(strategy)
        {
            debug!(
                event = "core.resolve.matched",
                command = name,
                strategy = strategy.as_str()
            );
            return Ok(handler);
        }

        if strict && !fallback {
            debug!(event = "core.resolve.strict_rejected", command = name);
            return Err(undefined(command));
        }

        if fallback {
            debug!(event = "core.resolve.fallback", command = name);
            return Ok(&self.fallback);
        }

        match self.default_handler() {
            Some(handler) => {
                debug!(
                    event = "core.resolve.default",
                    command = name,
                    strategy = self.default_strategy.as_deref()
                );
                Ok(handler)
            }
            None => Err(undefined(command)),
        }
    }

    /// Resolve `args[0]` and build the final argument vector for `args`.
    pub fn dispatch(&self, args: &[String], strict: bool, fallback: bool) -> Result<Vec<String>, ResolveError> {
        let command = args.first().ok_or(ResolveError::MissingCommand)?;
        let handler = self.resolve(command, strict, fallback)?;
        Ok(handler.build_command(args))
    }

    /// Names of every configured command, sorted.
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Strategy name bound to `command`, if any.
    pub fn strategy_for(&self, command: &str) -> Option<&str> {
        self.commands.get(base_name(command)).map(String::as_str)
    }

    /// Handler built for the strategy `name`.
    pub fn strategy(&self, name: &str) -> Option<&Handler> {
        self.strategies.get(name)
    }

    pub fn default_strategy(&self) -> Option<&str> {
        self.default_strategy.as_deref()
    }

    pub fn default_handler(&self) -> Option<&Handler> {
        self.default_strategy
            .as_deref()
            .and_then(|name| self.strategies.get(name))
    }

    pub fn fallback_handler(&self) -> &Handler {
        &self.fallback
    }
}

fn undefined(command: &str) -> ResolveError {
    ResolveError::UndefinedCommand {
        command: command.to_string(),
    }
}
