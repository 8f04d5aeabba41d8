//! Builds a typed [`Configuration`] out of a [`RawConfig`].
//!
//! Every semantic check happens here, eagerly. Once a configuration is built
//! the only way resolution can fail is an undefined command.

use std::collections::BTreeMap;

use serde_yaml::Value;
use tracing::{debug, info};

use super::errors::ConfigError;
use super::raw::RawConfig;
use crate::handlers::{Handler, HandlerError, HandlerRegistry, PassthroughHandler};

const HANDLER_FIELD: &str = "handler";

/// Validated configuration with the command dispatch table.
///
/// Commands and the default strategy refer to handlers by strategy name, so a
/// single handler is shared by every command bound to its strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub(super) strategies: BTreeMap<String, Handler>,
    pub(super) commands: BTreeMap<String, String>,
    pub(super) default_strategy: Option<String>,
    pub(super) fallback: Handler,
}

impl Configuration {
    /// Build a configuration, constructing one handler per strategy through
    /// `registry`.
    ///
    /// Error precedence: empty strategies, empty commands, strategy
    /// construction, default strategy, command bindings.
    pub fn build(raw: RawConfig, registry: &HandlerRegistry) -> Result<Self, ConfigError> {
        if raw.strategies.is_empty() {
            return Err(ConfigError::NoStrategiesSpecified);
        }
        if raw.commands.is_empty() {
            return Err(ConfigError::NoCommandsSpecified);
        }

        let mut strategies = BTreeMap::new();
        for (name, settings) in raw.strategies {
            let handler = build_strategy(registry, settings).map_err(|source| {
                ConfigError::StrategyError {
                    strategy: name.clone(),
                    source,
                }
            })?;
            debug!(
                event = "core.config.strategy_built",
                strategy = name.as_str(),
                handler = handler.name()
            );
            strategies.insert(name, handler);
        }

        if let Some(default) = &raw.default_strategy
            && !strategies.contains_key(default)
        {
            return Err(ConfigError::InvalidHandler {
                strategy: default.clone(),
            });
        }

        for (command, strategy) in &raw.commands {
            if command.chars().any(std::path::is_separator) {
                return Err(ConfigError::PathSpecifiedInCommand {
                    command: command.clone(),
                });
            }
            if !strategies.contains_key(strategy) {
                return Err(ConfigError::InvalidStrategy {
                    command: command.clone(),
                    strategy: strategy.clone(),
                });
            }
        }

        info!(
            event = "core.config.build_completed",
            strategies = strategies.len(),
            commands = raw.commands.len(),
            default_strategy = ?raw.default_strategy
        );

        Ok(Self {
            strategies,
            commands: raw.commands,
            default_strategy: raw.default_strategy,
            fallback: Handler::Passthrough(PassthroughHandler),
        })
    }

    /// Build with the built-in handler registry.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        Self::build(raw, &HandlerRegistry::builtin())
    }

    /// Parse configuration text and build it with the built-in registry.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Self::from_raw(RawConfig::parse(content)?)
    }
}

fn build_strategy(
    registry: &HandlerRegistry,
    mut settings: crate::handlers::StrategySettings,
) -> Result<Handler, HandlerError> {
    let kind = match settings.remove(HANDLER_FIELD) {
        None | Some(Value::Null) => return Err(HandlerError::NoHandlerDefined),
        Some(Value::String(kind)) => kind,
        Some(_) => {
            return Err(HandlerError::InvalidFieldType {
                field: HANDLER_FIELD.to_string(),
                expected: "string",
            });
        }
    };

    registry.construct(&kind, settings)
}
