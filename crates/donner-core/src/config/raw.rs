//! Untyped view of the configuration file.
//!
//! ```yaml
//! strategies:
//!   run:
//!     handler: docker_compose_run
//!     service: app
//!     remove: true
//!
//! default_strategy: run
//!
//! commands:
//!   bundle: run
//! ```
//!
//! Only the structural shape is checked here. Whether commands reference
//! declared strategies is decided by the builder.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::errors::ConfigError;
use crate::handlers::StrategySettings;

/// Intermediate structure produced by deserializing the configuration file.
///
/// Unknown top-level keys are ignored so that extra sections do not break
/// parsing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub strategies: BTreeMap<String, StrategySettings>,

    #[serde(default)]
    pub default_strategy: Option<String>,

    #[serde(default)]
    pub commands: BTreeMap<String, String>,
}

impl RawConfig {
    /// Parse configuration text. Blank input yields an empty config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ConfigError::MalformedInput {
            message: e.to_string(),
        })
    }
}
