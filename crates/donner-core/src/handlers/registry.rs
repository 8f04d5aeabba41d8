//! Handler registry for constructing handlers from strategy settings.

use std::collections::HashMap;

use tracing::debug;

use super::backends::{ComposeExecHandler, ComposeRunHandler, DockerRunHandler};
use super::errors::HandlerError;
use super::settings::{Settings, StrategySettings};
use super::types::{Handler, HandlerKind};

/// Decodes a handler from settings. Must consume every key it understands.
pub type Constructor = fn(&mut Settings) -> Result<Handler, HandlerError>;

/// Registry mapping handler kinds to their constructors.
///
/// The registry is a plain value passed to the configuration builder, so
/// tests and embedders can restrict or replace the available kinds.
#[derive(Clone)]
pub struct HandlerRegistry {
    constructors: HashMap<HandlerKind, Constructor>,
}

impl HandlerRegistry {
    /// An empty registry. Every `construct` call fails until kinds are registered.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry with every built-in handler kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(HandlerKind::DockerRun, DockerRunHandler::construct);
        registry.register(HandlerKind::DockerComposeRun, ComposeRunHandler::construct);
        registry.register(HandlerKind::DockerComposeExec, ComposeExecHandler::construct);
        registry
    }

    /// Register a constructor, replacing any previous one for `kind`.
    pub fn register(&mut self, kind: HandlerKind, constructor: Constructor) {
        self.constructors.insert(kind, constructor);
    }

    pub fn contains(&self, kind: HandlerKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    /// Registered kinds, sorted by configuration name.
    pub fn kinds(&self) -> Vec<HandlerKind> {
        let mut kinds: Vec<HandlerKind> = self.constructors.keys().copied().collect();
        kinds.sort_by_key(|k| k.as_str());
        kinds
    }

    /// Construct and validate a handler of `kind` from `settings`.
    ///
    /// `settings` must not contain the `handler` key itself.
    pub fn construct(&self, kind: &str, settings: StrategySettings) -> Result<Handler, HandlerError> {
        let constructor = HandlerKind::parse(kind)
            .and_then(|k| self.constructors.get(&k))
            .ok_or_else(|| HandlerError::UnknownHandlerKind {
                kind: kind.to_string(),
            })?;

        let mut settings = Settings::new(settings);
        let handler = constructor(&mut settings)?;
        settings.finish()?;
        handler.validate()?;

        debug!(event = "core.handler.constructed", kind = kind);

        Ok(handler)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
