//! Handler type definitions and core data structures.

use serde::{Deserialize, Serialize};

use super::backends::{ComposeExecHandler, ComposeRunHandler, DockerRunHandler, PassthroughHandler};
use super::errors::HandlerError;
use super::traits::CommandWrapper;

/// Handler kinds that can be declared in a strategy's `handler` field.
///
/// The passthrough handler is not listed here: it is installed by the
/// configuration builder and cannot be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    DockerRun,
    DockerComposeRun,
    DockerComposeExec,
}

impl HandlerKind {
    /// Get the name used for this kind in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerKind::DockerRun => "docker_run",
            HandlerKind::DockerComposeRun => "docker_compose_run",
            HandlerKind::DockerComposeExec => "docker_compose_exec",
        }
    }

    /// Parse a handler kind from its configuration name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "docker_run" => Some(HandlerKind::DockerRun),
            "docker_compose_run" => Some(HandlerKind::DockerComposeRun),
            "docker_compose_exec" => Some(HandlerKind::DockerComposeExec),
            _ => None,
        }
    }

    /// Get all declarable handler kinds.
    pub fn all() -> &'static [HandlerKind] {
        &[
            HandlerKind::DockerRun,
            HandlerKind::DockerComposeRun,
            HandlerKind::DockerComposeExec,
        ]
    }
}

impl std::fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HandlerKind {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| HandlerError::UnknownHandlerKind {
            kind: s.to_string(),
        })
    }
}

/// A constructed, validated handler.
///
/// Handlers are immutable once built. A value of this type is always valid:
/// validation runs in [`super::HandlerRegistry::construct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    DockerRun(DockerRunHandler),
    ComposeRun(ComposeRunHandler),
    ComposeExec(ComposeExecHandler),
    Passthrough(PassthroughHandler),
}

impl Handler {
    /// The declared kind, or `None` for the passthrough handler.
    pub fn kind(&self) -> Option<HandlerKind> {
        match self {
            Handler::DockerRun(_) => Some(HandlerKind::DockerRun),
            Handler::ComposeRun(_) => Some(HandlerKind::DockerComposeRun),
            Handler::ComposeExec(_) => Some(HandlerKind::DockerComposeExec),
            Handler::Passthrough(_) => None,
        }
    }

    /// Name used in logs and listings.
    pub fn name(&self) -> &'static str {
        self.kind().map_or("passthrough", |kind| kind.as_str())
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, Handler::Passthrough(_))
    }

    /// Build the final argument vector for `args`.
    pub fn build_command(&self, args: &[String]) -> Vec<String> {
        match self {
            Handler::DockerRun(h) => h.build_command(args),
            Handler::ComposeRun(h) => h.build_command(args),
            Handler::ComposeExec(h) => h.build_command(args),
            Handler::Passthrough(h) => h.build_command(args),
        }
    }

    pub fn validate(&self) -> Result<(), HandlerError> {
        match self {
            Handler::DockerRun(h) => h.validate(),
            Handler::ComposeRun(h) => h.validate(),
            Handler::ComposeExec(h) => h.validate(),
            Handler::Passthrough(h) => h.validate(),
        }
    }
}

impl From<DockerRunHandler> for Handler {
    fn from(handler: DockerRunHandler) -> Self {
        Handler::DockerRun(handler)
    }
}

impl From<ComposeRunHandler> for Handler {
    fn from(handler: ComposeRunHandler) -> Self {
        Handler::ComposeRun(handler)
    }
}

impl From<ComposeExecHandler> for Handler {
    fn from(handler: ComposeExecHandler) -> Self {
        Handler::ComposeExec(handler)
    }
}
