//! Handler module for wrapping commands.
//!
//! A handler turns the arguments a user typed into the argument vector that is
//! actually executed. Handlers are built from the `strategies` section of the
//! configuration file through a [`HandlerRegistry`].
//!
//! # Architecture
//!
//! - [`Handler`] - Closed enum over every handler variant
//! - [`HandlerKind`] - Kinds that can be declared in a strategy
//! - [`CommandWrapper`] - Trait implemented by each variant
//! - [`HandlerRegistry`] - Maps kinds to constructors
//! - [`Settings`] - Consuming decoder for strategy settings
//! - [`HandlerError`] - Construction errors
//!
//! # Usage
//!
//! ```rust
//! use donner_core::handlers::{HandlerRegistry, StrategySettings};
//!
//! let registry = HandlerRegistry::builtin();
//! let mut settings = StrategySettings::new();
//! settings.insert("service".into(), "app".into());
//!
//! let handler = registry.construct("docker_compose_exec", settings).unwrap();
//! assert_eq!(
//!     handler.build_command(&["ls".to_string()]),
//!     vec!["docker-compose", "exec", "app", "ls"]
//! );
//! ```

pub mod backends;
pub mod errors;
pub mod registry;
pub mod settings;
pub mod traits;
pub mod types;

// Re-export public API
pub use backends::{ComposeExecHandler, ComposeRunHandler, DockerRunHandler, PassthroughHandler};
pub use errors::HandlerError;
pub use registry::{Constructor, HandlerRegistry};
pub use settings::{Settings, StrategySettings};
pub use traits::CommandWrapper;
pub use types::{Handler, HandlerKind};
