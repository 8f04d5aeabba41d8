//! donner-core: Core library for strategy-based command wrapping
//!
//! This library resolves a command typed by the user to a wrapping strategy
//! (`docker run`, `docker-compose run`, `docker-compose exec`) declared in a
//! `.donner.yml` file, and builds the argument vector to execute.
//!
//! # Main Entry Points
//!
//! - [`config`] - Parse, build and query the configuration
//! - [`handlers`] - Handler variants and the handler registry
//! - [`aliases`] - Shell alias generation
//! - [`process`] - Execute the final argument vector

pub mod aliases;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod process;

// Re-export commonly used types at crate root for convenience
pub use config::{ConfigError, Configuration, RawConfig, ResolveError};
pub use errors::{DonnerError, DonnerResult};
pub use handlers::{Handler, HandlerError, HandlerKind, HandlerRegistry};
pub use process::ProcessError;

// Re-export logging initialization
pub use logging::init_logging;
