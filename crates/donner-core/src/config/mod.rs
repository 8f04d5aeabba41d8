//! # Configuration System
//!
//! Declarative YAML configuration mapping commands to wrapping strategies.
//!
//! ## Pipeline
//!
//! 1. **Parse** - [`RawConfig::parse`] turns text into an untyped structure
//! 2. **Build** - [`Configuration::build`] constructs one handler per strategy
//!    and validates every reference
//! 3. **Resolve** - [`Configuration::resolve`] picks the handler for a command
//!
//! ## Example Configuration
//!
//! ```yaml
//! # .donner.yml
//! strategies:
//!   run:
//!     handler: docker_compose_run
//!     service: app
//!     remove: true
//!   run_with_docker:
//!     handler: docker_run
//!     image: alpine:latest
//!
//! default_strategy: run
//!
//! commands:
//!   ls: run_with_docker
//!   bundle: run
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use donner_core::config;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = config::load_config()?;
//!     let argv = config.dispatch(&["bundle".to_string(), "install".to_string()], false, false)?;
//!     println!("{}", argv.join(" "));
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod errors;
pub mod loading;
pub mod raw;
pub mod resolver;

// Public API exports
pub use builder::Configuration;
pub use errors::ConfigError;
pub use loading::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAMES, find_config_file, load_config, load_config_file,
    load_config_from,
};
pub use raw::RawConfig;
pub use resolver::ResolveError;
