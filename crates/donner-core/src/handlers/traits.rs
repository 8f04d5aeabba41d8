//! Command wrapper trait definition.

use super::errors::HandlerError;

/// Trait implemented by every handler variant.
///
/// A wrapper turns the arguments typed by the user into the argument vector
/// that is actually executed, e.g. by prefixing `docker-compose exec app`.
pub trait CommandWrapper {
    /// Build the final argument vector.
    ///
    /// Implementations prepend a fixed prefix, insert their own flags in a
    /// fixed order and append `args` unchanged. Must be pure.
    fn build_command(&self, args: &[String]) -> Vec<String>;

    /// Check that required fields are set.
    fn validate(&self) -> Result<(), HandlerError> {
        Ok(())
    }
}
