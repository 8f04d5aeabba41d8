pub mod errors;
pub mod operations;

pub use errors::ProcessError;
pub use operations::{EXIT_EXEC_FAILED, run_command};
