//! Identity handler used when a command should run unwrapped.

use crate::handlers::traits::CommandWrapper;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassthroughHandler;

impl CommandWrapper for PassthroughHandler {
    fn build_command(&self, args: &[String]) -> Vec<String> {
        args.to_vec()
    }
}
