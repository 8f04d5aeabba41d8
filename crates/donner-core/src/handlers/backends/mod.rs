//! Handler implementations.

mod compose_exec;
mod compose_run;
mod docker_run;
mod passthrough;

pub use compose_exec::ComposeExecHandler;
pub use compose_run::ComposeRunHandler;
pub use docker_run::DockerRunHandler;
pub use passthrough::PassthroughHandler;
