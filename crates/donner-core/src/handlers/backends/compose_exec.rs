//! `docker-compose exec` handler implementation.

use crate::handlers::errors::HandlerError;
use crate::handlers::settings::Settings;
use crate::handlers::traits::CommandWrapper;
use crate::handlers::types::Handler;

/// Wraps a command with `docker-compose exec` against a running service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeExecHandler {
    pub service: String,
}

impl ComposeExecHandler {
    pub fn from_settings(settings: &mut Settings) -> Result<Self, HandlerError> {
        Ok(Self {
            service: settings.take_string("service")?.unwrap_or_default(),
        })
    }

    pub(crate) fn construct(settings: &mut Settings) -> Result<Handler, HandlerError> {
        Self::from_settings(settings).map(Handler::from)
    }
}

impl CommandWrapper for ComposeExecHandler {
    fn build_command(&self, args: &[String]) -> Vec<String> {
        let mut command = vec!["docker-compose".to_string(), "exec".to_string()];

        if !self.service.is_empty() {
            command.push(self.service.clone());
        }

        command.extend_from_slice(args);
        command
    }

    fn validate(&self) -> Result<(), HandlerError> {
        if self.service.is_empty() {
            return Err(HandlerError::MissingRequiredField { field: "service" });
        }
        Ok(())
    }
}
