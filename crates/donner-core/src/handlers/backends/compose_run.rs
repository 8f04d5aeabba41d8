//! `docker-compose run` handler implementation.

use crate::handlers::errors::HandlerError;
use crate::handlers::settings::Settings;
use crate::handlers::traits::CommandWrapper;
use crate::handlers::types::Handler;

/// Wraps a command with `docker-compose run`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeRunHandler {
    pub remove: bool,
    pub service: String,
}

impl ComposeRunHandler {
    pub fn from_settings(settings: &mut Settings) -> Result<Self, HandlerError> {
        Ok(Self {
            remove: settings.take_bool("remove")?.unwrap_or(false),
            service: settings.take_string("service")?.unwrap_or_default(),
        })
    }

    pub(crate) fn construct(settings: &mut Settings) -> Result<Handler, HandlerError> {
        Self::from_settings(settings).map(Handler::from)
    }
}

impl CommandWrapper for ComposeRunHandler {
    fn build_command(&self, args: &[String]) -> Vec<String> {
        let mut command = vec!["docker-compose".to_string(), "run".to_string()];

        if self.remove {
            command.push("--rm".to_string());
        }

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

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_command() {
        let handler = ComposeRunHandler {
            remove: true,
            service: "gotest".to_string(),
        };
        assert_eq!(
            handler.build_command(&args(&["ls -la"])),
            args(&["docker-compose", "run", "--rm", "gotest", "ls -la"])
        );
    }

    #[test]
    fn test_build_command_without_remove() {
        let handler = ComposeRunHandler {
            remove: false,
            service: "app".to_string(),
        };
        assert_eq!(
            handler.build_command(&args(&["bundle", "install"])),
            args(&["docker-compose", "run", "app", "bundle", "install"])
        );
    }

    #[test]
    fn test_validate_requires_service() {
        assert_eq!(
            ComposeRunHandler::default().validate().unwrap_err(),
            HandlerError::MissingRequiredField { field: "service" }
        );
    }
}
