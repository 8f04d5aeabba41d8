//! `docker run` handler implementation.

use crate::handlers::errors::HandlerError;
use crate::handlers::settings::Settings;
use crate::handlers::traits::CommandWrapper;
use crate::handlers::types::Handler;

/// Wraps a command with `docker run -it`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockerRunHandler {
    pub remove: bool,
    pub image: String,
    pub port: Option<String>,
    pub volumes: Vec<String>,
}

impl DockerRunHandler {
    pub fn from_settings(settings: &mut Settings) -> Result<Self, HandlerError> {
        Ok(Self {
            remove: settings.take_bool("remove")?.unwrap_or(false),
            image: settings.take_string("image")?.unwrap_or_default(),
            port: settings.take_string("port")?,
            volumes: settings.take_string_list("volumes")?.unwrap_or_default(),
        })
    }

    pub(crate) fn construct(settings: &mut Settings) -> Result<Handler, HandlerError> {
        Self::from_settings(settings).map(Handler::from)
    }
}

impl CommandWrapper for DockerRunHandler {
    fn build_command(&self, args: &[String]) -> Vec<String> {
        let mut command = vec!["docker".to_string(), "run".to_string(), "-it".to_string()];

        if self.remove {
            command.push("--rm".to_string());
        }

        if !self.image.is_empty() {
            command.push(self.image.clone());
        }

        if let Some(port) = self.port.as_deref().filter(|p| !p.is_empty()) {
            command.push("-p".to_string());
            command.push(port.to_string());
        }

        for volume in &self.volumes {
            command.push("-v".to_string());
            command.push(volume.clone());
        }

        command.extend_from_slice(args);
        command
    }

    fn validate(&self) -> Result<(), HandlerError> {
        if self.image.is_empty() {
            return Err(HandlerError::MissingRequiredField { field: "image" });
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
    fn test_build_command_with_remove_and_image() {
        let handler = DockerRunHandler {
            remove: true,
            image: "test".to_string(),
            ..Default::default()
        };
        assert_eq!(
            handler.build_command(&args(&["ls -la"])),
            args(&["docker", "run", "-it", "--rm", "test", "ls -la"])
        );
    }

    #[test]
    fn test_build_command_with_port_and_volumes() {
        let handler = DockerRunHandler {
            remove: true,
            image: "test".to_string(),
            port: Some("8080:80".to_string()),
            volumes: vec!["./:/opt/".to_string()],
        };
        assert_eq!(
            handler.build_command(&args(&["ls -la"])),
            args(&[
                "docker", "run", "-it", "--rm", "test", "-p", "8080:80", "-v", "./:/opt/",
                "ls -la"
            ])
        );
    }

    #[test]
    fn test_build_command_is_deterministic() {
        let handler = DockerRunHandler {
            image: "alpine".to_string(),
            ..Default::default()
        };
        let input = args(&["echo", "hi"]);
        assert_eq!(handler.build_command(&input), handler.build_command(&input));
        assert_eq!(
            handler.build_command(&input),
            args(&["docker", "run", "-it", "alpine", "echo", "hi"])
        );
    }

    #[test]
    fn test_validate_requires_image() {
        let handler = DockerRunHandler::default();
        assert_eq!(
            handler.validate().unwrap_err(),
            HandlerError::MissingRequiredField { field: "image" }
        );
    }

    #[test]
    fn test_from_settings_defaults() {
        let mut settings = Settings::new(serde_yaml::from_str("image: alpine").unwrap());
        let handler = DockerRunHandler::from_settings(&mut settings).unwrap();
        assert!(!handler.remove);
        assert_eq!(handler.image, "alpine");
        assert!(handler.port.is_none());
        assert!(handler.volumes.is_empty());
        assert!(settings.is_empty());
    }
}
