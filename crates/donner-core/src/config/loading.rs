//! Configuration file discovery and loading.
//!
//! The configuration lives in the working directory as `.donner.yml` (or
//! `.donner.yaml`). Setting `DONNER_CONFIG` points at a specific file instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::builder::Configuration;
use super::errors::ConfigError;

/// File names searched for, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".donner.yml", ".donner.yaml"];

/// Environment variable overriding the discovered config file.
pub const CONFIG_ENV_VAR: &str = "DONNER_CONFIG";

/// Find the configuration file in `dir`.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration for the current process.
///
/// Uses `DONNER_CONFIG` when set, otherwise searches the current directory.
pub fn load_config() -> Result<Configuration, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        debug!(event = "core.config.env_override", path = ?path);
        return load_config_file(Path::new(&path));
    }

    let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    load_config_from(&cwd)
}

/// Load configuration from the config file in `dir`.
pub fn load_config_from(dir: &Path) -> Result<Configuration, ConfigError> {
    let path = find_config_file(dir).ok_or_else(|| ConfigError::ConfigNotFound {
        searched: CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name).display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    load_config_file(&path)
}

/// Load and build a specific configuration file.
pub fn load_config_file(path: &Path) -> Result<Configuration, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::ConfigNotFound {
            searched: path.display().to_string(),
        },
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config = Configuration::from_yaml(&content)?;

    info!(
        event = "core.config.load_completed",
        path = %path.display(),
        commands = config.list_commands().len()
    );

    Ok(config)
}
