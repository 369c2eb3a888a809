//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tandem::{TandemError, config::AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Project-local configuration, relative to the working directory.
const LOCAL_CONFIG_DIR: &str = "tandem";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for TandemError {
    fn from(err: ConfigError) -> Self {
        TandemError::Config(err.to_string())
    }
}

/// Loads the configuration the CLI should run with.
///
/// An explicit path must exist. Otherwise `tandem/config.toml` in the working
/// directory is tried, then `config.toml` in the platform configuration
/// directory, and finally the defaults are used.
///
/// # Errors
///
/// Returns [`TandemError::Config`] if the chosen file is missing, unreadable,
/// malformed, or holds invalid values.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TandemError> {
    let path = match explicit_path {
        Some(path) => path.as_ref().to_path_buf(),
        None => match discover_config_file() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using default configuration");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path:% = path.display(); "Loading configuration");
    Ok(load_config_file(&path)?)
}

/// Returns the first configuration file that exists on the search path.
fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME);
    let platform = ProjectDirs::from("com", "tandem", "tandem")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
    if platform.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    [Some(local), platform]
        .into_iter()
        .flatten()
        .inspect(|candidate| debug!(path:% = candidate.display(); "Looking for configuration"))
        .find(|candidate| candidate.is_file())
}

fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::MissingFile(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_toml(&content)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<AppConfig, TandemError> {
    Ok(parse_toml(content)?)
}

fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;
    Ok(config)
}
