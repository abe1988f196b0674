//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::MockConfig;
use crate::config::validation::validate_config;

/// File name looked up in the current working directory at startup.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not describe a usable config.
    #[error("malformed config file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Load and validate configuration from a JSON file.
///
/// The raw contents are logged before parsing so operators can see exactly
/// what the server picked up.
pub fn load_config(path: &Path) -> Result<MockConfig, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        contents = %String::from_utf8_lossy(&bytes).trim(),
        "Read configuration file"
    );

    let malformed = |reason: String| ConfigError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let content = String::from_utf8(bytes).map_err(|e| malformed(e.to_string()))?;

    // serde would also accept a positional array for a struct; only objects are valid here.
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object at the top level".to_string()));
    }
    let config: MockConfig = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

    validate_config(&config).map_err(|errors| {
        malformed(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    })?;

    Ok(config)
}
