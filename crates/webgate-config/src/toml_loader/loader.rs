//! Reading a config file into a validated `WebGateConfig`.

use std::path::Path;

use tracing::{debug, info};
use webgate_common::ConfigError;

use crate::schema::WebGateConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Parse and validate the TOML file at `path`.
///
/// Missing keys take their serde defaults. A file that parses but fails
/// validation is rejected with `ConfigError::ValidationError`.
pub fn load_from_path(path: &Path) -> Result<WebGateConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = parse_config(&content)?;
    validation::validate(&config)?;

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `<config_dir>/webgate/config.toml`, writing the commented
/// template there first if it does not exist yet.
pub fn load_default() -> Result<WebGateConfig, ConfigError> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file yet");
        create_default_config(&path)?;
    }
    load_from_path(&path)
}

fn parse_config(content: &str) -> Result<WebGateConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
