//! Where the config file lives, and writing the first one.

use std::path::{Path, PathBuf};

use tracing::info;
use webgate_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "webgate";
const FILE_NAME: &str = "config.toml";

/// `config.toml` under the platform config directory
/// (`~/.config/webgate` on Linux, `~/Library/Application Support/webgate` on macOS).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(FILE_NAME))
}

/// Write the commented default config to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_error)?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_error)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
