//! Webgate configuration system.
//!
//! Provides TOML-based configuration for the private scheme, the bundled
//! resources registered at startup, the navigation blocklist and logging.
//! All sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webgate_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{WebGateConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use webgate_common::ConfigError;

/// Load the validated config from the platform default path, creating
/// the file from the template on first run.
pub fn load_config() -> Result<WebGateConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WebGateConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
