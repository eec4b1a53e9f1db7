//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod navigation;
mod resources;
mod scheme;


pub use scheme::is_valid_scheme_name;

use crate::schema::WebGateConfig;
use webgate_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WebGateConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scheme::validate_scheme(&mut errors, config);
    resources::validate_resources(&mut errors, config);
    navigation::validate_navigation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
