//! Configuration schema types for Webgate.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod navigation;
mod resources;
mod scheme;

pub use logging::*;
pub use navigation::*;
pub use resources::*;
pub use scheme::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Webgate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebGateConfig {
    pub scheme: SchemeConfig,
    pub resources: ResourcesConfig,
    pub navigation: NavigationConfig,
    pub logging: LoggingConfig,
}
