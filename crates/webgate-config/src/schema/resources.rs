use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Local resources registered when a view is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Base directory for paths written as `~/...`.
    pub asset_root: Option<PathBuf>,
    /// Symbolic name -> file path.
    pub entries: BTreeMap<String, String>,
}
