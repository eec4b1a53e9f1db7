use serde::{Deserialize, Serialize};

/// Navigation gating and the initial page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// URL prefixes whose navigations are cancelled. Empty disables the
    /// built-in override predicate.
    pub blocked_prefixes: Vec<String>,
    /// Page loaded when a window is opened without an explicit URL.
    pub start_url: Option<String>,
}
