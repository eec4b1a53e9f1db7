use std::path::PathBuf;

use crate::scheme::DEFAULT_SCHEME;

/// Settings for creating a [`LocalWebView`](super::LocalWebView).
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Private scheme served from the view's registry.
    pub scheme: String,
    /// `Access-Control-Allow-Origin` on served files.
    pub cors_origin: String,
    /// Base directory for resource paths written as `~/...`.
    pub asset_root: Option<PathBuf>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            cors_origin: "*".to_string(),
            asset_root: None,
        }
    }
}

impl ViewOptions {
    /// Options for a custom scheme.
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            ..Default::default()
        }
    }

    pub fn asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }
}
