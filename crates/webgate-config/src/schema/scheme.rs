use serde::{Deserialize, Serialize};

/// Default private scheme token.
pub const DEFAULT_SCHEME: &str = "x-local";

/// The private URL scheme used to address bundled resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    /// Scheme token, without `://`.
    pub name: String,
    /// Value of `Access-Control-Allow-Origin` on served files.
    pub cors_origin: String,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SCHEME.into(),
            cors_origin: "*".into(),
        }
    }
}
