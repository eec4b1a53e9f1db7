use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no platform config directory")]
    NoConfigDir,

    #[error("config i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a private-scheme request could not be served.
///
/// None of these are fatal: each one is answered with a "not found"
/// response so the rendering surface shows a standard failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("malformed request: no usable target address")]
    MalformedRequest,

    #[error("not a private-scheme request: {0}")]
    ForeignScheme(String),

    #[error("unknown local resource: {0}")]
    UnknownResource(String),

    #[error("local resource file missing: {0}")]
    FileMissing(PathBuf),
}

impl ResolutionError {
    /// HTTP status used when answering the rendering surface.
    pub fn status(&self) -> u16 {
        match self {
            Self::MalformedRequest => 400,
            Self::ForeignScheme(_) | Self::UnknownResource(_) | Self::FileMissing(_) => 404,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyGateError {
    #[error("navigation override predicate panicked: {0}")]
    PredicatePanicked(String),
}

/// Failures surfaced by the `webgate` binary.
#[derive(Debug, thiserror::Error)]
pub enum WebGateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("webview error: {0}")]
    WebView(String),
}
