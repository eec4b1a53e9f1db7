pub mod errors;
pub mod id;

pub use errors::{ConfigError, PolicyGateError, ResolutionError, WebGateError};
pub use id::{new_id, ViewId};

pub type Result<T> = std::result::Result<T, WebGateError>;
