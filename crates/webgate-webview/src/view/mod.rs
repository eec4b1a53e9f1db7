//! The owner component: one embedded view with its own resource registry,
//! navigation override and lifecycle listeners.

mod local;
mod manager;
mod options;


pub use local::{LoadFinishedListener, LoadStartedListener, LocalWebView};
pub use manager::ViewManager;
pub use options::ViewOptions;
