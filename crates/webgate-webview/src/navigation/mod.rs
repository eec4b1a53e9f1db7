//! Navigation classification and lifecycle tracking.

mod lifecycle;
mod owner;
mod types;

#[cfg(test)]
mod tests;

pub use lifecycle::{NavigationLifecycle, NavigationPhase};
pub use owner::NavigationOwner;
pub use types::{LoadOutcome, NavigationRequest, NavigationType, RawNavigationKind};
