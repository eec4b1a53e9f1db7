use crate::policy::NavigationPolicyGate;

use super::types::{LoadOutcome, NavigationRequest, NavigationType};

/// The component that owns a navigation lifecycle.
///
/// [`NavigationLifecycle`](super::NavigationLifecycle) reaches its owner
/// through a `Weak` reference only. Callbacks are invoked on the thread
/// that delivered the surface event, with no lifecycle lock held.
pub trait NavigationOwner: Send + Sync {
    /// Gate to consult for the next decision.
    fn navigation_gate(&self) -> NavigationPolicyGate;

    /// An allowed navigation is starting.
    fn on_load_started(&self, url: &str, navigation_type: NavigationType);

    /// An allowed navigation finished or failed.
    fn on_load_finished(&self, outcome: &LoadOutcome);

    /// The gate cancelled a navigation.
    fn on_navigation_cancelled(&self, _request: &NavigationRequest) {}

    /// Address the owner believes it is showing. Used as the final URL when
    /// the surface reports completion without one.
    fn current_src(&self) -> Option<String> {
        None
    }
}
