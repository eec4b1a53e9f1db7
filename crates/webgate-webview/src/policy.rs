//! Navigation policy gate.
//!
//! Consulted synchronously for every navigation attempt; the rendering
//! surface is blocked until it answers, so the gate never suspends and
//! never lets an owner-supplied predicate unwind past it.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, trace};
use webgate_common::PolicyGateError;

use crate::navigation::NavigationType;

/// Answer given back to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDecision {
    Allow,
    Cancel,
}

impl NavigationDecision {
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }
}

/// Owner-supplied override. `Some(true)` cancels; anything else allows.
pub type OverridePredicate = Arc<dyn Fn(&str) -> Option<bool> + Send + Sync>;

/// Allow/cancel decision point with an optional override predicate.
///
/// Cheap to clone: the predicate is shared.
#[derive(Clone, Default)]
pub struct NavigationPolicyGate {
    predicate: Option<OverridePredicate>,
}

impl fmt::Debug for NavigationPolicyGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationPolicyGate")
            .field("has_override", &self.has_override())
            .finish()
    }
}

impl NavigationPolicyGate {
    /// A gate that allows everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gate consulting `predicate`. The predicate may return `bool` or
    /// `Option<bool>`; `None` counts as "no opinion" (allow).
    pub fn with_predicate<F, R>(predicate: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<Option<bool>>,
    {
        Self {
            predicate: Some(Arc::new(move |url: &str| -> Option<bool> { predicate(url).into() })),
        }
    }

    pub fn has_override(&self) -> bool {
        self.predicate.is_some()
    }

    /// Decide, surfacing a predicate panic as an error.
    ///
    /// On `Err` the caller is expected to allow the navigation.
    pub fn evaluate(
        &self,
        url: &str,
        navigation_type: NavigationType,
    ) -> Result<NavigationDecision, PolicyGateError> {
        let Some(predicate) = &self.predicate else {
            return Ok(NavigationDecision::Allow);
        };

        let verdict = panic::catch_unwind(AssertUnwindSafe(|| predicate(url)))
            .map_err(|payload| PolicyGateError::PredicatePanicked(panic_message(payload.as_ref())))?;

        let decision = if verdict == Some(true) {
            NavigationDecision::Cancel
        } else {
            NavigationDecision::Allow
        };
        trace!(url = %url, %navigation_type, ?decision, "navigation override consulted");
        Ok(decision)
    }

    /// Decide. A panicking predicate fails open and is logged.
    pub fn decide(&self, url: &str, navigation_type: NavigationType) -> NavigationDecision {
        match self.evaluate(url, navigation_type) {
            Ok(decision) => decision,
            Err(e) => {
                error!(url = %url, error = %e, "navigation override failed, allowing navigation");
                NavigationDecision::Allow
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Override predicate cancelling any URL that starts with one of `prefixes`.
pub fn blocklist_predicate(prefixes: Vec<String>) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |url: &str| prefixes.iter().any(|prefix| url.starts_with(prefix.as_str()))
}
