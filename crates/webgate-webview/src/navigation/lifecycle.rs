//! Per-view navigation state machine.
//!
//! ```text
//! Idle -> Deciding -> Provisional -> Committed -> Finished | Failed
//!                  \-> Cancelled
//! ```
//!
//! `Finished`, `Failed` and `Cancelled` end an attempt and behave like
//! `Idle` for the next one. A new attempt may arrive at any time and
//! supersedes the one in flight; finish/fail reports are relayed to the
//! owner whatever attempt they belong to, since the rendering surface is
//! the source of truth for which navigation is current.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tracing::{debug, trace};

use crate::policy::NavigationDecision;

use super::owner::NavigationOwner;
use super::types::{LoadOutcome, NavigationRequest, NavigationType, RawNavigationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationPhase {
    Idle,
    Deciding,
    Provisional,
    Committed,
    Finished,
    Failed,
    Cancelled,
}

impl NavigationPhase {
    /// Whether an allowed navigation is between start and finish/fail.
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Provisional | Self::Committed)
    }

    /// Whether the last attempt has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Failed | Self::Cancelled)
    }
}

#[derive(Debug)]
struct LifecycleState {
    phase: NavigationPhase,
    current: Option<NavigationRequest>,
    attempts: u64,
}

impl LifecycleState {
    fn reset(&mut self) {
        self.phase = NavigationPhase::Idle;
        self.current = None;
    }
}

/// Receives raw navigation events from the rendering surface and turns
/// them into owner callbacks.
pub struct NavigationLifecycle {
    owner: Weak<dyn NavigationOwner>,
    state: Mutex<LifecycleState>,
}

impl NavigationLifecycle {
    pub fn new(owner: Weak<dyn NavigationOwner>) -> Self {
        Self {
            owner,
            state: Mutex::new(LifecycleState {
                phase: NavigationPhase::Idle,
                current: None,
                attempts: 0,
            }),
        }
    }

    pub fn phase(&self) -> NavigationPhase {
        self.lock().phase
    }

    /// The allowed attempt currently in flight, if any.
    pub fn current_request(&self) -> Option<NavigationRequest> {
        self.lock().current.clone()
    }

    /// Number of attempts allowed so far.
    pub fn allowed_attempts(&self) -> u64 {
        self.lock().attempts
    }

    /// The surface asks whether it may navigate to `target_url`.
    ///
    /// Answers exactly once and never blocks. With the owner gone the
    /// answer is `Cancel`: there is nothing left to navigate for.
    pub fn request_decision(
        &self,
        target_url: &str,
        raw_kind: Option<RawNavigationKind>,
    ) -> NavigationDecision {
        let Some(owner) = self.upgrade_owner() else {
            debug!(url = %target_url, "navigation requested after owner was destroyed");
            return NavigationDecision::Cancel;
        };

        let request = NavigationRequest::new(target_url, NavigationType::classify(raw_kind));
        {
            let mut state = self.lock();
            if state.phase.is_in_flight() {
                if let Some(prev) = &state.current {
                    debug!(
                        previous = %prev.target_url,
                        url = %request.target_url,
                        "new navigation supersedes the one in flight"
                    );
                }
            }
            state.phase = NavigationPhase::Deciding;
        }

        // The gate runs owner code; no lock may be held across it.
        let decision = owner
            .navigation_gate()
            .decide(&request.target_url, request.navigation_type);

        match decision {
            NavigationDecision::Cancel => {
                {
                    let mut state = self.lock();
                    state.phase = NavigationPhase::Cancelled;
                    state.current = None;
                }
                debug!(url = %request.target_url, navigation_type = %request.navigation_type, "navigation cancelled");
                owner.on_navigation_cancelled(&request);
            }
            NavigationDecision::Allow => {
                {
                    let mut state = self.lock();
                    state.phase = NavigationPhase::Provisional;
                    state.current = Some(request.clone());
                    state.attempts += 1;
                }
                trace!(url = %request.target_url, navigation_type = %request.navigation_type, "navigation allowed");
                owner.on_load_started(&request.target_url, request.navigation_type);
            }
        }
        decision
    }

    /// The surface started loading `url` provisionally. Trace only.
    pub fn notify_provisional_start(&self, url: &str) {
        if self.upgrade_owner().is_none() {
            return;
        }
        trace!(url = %url, phase = ?self.phase(), "provisional navigation started");
    }

    /// The surface committed to `url`. Trace only, no owner callback.
    pub fn notify_commit(&self, url: &str) {
        if self.upgrade_owner().is_none() {
            return;
        }
        let mut state = self.lock();
        if state.phase == NavigationPhase::Provisional {
            state.phase = NavigationPhase::Committed;
        }
        trace!(url = %url, phase = ?state.phase, "navigation committed");
    }

    /// The surface finished loading. `final_url` falls back to the owner's
    /// current source, then to the attempt's target.
    pub fn notify_finish(&self, final_url: Option<&str>) {
        self.complete(final_url, None);
    }

    /// The surface failed to load; `error` is relayed verbatim.
    pub fn notify_failure(&self, final_url: Option<&str>, error: &str) {
        self.complete(final_url, Some(error));
    }

    /// Forget the in-flight attempt. Called when the owner is torn down.
    pub fn reset(&self) {
        self.lock().reset();
    }

    fn complete(&self, final_url: Option<&str>, error: Option<&str>) {
        let Some(owner) = self.upgrade_owner() else {
            return;
        };

        let attempted = {
            let mut state = self.lock();
            if !state.phase.is_in_flight() {
                debug!(
                    phase = ?state.phase,
                    url = final_url.unwrap_or_default(),
                    "load completion with no navigation in flight, relaying"
                );
            }
            state.phase = if error.is_some() {
                NavigationPhase::Failed
            } else {
                NavigationPhase::Finished
            };
            state.current.take()
        };

        let url = final_url
            .map(str::to_string)
            .or_else(|| owner.current_src())
            .or_else(|| attempted.map(|req| req.target_url))
            .unwrap_or_default();

        let outcome = match error {
            Some(message) => {
                debug!(url = %url, error = %message, "navigation failed");
                LoadOutcome::failed(url, message)
            }
            None => {
                trace!(url = %url, "navigation finished");
                LoadOutcome::finished(url)
            }
        };
        owner.on_load_finished(&outcome);
    }

    /// Upgrade the owner reference, resetting to `Idle` if it is gone.
    fn upgrade_owner(&self) -> Option<Arc<dyn NavigationOwner>> {
        let owner = self.owner.upgrade();
        if owner.is_none() {
            self.lock().reset();
        }
        owner
    }

    fn lock(&self) -> MutexGuard<'_, LifecycleState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
