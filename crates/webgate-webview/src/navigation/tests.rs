//! Tests for navigation classification and the lifecycle state machine.

use std::sync::{Arc, Mutex, Weak};

use super::*;
use crate::policy::{NavigationDecision, NavigationPolicyGate};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Started(String, NavigationType),
    Finished(LoadOutcome),
    Cancelled(String),
}

#[derive(Default)]
struct RecordingOwner {
    gate: Mutex<NavigationPolicyGate>,
    src: Mutex<Option<String>>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingOwner {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn with_gate(gate: NavigationPolicyGate) -> Arc<Self> {
        let owner = Self::new();
        *owner.gate.lock().unwrap() = gate;
        owner
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl NavigationOwner for RecordingOwner {
    fn navigation_gate(&self) -> NavigationPolicyGate {
        self.gate.lock().unwrap().clone()
    }

    fn on_load_started(&self, url: &str, navigation_type: NavigationType) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Started(url.to_string(), navigation_type));
    }

    fn on_load_finished(&self, outcome: &LoadOutcome) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Finished(outcome.clone()));
    }

    fn on_navigation_cancelled(&self, request: &NavigationRequest) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Cancelled(request.target_url.clone()));
    }

    fn current_src(&self) -> Option<String> {
        self.src.lock().unwrap().clone()
    }
}

fn lifecycle_for(owner: &Arc<RecordingOwner>) -> NavigationLifecycle {
    let weak: Weak<RecordingOwner> = Arc::downgrade(owner);
    NavigationLifecycle::new(weak)
}

// -----------------------------------------------------------------
// Classification
// -----------------------------------------------------------------

#[test]
fn raw_signals_classify() {
    let table = [
        (RawNavigationKind::LINK_ACTIVATED, NavigationType::LinkClicked),
        (RawNavigationKind::FORM_SUBMITTED, NavigationType::FormSubmitted),
        (RawNavigationKind::BACK_FORWARD, NavigationType::BackForward),
        (RawNavigationKind::RELOAD, NavigationType::Reload),
        (RawNavigationKind::FORM_RESUBMITTED, NavigationType::FormResubmitted),
        (RawNavigationKind::OTHER, NavigationType::Other),
    ];
    for (raw, expected) in table {
        assert_eq!(NavigationType::from(raw), expected, "{raw:?}");
    }
}

#[test]
fn classification_is_total() {
    for code in -1000..1000 {
        let nav = NavigationType::classify(Some(RawNavigationKind(code)));
        assert!(NavigationType::ALL.contains(&nav));
        if !(0..=4).contains(&code) {
            assert_eq!(nav, NavigationType::Other, "code {code}");
        }
    }
    assert_eq!(
        NavigationType::classify(Some(RawNavigationKind(i64::MAX))),
        NavigationType::Other
    );
    assert_eq!(NavigationType::classify(None), NavigationType::Other);
}

#[test]
fn navigation_type_names() {
    let names: Vec<&str> = NavigationType::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "linkClicked",
            "formSubmitted",
            "backForward",
            "reload",
            "formResubmitted",
            "other"
        ]
    );
    for t in NavigationType::ALL {
        assert_eq!(t.to_string().parse::<NavigationType>().unwrap(), t);
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            format!("\"{}\"", t.as_str())
        );
    }
    assert!("sideways".parse::<NavigationType>().is_err());
}

#[test]
fn load_outcome_serializes_without_empty_error() {
    let json = serde_json::to_string(&LoadOutcome::finished("https://ok.example")).unwrap();
    assert_eq!(json, r#"{"finalUrl":"https://ok.example"}"#);

    let failed = LoadOutcome::failed("https://x.example", "DNS lookup failed");
    assert!(failed.is_failure());
    let json = serde_json::to_string(&failed).unwrap();
    assert!(json.contains(r#""errorMessage":"DNS lookup failed""#));
}

// -----------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------

#[test]
fn normal_load_reports_start_then_finish() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    assert_eq!(lc.phase(), NavigationPhase::Idle);

    let decision = lc.request_decision("https://ok.example", None);
    assert_eq!(decision, NavigationDecision::Allow);
    assert_eq!(lc.phase(), NavigationPhase::Provisional);

    lc.notify_provisional_start("https://ok.example");
    lc.notify_commit("https://ok.example");
    assert_eq!(lc.phase(), NavigationPhase::Committed);

    lc.notify_finish(Some("https://ok.example"));
    assert_eq!(lc.phase(), NavigationPhase::Finished);
    assert!(lc.current_request().is_none());

    assert_eq!(
        owner.calls(),
        vec![
            Call::Started("https://ok.example".into(), NavigationType::Other),
            Call::Finished(LoadOutcome::finished("https://ok.example")),
        ]
    );
}

#[test]
fn link_click_is_classified_in_start_callback() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.request_decision(
        "https://ok.example/page",
        Some(RawNavigationKind::LINK_ACTIVATED),
    );
    assert_eq!(
        owner.calls(),
        vec![Call::Started(
            "https://ok.example/page".into(),
            NavigationType::LinkClicked
        )]
    );
    assert_eq!(
        lc.current_request(),
        Some(NavigationRequest::new(
            "https://ok.example/page",
            NavigationType::LinkClicked
        ))
    );
}

#[test]
fn override_true_cancels_without_start() {
    let owner = RecordingOwner::with_gate(NavigationPolicyGate::with_predicate(|url: &str| {
        url.contains("blocked")
    }));
    let lc = lifecycle_for(&owner);

    let decision = lc.request_decision("https://blocked.example", None);
    assert_eq!(decision, NavigationDecision::Cancel);
    assert_eq!(lc.phase(), NavigationPhase::Cancelled);
    assert_eq!(lc.allowed_attempts(), 0);
    assert_eq!(
        owner.calls(),
        vec![Call::Cancelled("https://blocked.example".into())]
    );
}

#[test]
fn panicking_override_proceeds_as_allow() {
    let owner = RecordingOwner::with_gate(NavigationPolicyGate::with_predicate(
        |_url: &str| -> bool { panic!("owner bug") },
    ));
    let lc = lifecycle_for(&owner);

    assert_eq!(
        lc.request_decision("https://ok.example", None),
        NavigationDecision::Allow
    );
    assert_eq!(
        owner.calls(),
        vec![Call::Started("https://ok.example".into(), NavigationType::Other)]
    );
}

#[test]
fn failure_relays_error_verbatim() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.request_decision("https://down.example", None);
    lc.notify_failure(
        Some("https://down.example"),
        "A server with the specified hostname could not be found.",
    );

    assert_eq!(lc.phase(), NavigationPhase::Failed);
    assert_eq!(
        owner.calls()[1],
        Call::Finished(LoadOutcome::failed(
            "https://down.example",
            "A server with the specified hostname could not be found."
        ))
    );
}

#[test]
fn failure_from_provisional_without_commit() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.request_decision("https://tls.example", None);
    lc.notify_provisional_start("https://tls.example");
    lc.notify_failure(None, "TLS error");
    assert_eq!(lc.phase(), NavigationPhase::Failed);
    assert_eq!(owner.calls().len(), 2);
}

#[test]
fn finish_without_commit_is_accepted() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.request_decision("x-local://index.html", None);
    lc.notify_finish(Some("x-local://index.html"));
    assert_eq!(lc.phase(), NavigationPhase::Finished);
    assert_eq!(
        owner.calls()[1],
        Call::Finished(LoadOutcome::finished("x-local://index.html"))
    );
}

#[test]
fn exactly_one_outcome_per_allowed_attempt() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    for i in 0..5 {
        let url = format!("https://ok.example/{i}");
        lc.request_decision(&url, None);
        lc.notify_commit(&url);
        if i % 2 == 0 {
            lc.notify_finish(Some(&url));
        } else {
            lc.notify_failure(Some(&url), "offline");
        }
    }

    let calls = owner.calls();
    assert_eq!(calls.len(), 10);
    for pair in calls.chunks(2) {
        assert!(matches!(pair[0], Call::Started(..)));
        assert!(matches!(pair[1], Call::Finished(..)));
    }
    assert_eq!(lc.allowed_attempts(), 5);
}

#[test]
fn missing_final_url_falls_back_to_owner_src_then_target() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);

    lc.request_decision("https://target.example", None);
    lc.notify_finish(None);
    assert_eq!(
        owner.calls()[1],
        Call::Finished(LoadOutcome::finished("https://target.example"))
    );

    *owner.src.lock().unwrap() = Some("https://src.example".into());
    lc.request_decision("https://target.example", None);
    lc.notify_finish(None);
    assert_eq!(
        owner.calls()[3],
        Call::Finished(LoadOutcome::finished("https://src.example"))
    );
}

#[test]
fn new_attempt_supersedes_in_flight_one() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);

    lc.request_decision("https://first.example", Some(RawNavigationKind::LINK_ACTIVATED));
    lc.request_decision("https://second.example", Some(RawNavigationKind::LINK_ACTIVATED));
    assert_eq!(
        lc.current_request().map(|r| r.target_url),
        Some("https://second.example".into())
    );

    // Stale completion for the first attempt is relayed, not rejected.
    lc.notify_finish(Some("https://first.example"));
    assert_eq!(
        owner.calls().last(),
        Some(&Call::Finished(LoadOutcome::finished("https://first.example")))
    );
}

#[test]
fn completion_with_nothing_in_flight_is_relayed() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.notify_provisional_start("x-local://index.html");
    lc.notify_commit("x-local://index.html");
    assert_eq!(lc.phase(), NavigationPhase::Idle);

    lc.notify_finish(Some("x-local://index.html"));
    assert_eq!(
        owner.calls(),
        vec![Call::Finished(LoadOutcome::finished("x-local://index.html"))]
    );
}

#[test]
fn destroyed_owner_silences_everything() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.request_decision("https://ok.example", None);
    assert_eq!(lc.phase(), NavigationPhase::Provisional);

    drop(owner);

    lc.notify_commit("https://ok.example");
    assert_eq!(lc.phase(), NavigationPhase::Idle);
    lc.notify_finish(Some("https://ok.example"));
    lc.notify_failure(None, "gone");
    assert_eq!(lc.phase(), NavigationPhase::Idle);
    assert!(lc.current_request().is_none());

    assert_eq!(
        lc.request_decision("https://later.example", None),
        NavigationDecision::Cancel
    );
}

#[test]
fn reset_forgets_in_flight_attempt() {
    let owner = RecordingOwner::new();
    let lc = lifecycle_for(&owner);
    lc.request_decision("https://ok.example", None);
    lc.reset();
    assert_eq!(lc.phase(), NavigationPhase::Idle);
    assert!(lc.current_request().is_none());
}

#[test]
fn phase_helpers() {
    assert!(NavigationPhase::Provisional.is_in_flight());
    assert!(NavigationPhase::Committed.is_in_flight());
    assert!(!NavigationPhase::Deciding.is_in_flight());
    for p in [
        NavigationPhase::Finished,
        NavigationPhase::Failed,
        NavigationPhase::Cancelled,
    ] {
        assert!(p.is_terminal());
    }
    assert!(!NavigationPhase::Idle.is_terminal());
}
