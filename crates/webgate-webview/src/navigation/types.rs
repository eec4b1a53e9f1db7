use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a navigation happened, in the core's own closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationType {
    LinkClicked,
    FormSubmitted,
    BackForward,
    Reload,
    FormResubmitted,
    /// Initial loads, programmatic loads, redirects, anything unrecognised.
    #[default]
    Other,
}

impl NavigationType {
    pub const ALL: [Self; 6] = [
        Self::LinkClicked,
        Self::FormSubmitted,
        Self::BackForward,
        Self::Reload,
        Self::FormResubmitted,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinkClicked => "linkClicked",
            Self::FormSubmitted => "formSubmitted",
            Self::BackForward => "backForward",
            Self::Reload => "reload",
            Self::FormResubmitted => "formResubmitted",
            Self::Other => "other",
        }
    }

    /// Classify a raw signal from the rendering surface. Total: a missing
    /// or unknown signal is `Other`.
    pub fn classify(raw: Option<RawNavigationKind>) -> Self {
        raw.map(Self::from).unwrap_or_default()
    }
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown navigation type: {s}"))
    }
}

/// Opaque navigation-type code as reported by the rendering surface.
///
/// Codes follow WebKit's `WKNavigationType`; anything else, including the
/// platform's own "other" value, classifies as [`NavigationType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawNavigationKind(pub i64);

impl RawNavigationKind {
    pub const LINK_ACTIVATED: Self = Self(0);
    pub const FORM_SUBMITTED: Self = Self(1);
    pub const BACK_FORWARD: Self = Self(2);
    pub const RELOAD: Self = Self(3);
    pub const FORM_RESUBMITTED: Self = Self(4);
    pub const OTHER: Self = Self(-1);
}

impl From<RawNavigationKind> for NavigationType {
    fn from(raw: RawNavigationKind) -> Self {
        match raw {
            RawNavigationKind::LINK_ACTIVATED => Self::LinkClicked,
            RawNavigationKind::FORM_SUBMITTED => Self::FormSubmitted,
            RawNavigationKind::BACK_FORWARD => Self::BackForward,
            RawNavigationKind::RELOAD => Self::Reload,
            RawNavigationKind::FORM_RESUBMITTED => Self::FormResubmitted,
            _ => Self::Other,
        }
    }
}

/// One navigation attempt, built when the surface asks for a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    pub target_url: String,
    pub navigation_type: NavigationType,
}

impl NavigationRequest {
    pub fn new(target_url: impl Into<String>, navigation_type: NavigationType) -> Self {
        Self {
            target_url: target_url.into(),
            navigation_type,
        }
    }
}

/// Result of an allowed navigation, delivered once to the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOutcome {
    pub final_url: String,
    /// Set when the surface reported a failure; relayed verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl LoadOutcome {
    pub fn finished(final_url: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            error_message: None,
        }
    }

    pub fn failed(final_url: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            final_url: final_url.into(),
            error_message: Some(error_message.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error_message.is_some()
    }
}
