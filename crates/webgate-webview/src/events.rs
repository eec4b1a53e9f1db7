//! WebView event types.

use webgate_common::ViewId;

use crate::navigation::{LoadOutcome, NavigationType};

/// Events recorded by a view for the host's event loop to drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// An allowed navigation started.
    LoadStarted {
        view_id: ViewId,
        url: String,
        navigation_type: NavigationType,
    },
    /// An allowed navigation finished or failed.
    LoadFinished {
        view_id: ViewId,
        outcome: LoadOutcome,
    },
    /// The policy gate cancelled a navigation.
    NavigationCancelled {
        view_id: ViewId,
        url: String,
    },
    /// View was closed / destroyed.
    Closed {
        view_id: ViewId,
    },
}

impl WebViewEvent {
    pub fn view_id(&self) -> &ViewId {
        match self {
            Self::LoadStarted { view_id, .. }
            | Self::LoadFinished { view_id, .. }
            | Self::NavigationCancelled { view_id, .. }
            | Self::Closed { view_id } => view_id,
        }
    }
}
