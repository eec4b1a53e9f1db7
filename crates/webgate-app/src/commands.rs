//! One-shot subcommands. Each returns a report that is printed as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use webgate_webview::{LocalWebView, NavigationDecision, NavigationOwner, NavigationType};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveReport {
    pub url: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolveReport {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub url: String,
    pub navigation_type: NavigationType,
    pub decision: NavigationDecision,
}

/// Resolve `url` through the view's private-scheme resolver.
pub fn resolve(view: &Arc<LocalWebView>, url: &str) -> ResolveReport {
    let resolver = view.scheme_resolver();
    match resolver.resolve_scheme_request(Some(url)) {
        Ok(resource) => {
            debug!(url, path = %resource.path.display(), "resolved");
            ResolveReport {
                url: url.to_string(),
                status: 200,
                path: Some(resource.path),
                mime: Some(resource.mime),
                error: None,
            }
        }
        Err(e) => ResolveReport {
            url: url.to_string(),
            status: e.status(),
            path: None,
            mime: None,
            error: Some(e.to_string()),
        },
    }
}

/// Run the view's navigation policy against `url`.
pub fn check(view: &LocalWebView, url: &str, navigation_type: NavigationType) -> CheckReport {
    let decision = view.navigation_gate().decide(url, navigation_type);
    CheckReport {
        url: url.to_string(),
        navigation_type,
        decision,
    }
}
