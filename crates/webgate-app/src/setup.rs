//! Turning a loaded config into a ready view.

use std::path::Path;
use std::sync::Arc;

use webgate_config::WebGateConfig;
use webgate_webview::{blocklist_predicate, LocalWebView, ViewManager, ViewOptions};

/// Load config from `path` if given, otherwise from the platform default.
/// Failures, including a file that fails validation, are logged here.
pub fn load_config(path: Option<&str>) -> webgate_common::Result<WebGateConfig> {
    let loaded = match path {
        Some(path) => webgate_config::load_from_path(Path::new(path)),
        None => webgate_config::load_config(),
    };
    loaded.map_err(|e| {
        tracing::error!(path = path.unwrap_or("<default>"), "config rejected: {e}");
        e.into()
    })
}

pub fn view_options(config: &WebGateConfig) -> ViewOptions {
    ViewOptions {
        scheme: config.scheme.name.clone(),
        cors_origin: config.scheme.cors_origin.clone(),
        asset_root: config.resources.asset_root.clone(),
    }
}

/// Create a view, register the configured resources and install the
/// blocklist override when one is configured.
pub fn build_view(manager: &mut ViewManager, config: &WebGateConfig) -> Arc<LocalWebView> {
    let view = manager.create_with(view_options(config));
    for (name, path) in &config.resources.entries {
        view.register_local_resource(name, path);
    }
    if !config.navigation.blocked_prefixes.is_empty() {
        view.set_navigation_override(blocklist_predicate(
            config.navigation.blocked_prefixes.clone(),
        ));
    }
    tracing::info!(
        view_id = %view.id(),
        resources = config.resources.entries.len(),
        blocked_prefixes = config.navigation.blocked_prefixes.len(),
        "view ready"
    );
    view
}
