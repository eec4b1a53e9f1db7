//! Binding onto a `wry::WebViewBuilder`.
//!
//! wry reports less than a native navigation delegate would: no
//! navigation type (every attempt classifies as `other`), no commit and
//! no failure. Page-load `Started` maps to a provisional start and
//! `Finished` to a finish.

use std::sync::Arc;

use tracing::debug;
use wry::{PageLoadEvent, WebViewBuilder};

use crate::navigation::NavigationLifecycle;
use crate::scheme::SchemeResolver;
use crate::view::LocalWebView;

/// Wire `view` into `builder`: navigation gating, lifecycle reporting and
/// the private-scheme protocol.
pub fn attach<'a>(builder: WebViewBuilder<'a>, view: &Arc<LocalWebView>) -> WebViewBuilder<'a> {
    let lifecycle = view.navigation_lifecycle();
    let resolver = view.scheme_resolver();

    let builder = attach_navigation_handler(builder, Arc::clone(&lifecycle));
    let builder = attach_page_load_handler(builder, lifecycle);
    attach_custom_protocol(builder, resolver)
}

pub fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    lifecycle: Arc<NavigationLifecycle>,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| lifecycle.request_decision(&url, None).is_allowed())
}

pub fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    lifecycle: Arc<NavigationLifecycle>,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| match event {
        PageLoadEvent::Started => lifecycle.notify_provisional_start(&url),
        PageLoadEvent::Finished => lifecycle.notify_finish(Some(&url)),
    })
}

pub fn attach_custom_protocol<'a>(
    builder: WebViewBuilder<'a>,
    resolver: Arc<SchemeResolver>,
) -> WebViewBuilder<'a> {
    let scheme = resolver.scheme().to_string();
    debug!(scheme = %scheme, "registering private scheme protocol");
    builder.with_custom_protocol(scheme, move |_wv_id, request| resolver.respond(&request))
}
