//! Navigation interception and local-resource serving for embedded WebViews.
//!
//! Gives the host two decisions a browser would normally make on its own:
//! - which navigations may proceed (an owner-supplied override predicate)
//! - how requests under a private URL scheme (`x-local://` by default)
//!   map to files bundled with the application
//!
//! The pieces, leaves first:
//! - [`ResourceRegistry`]: symbolic name -> absolute path
//! - [`SchemeResolver`]: private-scheme URL -> file + MIME type, or a 404
//! - [`NavigationPolicyGate`]: allow/cancel, fail-open on predicate panics
//! - [`NavigationLifecycle`]: decide -> start -> commit -> finish/fail
//!
//! [`LocalWebView`] is the owner component tying them together; the
//! resolver and lifecycle only hold weak references to it. With the `wry`
//! feature, [`host::attach`] wires a view into a `wry::WebViewBuilder`.

pub mod events;
#[cfg(feature = "wry")]
pub mod host;
pub mod mime;
pub mod navigation;
pub mod policy;
pub mod registry;
pub mod scheme;
pub mod view;

pub use events::WebViewEvent;
pub use navigation::{
    LoadOutcome, NavigationLifecycle, NavigationOwner, NavigationPhase, NavigationRequest,
    NavigationType, RawNavigationKind,
};
pub use policy::{blocklist_predicate, NavigationDecision, NavigationPolicyGate};
pub use registry::ResourceRegistry;
pub use scheme::{ResolvedResource, ResourceOwner, SchemeResolver, DEFAULT_SCHEME};
pub use view::{LocalWebView, ViewManager, ViewOptions};
