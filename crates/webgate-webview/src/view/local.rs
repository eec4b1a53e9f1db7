use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};
use webgate_common::ViewId;

use crate::events::WebViewEvent;
use crate::navigation::{
    LoadOutcome, NavigationLifecycle, NavigationOwner, NavigationRequest, NavigationType,
};
use crate::policy::NavigationPolicyGate;
use crate::registry::ResourceRegistry;
use crate::scheme::{strip_prefix_ignore_case, ResourceOwner, SchemeResolver};

use super::options::ViewOptions;

pub type LoadStartedListener = Arc<dyn Fn(&str, NavigationType) + Send + Sync>;
pub type LoadFinishedListener = Arc<dyn Fn(&LoadOutcome) + Send + Sync>;

/// An embedded view as seen by the core.
///
/// Owns the resource registry and the navigation override. The scheme
/// resolver and navigation lifecycle handed out by this view only hold
/// weak references back to it, so dropping the last `Arc` silences them.
pub struct LocalWebView {
    id: ViewId,
    options: ViewOptions,
    registry: RwLock<ResourceRegistry>,
    gate: RwLock<NavigationPolicyGate>,
    src: RwLock<Option<String>>,
    /// Event sink, shared with the [`ViewManager`](super::ViewManager) when
    /// the view was created by one.
    events: Arc<Mutex<Vec<WebViewEvent>>>,
    load_started: RwLock<Option<LoadStartedListener>>,
    load_finished: RwLock<Option<LoadFinishedListener>>,
    closed: AtomicBool,
}

impl LocalWebView {
    /// Create a standalone view with its own event queue.
    pub fn new(options: ViewOptions) -> Arc<Self> {
        Self::with_event_sink(options, Arc::new(Mutex::new(Vec::new())))
    }

    pub(crate) fn with_event_sink(
        options: ViewOptions,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> Arc<Self> {
        let view = Arc::new(Self {
            id: ViewId::new(),
            options,
            registry: RwLock::new(ResourceRegistry::new()),
            gate: RwLock::new(NavigationPolicyGate::new()),
            src: RwLock::new(None),
            events,
            load_started: RwLock::new(None),
            load_finished: RwLock::new(None),
            closed: AtomicBool::new(false),
        });
        debug!(view_id = %view.id, scheme = %view.options.scheme, "view created");
        view
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn scheme(&self) -> &str {
        &self.options.scheme
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    // -- Local resources --

    /// Register a bundled file under a symbolic name.
    ///
    /// `name` may be given bare (`logo.png`) or as a full private-scheme URL
    /// (`x-local://logo.png`). A path starting with `~/` is taken relative
    /// to the configured asset root. The file need not exist yet.
    pub fn register_local_resource(&self, name: &str, path: impl AsRef<Path>) {
        let name = self.normalize_resource_name(name).to_string();
        let path = self.expand_path(path.as_ref());
        debug!(view_id = %self.id, name = %name, path = %path.display(), "registered local resource");
        self.registry_mut().register(name, path);
    }

    /// Remove a registration. Returns whether one existed.
    pub fn unregister_local_resource(&self, name: &str) -> bool {
        let name = self.normalize_resource_name(name);
        let removed = self.registry_mut().unregister(name);
        debug!(view_id = %self.id, name = %name, removed, "unregistered local resource");
        removed
    }

    /// Path registered for `name`, if any.
    pub fn registered_local_resource(&self, name: &str) -> Option<PathBuf> {
        let name = self.normalize_resource_name(name);
        self.registry().resolve(name).map(Path::to_path_buf)
    }

    pub fn registered_resource_names(&self) -> Vec<String> {
        self.registry().names()
    }

    // -- Navigation override --

    /// Install the owner's override predicate. Returning `true` (or
    /// `Some(true)`) for a URL cancels navigation to it.
    pub fn set_navigation_override<F, R>(&self, predicate: F)
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: Into<Option<bool>>,
    {
        self.set_navigation_gate(NavigationPolicyGate::with_predicate(predicate));
    }

    pub fn set_navigation_gate(&self, gate: NavigationPolicyGate) {
        *self.gate.write().unwrap_or_else(|e| e.into_inner()) = gate;
    }

    pub fn clear_navigation_override(&self) {
        self.set_navigation_gate(NavigationPolicyGate::new());
    }

    // -- Current source --

    pub fn set_src(&self, url: impl Into<String>) {
        *self.src.write().unwrap_or_else(|e| e.into_inner()) = Some(url.into());
    }

    pub fn src(&self) -> Option<String> {
        self.src.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    // -- Listeners --

    pub fn set_load_started_listener(
        &self,
        listener: impl Fn(&str, NavigationType) + Send + Sync + 'static,
    ) {
        *self.load_started.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(listener));
    }

    pub fn set_load_finished_listener(
        &self,
        listener: impl Fn(&LoadOutcome) + Send + Sync + 'static,
    ) {
        *self.load_finished.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(listener));
    }

    // -- Collaborators --

    /// Lifecycle state machine reporting back to this view.
    pub fn navigation_lifecycle(self: &Arc<Self>) -> Arc<NavigationLifecycle> {
        let owner: Arc<dyn NavigationOwner> = self.clone();
        Arc::new(NavigationLifecycle::new(Arc::downgrade(&owner)))
    }

    /// Resolver serving this view's registry under its private scheme.
    pub fn scheme_resolver(self: &Arc<Self>) -> Arc<SchemeResolver> {
        let owner: Arc<dyn ResourceOwner> = self.clone();
        Arc::new(
            SchemeResolver::new(self.options.scheme.clone(), Arc::downgrade(&owner))
                .with_cors_origin(self.options.cors_origin.clone()),
        )
    }

    // -- Events --

    /// Drain this view's pending events, leaving other views' events queued.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        let (mine, others): (Vec<_>, Vec<_>) = std::mem::take(&mut *events)
            .into_iter()
            .partition(|event| event.view_id() == &self.id);
        *events = others;
        mine
    }

    /// Tear the view down: registry, override and listeners are dropped and
    /// no further callbacks fire.
    pub(crate) fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.registry_mut().clear();
        self.clear_navigation_override();
        *self.load_started.write().unwrap_or_else(|e| e.into_inner()) = None;
        *self.load_finished.write().unwrap_or_else(|e| e.into_inner()) = None;
        debug!(view_id = %self.id, "view closed");
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }

    fn normalize_resource_name<'a>(&self, name: &'a str) -> &'a str {
        let prefix = format!("{}://", self.options.scheme);
        strip_prefix_ignore_case(name, &prefix).unwrap_or(name)
    }

    fn expand_path(&self, path: &Path) -> PathBuf {
        let Ok(rest) = path.strip_prefix("~") else {
            return path.to_path_buf();
        };
        match &self.options.asset_root {
            Some(root) => root.join(rest),
            None => {
                warn!(view_id = %self.id, path = %path.display(), "`~/` path registered without an asset root");
                path.to_path_buf()
            }
        }
    }

    fn registry(&self) -> RwLockReadGuard<'_, ResourceRegistry> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, ResourceRegistry> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl ResourceOwner for LocalWebView {
    fn lookup_resource(&self, name: &str) -> Option<PathBuf> {
        self.registry().resolve(name).map(Path::to_path_buf)
    }
}

impl NavigationOwner for LocalWebView {
    fn navigation_gate(&self) -> NavigationPolicyGate {
        if self.is_closed() {
            return NavigationPolicyGate::with_predicate(|_url: &str| true);
        }
        self.gate.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn on_load_started(&self, url: &str, navigation_type: NavigationType) {
        if self.is_closed() {
            return;
        }
        self.push_event(WebViewEvent::LoadStarted {
            view_id: self.id.clone(),
            url: url.to_string(),
            navigation_type,
        });
        let listener = self
            .load_started
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(listener) = listener {
            listener(url, navigation_type);
        }
    }

    fn on_load_finished(&self, outcome: &LoadOutcome) {
        if self.is_closed() {
            return;
        }
        self.push_event(WebViewEvent::LoadFinished {
            view_id: self.id.clone(),
            outcome: outcome.clone(),
        });
        let listener = self
            .load_finished
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(listener) = listener {
            listener(outcome);
        }
    }

    fn on_navigation_cancelled(&self, request: &NavigationRequest) {
        if self.is_closed() {
            return;
        }
        self.push_event(WebViewEvent::NavigationCancelled {
            view_id: self.id.clone(),
            url: request.target_url.clone(),
        });
    }

    fn current_src(&self) -> Option<String> {
        self.src()
    }
}
