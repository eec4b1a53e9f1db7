use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;
use webgate_common::ViewId;

use crate::events::WebViewEvent;

use super::local::LocalWebView;
use super::options::ViewOptions;

/// Tracks every embedded view by id. Each view gets its own resource
/// registry; all of them share one event queue.
pub struct ViewManager {
    /// Event sink shared by every view, drained by the host event loop.
    events: Arc<Mutex<Vec<WebViewEvent>>>,
    defaults: ViewOptions,
    views: HashMap<ViewId, Arc<LocalWebView>>,
}

impl ViewManager {
    pub fn new(defaults: ViewOptions) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            defaults,
            views: HashMap::new(),
        }
    }

    /// Create a view with the manager's default options.
    pub fn create(&mut self) -> Arc<LocalWebView> {
        self.create_with(self.defaults.clone())
    }

    pub fn create_with(&mut self, options: ViewOptions) -> Arc<LocalWebView> {
        let view = LocalWebView::with_event_sink(options, Arc::clone(&self.events));
        self.views.insert(view.id().clone(), Arc::clone(&view));
        view
    }

    pub fn get(&self, view_id: &ViewId) -> Option<Arc<LocalWebView>> {
        self.views.get(view_id).cloned()
    }

    /// Destroy a view. Its registry is cleared and its callbacks stop even
    /// if the host still holds an `Arc` to it.
    pub fn destroy(&mut self, view_id: &ViewId) -> bool {
        match self.views.remove(view_id) {
            Some(view) => {
                view.close();
                debug!(view_id = %view_id, "view destroyed");
                view.push_event(WebViewEvent::Closed {
                    view_id: view_id.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Destroy all views. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for view_id in self.active_views() {
            self.destroy(&view_id);
        }
    }

    /// Ids of all live views, sorted.
    pub fn active_views(&self) -> Vec<ViewId> {
        let mut ids: Vec<ViewId> = self.views.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn count(&self) -> usize {
        self.views.len()
    }

    /// Drain all pending events from all views.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *events)
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::new(ViewOptions::default())
    }
}
