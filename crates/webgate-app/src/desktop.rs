//! Single-window host: one `LocalWebView` wired into a wry child webview.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};
use wry::{WebView, WebViewBuilder};

use webgate_common::WebGateError;
use webgate_webview::{host, LocalWebView, WebViewEvent};

/// Bounds covering the whole client area of a `width` x `height` window.
pub fn window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

struct DesktopApp {
    view: Arc<LocalWebView>,
    start_url: String,
    window: Option<Window>,
    webview: Option<WebView>,
}

impl DesktopApp {
    fn new(view: Arc<LocalWebView>, start_url: String) -> Self {
        Self {
            view,
            start_url,
            window: None,
            webview: None,
        }
    }

    /// Create the window and its webview.
    /// Returns `false` if either failed and the event loop should exit.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Webgate")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        self.view.set_src(self.start_url.clone());
        let builder = WebViewBuilder::new()
            .with_bounds(window_bounds(size.width, size.height))
            .with_url(&self.start_url);
        let builder = host::attach(builder, &self.view);

        match builder.build_as_child(&window) {
            Ok(webview) => self.webview = Some(webview),
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        }

        tracing::info!(view_id = %self.view.id(), url = %self.start_url, "webview created");
        self.window = Some(window);
        true
    }
}

impl ApplicationHandler for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.webview = None;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(webview) = &self.webview {
                        if let Err(e) = webview.set_bounds(window_bounds(size.width, size.height)) {
                            tracing::warn!("Failed to resize webview: {e}");
                        }
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        for event in self.view.drain_events() {
            log_event(&event);
        }
    }
}

fn log_event(event: &WebViewEvent) {
    match event {
        WebViewEvent::LoadStarted {
            url,
            navigation_type,
            ..
        } => tracing::info!(url = %url, %navigation_type, "load started"),
        WebViewEvent::LoadFinished { outcome, .. } => match &outcome.error_message {
            Some(message) => {
                tracing::warn!(url = %outcome.final_url, error = %message, "load failed")
            }
            None => tracing::info!(url = %outcome.final_url, "load finished"),
        },
        WebViewEvent::NavigationCancelled { url, .. } => {
            tracing::info!(url = %url, "navigation cancelled")
        }
        WebViewEvent::Closed { view_id } => tracing::debug!(%view_id, "view closed"),
    }
}

/// Run the event loop until the window closes.
pub fn run(view: Arc<LocalWebView>, start_url: String) -> webgate_common::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| WebGateError::WebView(e.to_string()))?;
    let mut app = DesktopApp::new(view, start_url);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| WebGateError::WebView(e.to_string()))
}
