//! Browser glue that Dioxus does not cover: window-level listeners,
//! viewport size, navigation and timers.
//!
//! Window callbacks run outside the Dioxus runtime, so they only push a
//! [`PageEvent`] into a channel that a component task drains.

use futures::channel::mpsc::UnboundedSender;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    Scroll(f64),
    Key(String),
    ScriptError(String),
    StylesheetFailed(String),
}

pub type PageEvents = UnboundedSender<PageEvent>;

/// True when keydown reaches the page through the window listener, so
/// component key handlers must not act on it again.
pub fn window_forwards_keys() -> bool {
    cfg!(target_arch = "wasm32")
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(d: Duration) {
    gloo_timers::future::sleep(d).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(d: Duration) {
    tokio::time::sleep(d).await;
}

#[cfg(target_arch = "wasm32")]
pub use web::{install_window_listeners, js_error, navigate, viewport_size};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{PageEvent, PageEvents};
    use crate::error::{PageError, Result};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    pub fn js_error(e: JsValue) -> PageError {
        PageError::Dom(format!("{e:?}"))
    }

    fn window() -> Result<web_sys::Window> {
        web_sys::window().ok_or_else(|| PageError::Dom("no window".to_string()))
    }

    /// Window scroll, keydown and uncaught-error listeners. They live as
    /// long as the page.
    pub fn install_window_listeners(events: PageEvents) -> Result<()> {
        let win = window()?;

        let tx = events.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            if let Some(w) = web_sys::window() {
                let y = w.scroll_y().unwrap_or(0.0);
                let _ = tx.unbounded_send(PageEvent::Scroll(y));
            }
        });
        win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_scroll.forget();

        let tx = events.clone();
        let on_key = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |e: web_sys::KeyboardEvent| {
            let _ = tx.unbounded_send(PageEvent::Key(e.key()));
        });
        win.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_key.forget();

        let tx = events;
        let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |e: web_sys::ErrorEvent| {
            let message = e.message();
            // Stylesheet failures are already reported by the link's own handler.
            if e.filename().contains(".css") {
                tracing::error!(file = %e.filename(), "css load error");
                return;
            }
            let _ = tx.unbounded_send(PageEvent::ScriptError(message));
        });
        win.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_error.forget();
        Ok(())
    }

    pub fn viewport_size() -> Option<(f64, f64)> {
        let win = web_sys::window()?;
        let w = win.inner_width().ok()?.as_f64()?;
        let h = win.inner_height().ok()?.as_f64()?;
        Some((w, h))
    }

    pub fn navigate(url: &str) -> Result<()> {
        window()?.location().set_href(url).map_err(js_error)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_window_listeners(_events: PageEvents) -> crate::error::Result<()> {
    Ok(())
}

/// Native builds have no browser window; cards stay at rest.
#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> Option<(f64, f64)> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(url: &str) -> crate::error::Result<()> {
    tracing::info!(%url, "navigation requested outside a browser");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::window_forwards_keys;

    #[test]
    fn native_builds_handle_keys_in_components() {
        assert!(!window_forwards_keys());
    }
}
