//! The slice of the page the theme controller mutates: body classes and
//! theme stylesheet links.

use crate::error::Result;

/// Every theme marker class starts with this prefix.
pub const THEME_CLASS_PREFIX: &str = "theme-";

/// Tracked reference to a `<link rel="stylesheet">` in the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StylesheetHandle {
    href: String,
}

impl StylesheetHandle {
    pub fn new(href: &str) -> Self {
        Self { href: href.to_string() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

pub trait ThemeDocument {
    fn body_classes(&self) -> Vec<String>;
    fn add_body_class(&mut self, class: &str) -> Result<()>;
    fn remove_body_class(&mut self, class: &str) -> Result<()>;

    /// Existing stylesheet link with exactly this href, if any.
    fn find_stylesheet(&self, href: &str) -> Option<StylesheetHandle>;
    fn insert_stylesheet(&mut self, href: &str) -> Result<StylesheetHandle>;
    fn remove_stylesheet(&mut self, handle: &StylesheetHandle) -> Result<()>;

    fn has_body_class(&self, class: &str) -> bool {
        self.body_classes().iter().any(|c| c == class)
    }
}

/// In-memory document used by native builds and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    body_classes: Vec<String>,
    stylesheets: Vec<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document that already links `href` (e.g. from the static markup).
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    pub fn with_body_class(mut self, class: &str) -> Self {
        self.body_classes.push(class.to_string());
        self
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn stylesheet_count(&self, href: &str) -> usize {
        self.stylesheets.iter().filter(|s| *s == href).count()
    }
}

impl ThemeDocument for MemoryDocument {
    fn body_classes(&self) -> Vec<String> {
        self.body_classes.clone()
    }

    fn add_body_class(&mut self, class: &str) -> Result<()> {
        if !self.has_body_class(class) {
            self.body_classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_body_class(&mut self, class: &str) -> Result<()> {
        self.body_classes.retain(|c| c != class);
        Ok(())
    }

    fn find_stylesheet(&self, href: &str) -> Option<StylesheetHandle> {
        self.stylesheets
            .iter()
            .any(|s| s == href)
            .then(|| StylesheetHandle::new(href))
    }

    fn insert_stylesheet(&mut self, href: &str) -> Result<StylesheetHandle> {
        self.stylesheets.push(href.to_string());
        Ok(StylesheetHandle::new(href))
    }

    fn remove_stylesheet(&mut self, handle: &StylesheetHandle) -> Result<()> {
        if let Some(pos) = self.stylesheets.iter().position(|s| s == handle.href()) {
            self.stylesheets.remove(pos);
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserDocument;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{StylesheetHandle, ThemeDocument};
    use crate::error::{PageError, Result};
    use crate::platform::{js_error, PageEvent, PageEvents};
    use std::collections::HashMap;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, HtmlLinkElement};

    /// onerror/onload callbacks of a link this document inserted. Dropped
    /// together with the link.
    struct LinkListeners {
        link: HtmlLinkElement,
        _onerror: Closure<dyn FnMut()>,
        _onload: Closure<dyn FnMut()>,
    }

    impl Drop for LinkListeners {
        fn drop(&mut self) {
            self.link.set_onerror(None);
            self.link.set_onload(None);
        }
    }

    /// Live `web_sys` document. Stylesheet load failures are reported back
    /// through the page event channel.
    pub struct BrowserDocument {
        events: PageEvents,
        listeners: HashMap<String, LinkListeners>,
    }

    impl BrowserDocument {
        pub fn new(events: PageEvents) -> Self {
            Self {
                events,
                listeners: HashMap::new(),
            }
        }
    }

    fn document() -> Result<Document> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PageError::Dom("no document".to_string()))
    }

    fn body() -> Result<HtmlElement> {
        document()?
            .body()
            .ok_or_else(|| PageError::Dom("no body".to_string()))
    }

    fn link_selector(href: &str) -> String {
        format!("link[href=\"{}\"]", href.replace('"', "\\\""))
    }

    impl ThemeDocument for BrowserDocument {
        fn body_classes(&self) -> Vec<String> {
            let Ok(body) = body() else {
                return Vec::new();
            };
            let list = body.class_list();
            (0..list.length()).filter_map(|i| list.item(i)).collect()
        }

        fn add_body_class(&mut self, class: &str) -> Result<()> {
            body()?.class_list().add_1(class).map_err(js_error)
        }

        fn remove_body_class(&mut self, class: &str) -> Result<()> {
            body()?.class_list().remove_1(class).map_err(js_error)
        }

        fn find_stylesheet(&self, href: &str) -> Option<StylesheetHandle> {
            document()
                .ok()?
                .query_selector(&link_selector(href))
                .ok()
                .flatten()
                .map(|_| StylesheetHandle::new(href))
        }

        fn insert_stylesheet(&mut self, href: &str) -> Result<StylesheetHandle> {
            let doc = document()?;
            let head = doc
                .head()
                .ok_or_else(|| PageError::Dom("no head".to_string()))?;
            let link: HtmlLinkElement = doc
                .create_element("link")
                .map_err(js_error)?
                .dyn_into()
                .map_err(|_| PageError::Dom("link is not an HtmlLinkElement".to_string()))?;
            link.set_rel("stylesheet");
            link.set_href(href);
            link.set_attribute("data-theme-style", "true").map_err(js_error)?;

            let tx = self.events.clone();
            let failed = href.to_string();
            let onerror = Closure::<dyn FnMut()>::new(move || {
                let _ = tx.unbounded_send(PageEvent::StylesheetFailed(failed.clone()));
            });
            link.set_onerror(Some(onerror.as_ref().unchecked_ref()));

            let loaded = href.to_string();
            let onload = Closure::<dyn FnMut()>::new(move || {
                tracing::debug!(href = %loaded, "theme stylesheet loaded");
            });
            link.set_onload(Some(onload.as_ref().unchecked_ref()));

            head.append_child(&link).map_err(js_error)?;
            self.listeners.insert(
                href.to_string(),
                LinkListeners {
                    link,
                    _onerror: onerror,
                    _onload: onload,
                },
            );
            Ok(StylesheetHandle::new(href))
        }

        fn remove_stylesheet(&mut self, handle: &StylesheetHandle) -> Result<()> {
            self.listeners.remove(handle.href());
            if let Some(el) = document()?
                .query_selector(&link_selector(handle.href()))
                .map_err(js_error)?
            {
                el.remove();
            }
            Ok(())
        }
    }
}
