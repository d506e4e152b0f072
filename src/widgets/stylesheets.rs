use dioxus::prelude::*;
use crate::app::PageThemes;

/// Native builds keep theme stylesheets in memory; render them as links.
/// In the browser the controller edits `<head>` directly.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn ThemeStylesheets(themes: Signal<PageThemes>) -> Element {
    let hrefs = themes.read().document().stylesheets().to_vec();
    rsx! {
        for href in hrefs {
            link { key: "{href}", rel: "stylesheet", href: "{href}", "data-theme-style": "true" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn ThemeStylesheets(themes: Signal<PageThemes>) -> Element {
    let _ = themes;
    rsx! {}
}
