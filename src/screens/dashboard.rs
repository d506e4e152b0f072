use dioxus::prelude::*;
use crate::app::PageThemes;
use crate::effects::VisualPrefs;
use crate::launcher;
use crate::menu::MenuController;
use crate::notify::NotificationCenter;
use crate::platform;
use crate::style::spacing;

/// Full-screen overlay with app tiles and display switches. Closes on
/// Escape, on its close button, or on a click on the backdrop itself.
#[component]
pub fn DashboardScreen(
    mut themes: Signal<PageThemes>,
    mut notes: Signal<NotificationCenter>,
    mut menu: Signal<MenuController>,
    mut prefs: Signal<VisualPrefs>,
) -> Element {
    let mut on_panel = use_signal(|| false);
    let open = menu.read().is_dashboard_open();
    let (blur, dark) = {
        let p = prefs.read();
        (p.blur_enabled(), p.dark_mode())
    };
    let class = if open { "dashboard active" } else { "dashboard" };
    let display = if open { "flex" } else { "none" };

    rsx! {
        div {
            id: "dashboard",
            class: "{class}",
            style: "display: {display}; position: fixed; inset: 0; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.4);",
            onclick: move |_| {
                let inside = std::mem::take(&mut *on_panel.write());
                menu.write().dashboard_click(!inside);
            },
            div {
                class: "dashboard-panel",
                style: "min-width: 320px; padding: {spacing::CARD_PADDING}; border-radius: {spacing::CARD_RADIUS}; background: rgba(255, 255, 255, 0.15); backdrop-filter: blur(30px);",
                onclick: move |_| on_panel.set(true),
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    h2 { "Tableau de bord" }
                    button { id: "close-dashboard", onclick: move |_| menu.write().close_dashboard(), "✕" }
                }
                div { class: "apps-section", style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px;",
                    for app in launcher::apps() {
                        button {
                            key: "{app}",
                            class: "app-item",
                            onclick: move |_| {
                                if let launcher::LaunchOutcome::Navigate(url) = launcher::open(app, &mut *notes.write()) {
                                    if let Err(e) = platform::navigate(&url) {
                                        tracing::warn!(%url, error = %e, "navigation failed");
                                    }
                                }
                            },
                            "{app}"
                        }
                    }
                }
                div { class: "controls", style: "display: flex; gap: 12px; margin-top: 16px;",
                    button {
                        class: "control-btn",
                        onclick: move |_| {
                            prefs.write().toggle_blur(&mut *notes.write());
                        },
                        if blur { "Désactiver le blur" } else { "Activer le blur" }
                    }
                    button {
                        class: "control-btn",
                        onclick: move |_| {
                            let result = prefs
                                .write()
                                .toggle_dark_mode(themes.write().document_mut(), &mut *notes.write());
                            if let Err(e) = result {
                                tracing::warn!(error = %e, "dark mode toggle failed");
                            }
                        },
                        if dark { "Mode clair" } else { "Mode sombre" }
                    }
                }
            }
        }
    }
}
