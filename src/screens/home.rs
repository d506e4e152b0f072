use dioxus::prelude::*;
use crate::app::PageThemes;
use crate::clock::ClockReading;
use crate::effects::{HeaderState, ParallaxOffset, VisualPrefs};
use crate::launcher;
use crate::menu::{ClickTarget, MenuController};
use crate::notify::NotificationCenter;
use crate::platform;
use crate::style::spacing;
use crate::widgets::{ClockDisplay, GlassCard, ThemeMenu};

/// Cards that drift with the pointer, in parallax order.
pub const CARDS: &[(&str, &str)] = &[
    ("Projets", "Sites, outils et expériences récentes."),
    ("Compétences", "Rust, web, design d'interfaces."),
    ("Ressources", "Liens, notes et articles utiles."),
];

fn sub_menu_label(id: &str) -> &str {
    match id {
        "menu-apps" => "Applications",
        "menu-links" => "Liens",
        other => other,
    }
}

fn sub_menu_class(open: Option<&str>, id: &str) -> &'static str {
    if open == Some(id) {
        "sous-menu active"
    } else {
        "sous-menu"
    }
}

#[component]
pub fn HomeScreen(
    themes: Signal<PageThemes>,
    mut notes: Signal<NotificationCenter>,
    mut menu: Signal<MenuController>,
    mut click: Signal<ClickTarget>,
    prefs: Signal<VisualPrefs>,
    header: HeaderState,
    clock: ClockReading,
    offsets: Vec<ParallaxOffset>,
) -> Element {
    let blur = prefs.read().blur_enabled();
    let header_filter = if blur { header.backdrop_filter() } else { "blur(0px)" };
    let header_bg = header.background();
    let (nav_open, theme_menu_open, open_menu, menu_ids) = {
        let m = menu.read();
        let ids: Vec<String> = m.sub_menu_ids().map(String::from).collect();
        (m.is_nav_open(), m.is_theme_menu_open(), m.open_menu().map(String::from), ids)
    };
    let nav_class = if nav_open { "active" } else { "" };

    rsx! {
        header {
            id: "main-header",
            style: "position: sticky; top: 0; display: flex; align-items: center; gap: 16px; padding: {spacing::HEADER_PADDING}; background: {header_bg}; backdrop-filter: {header_filter};",
            onclick: move |_| click.write().inside_header = true,
            div { class: "logo", style: "font-weight: 700;", "Portfolio" }
            ClockDisplay { reading: clock }
            div { style: "flex: 1;" }
            button {
                id: "menu-toggle",
                onclick: move |_| menu.write().toggle_nav(),
                "☰"
            }
            nav { id: "nav", class: "{nav_class}",
                div {
                    class: "nav-buttons",
                    onclick: move |_| click.write().inside_nav_buttons = true,
                    for id in menu_ids.clone() {
                        button {
                            key: "{id}",
                            onclick: {
                                let id = id.clone();
                                move |_| {
                                    menu.write().toggle(&id);
                                }
                            },
                            "{sub_menu_label(&id)}"
                        }
                    }
                    button { id: "theme-toggle", onclick: move |_| menu.write().toggle_theme_menu(), "Thèmes" }
                    button { id: "dashboard-toggle", onclick: move |_| menu.write().open_dashboard(), "Tableau de bord" }
                }
                for id in menu_ids {
                    div {
                        key: "{id}",
                        id: "{id}",
                        class: "{sub_menu_class(open_menu.as_deref(), &id)}",
                        onclick: move |_| click.write().inside_sub_menu = true,
                        SubMenuContent { id: id.clone(), notes }
                    }
                }
            }
            ThemeMenu { themes, notes, open: theme_menu_open }
        }
        main { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; padding: 32px;",
            for (i, (title, body)) in CARDS.iter().enumerate() {
                GlassCard {
                    key: "{title}",
                    offset: offsets.get(i).copied().unwrap_or_default(),
                    blur,
                    h2 { "{title}" }
                    p { "{body}" }
                }
            }
        }
    }
}

#[component]
fn SubMenuContent(id: String, mut notes: Signal<NotificationCenter>) -> Element {
    match id.as_str() {
        "menu-apps" => rsx! {
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
        },
        _ => rsx! {
            a { href: "#contact", "Contact" }
            a { href: "#blog", "Blog" }
            a { href: "#gallery", "Galerie" }
        },
    }
}
