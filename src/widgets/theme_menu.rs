use dioxus::prelude::*;
use crate::app::PageThemes;
use crate::notify::NotificationCenter;

/// Theme buttons grouped by category. Each button is bound to its theme by id.
#[component]
pub fn ThemeMenu(mut themes: Signal<PageThemes>, mut notes: Signal<NotificationCenter>, open: bool) -> Element {
    let groups: Vec<(&'static str, Vec<(String, &'static str)>)> = {
        let controller = themes.read();
        let groups = controller
            .themes_by_category()
            .into_iter()
            .map(|(category, list)| {
                let buttons = list
                    .into_iter()
                    .map(|t| {
                        let class = if controller.is_control_active(&t.name) { "theme active" } else { "theme" };
                        (t.name.clone(), class)
                    })
                    .collect();
                (category.display_name(), buttons)
            })
            .collect();
        groups
    };
    let class = if open { "theme-menu active" } else { "theme-menu" };

    rsx! {
        div { id: "theme-menu", class: "{class}",
            for (heading, buttons) in groups {
                div { class: "theme-group", key: "{heading}",
                    h4 { "{heading}" }
                    for (name, button_class) in buttons {
                        button {
                            key: "{name}",
                            id: "{name}",
                            class: "{button_class}",
                            onclick: {
                                let name = name.clone();
                                move |_| {
                                    if let Err(e) = themes.write().select_control(&name, &mut *notes.write()) {
                                        tracing::debug!(error = %e, "theme button ignored");
                                    }
                                }
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
