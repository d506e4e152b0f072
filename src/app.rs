use dioxus::prelude::*;
use futures::StreamExt;

use crate::clock::ClockReading;
use crate::config::PageConfig;
use crate::effects::{Debouncer, HeaderState, VisualPrefs};
use crate::menu::{ClickTarget, MenuController};
use crate::notify::{report_script_error, NotificationCenter};
use crate::platform::{self, PageEvent, PageEvents};
use crate::screens::{DashboardScreen, HomeScreen};
use crate::style::KEYFRAMES;
use crate::theme::{self, ThemeController, ThemeRegistry};
use crate::theme::ThemeDocument;
use crate::widgets::{ThemeStylesheets, ToastStack};

#[cfg(target_arch = "wasm32")]
pub type PageThemes = ThemeController<theme::BrowserDocument, theme::LocalStorageStore>;
#[cfg(not(target_arch = "wasm32"))]
pub type PageThemes = ThemeController<theme::MemoryDocument, theme::FileStore>;

#[cfg(target_arch = "wasm32")]
fn build_themes(config: &PageConfig, events: PageEvents) -> PageThemes {
    let mut controller = ThemeController::with_store(
        ThemeRegistry::builtin(),
        theme::BrowserDocument::new(events),
        theme::LocalStorageStore::new(&config.storage_key),
        config,
    );
    controller.bind_registry();
    controller
}

#[cfg(not(target_arch = "wasm32"))]
fn build_themes(config: &PageConfig, _events: PageEvents) -> PageThemes {
    let store = theme::FileStore::in_config_dir(&config.storage_key).unwrap_or_else(|| {
        theme::FileStore::new(std::env::temp_dir().join("portfolio-settings.json"), &config.storage_key)
    });
    let mut controller = ThemeController::with_store(
        ThemeRegistry::builtin(),
        theme::MemoryDocument::new(),
        store,
        config,
    );
    controller.bind_registry();
    controller
}

#[component]
pub fn App() -> Element {
    let config = use_hook(PageConfig::from_env);
    let mut notes = use_signal(|| {
        NotificationCenter::new(config.notification_visible(), config.notification_exit())
    });
    let mut header = use_signal(HeaderState::default);
    let mut scroll = use_signal(|| Debouncer::<f64>::new(config.debounce()));
    let mut pointer = use_signal(|| Debouncer::<(f64, f64)>::new(config.debounce()));
    let mut offsets = use_signal(Vec::new);
    let mut menu = use_signal(|| MenuController::new(config.sub_menus.clone()));
    let mut click = use_signal(ClickTarget::default);
    let prefs = use_signal(|| VisualPrefs::new(config.notify_on_dark_mode));
    let mut clock = use_signal(|| ClockReading::now(config.clock_locale));

    let threshold = config.scroll_threshold;
    let page_events = use_coroutine(move |mut rx: futures::channel::mpsc::UnboundedReceiver<PageEvent>| async move {
        while let Some(event) = rx.next().await {
            match event {
                PageEvent::Scroll(y) => {
                    let ticket = scroll.write().trigger(y);
                    let wait = scroll.peek().wait();
                    spawn(async move {
                        platform::sleep(wait).await;
                        if let Some(y) = scroll.write().fire(ticket) {
                            header.set(HeaderState::with_threshold(y, threshold));
                        }
                    });
                }
                PageEvent::Key(key) => {
                    menu.write().key(&key);
                }
                PageEvent::ScriptError(message) => {
                    report_script_error(&mut *notes.write(), &message);
                }
                PageEvent::StylesheetFailed(href) => {
                    theme::stylesheet_failed(&href, &mut *notes.write());
                }
            }
        }
    });

    let mut themes = use_signal(|| build_themes(&config, page_events.tx()));

    use_hook(move || {
        spawn(async move {
            if let Err(e) = platform::install_window_listeners(page_events.tx()) {
                tracing::warn!(error = %e, "window listeners not installed");
            }
            themes.write().initialize(&mut *notes.write());
        });
    });

    let locale = config.clock_locale;
    let interval = config.clock_interval();
    use_future(move || async move {
        loop {
            clock.set(ClockReading::now(locale));
            platform::sleep(interval).await;
        }
    });

    let card_count = crate::screens::CARDS.len();
    let factor = config.parallax_factor;
    let on_pointer = move |evt: MouseEvent| {
        let p = evt.client_coordinates();
        let ticket = pointer.write().trigger((p.x, p.y));
        let wait = pointer.peek().wait();
        spawn(async move {
            platform::sleep(wait).await;
            if let Some(pos) = pointer.write().fire(ticket) {
                let viewport = platform::viewport_size().unwrap_or((0.0, 0.0));
                offsets.set(crate::effects::parallax(pos, viewport, card_count, factor));
            }
        });
    };

    let body_class = themes.read().document().body_classes().join(" ");

    rsx! {
        style { {KEYFRAMES} }
        ThemeStylesheets { themes }
        div {
            class: "{body_class}",
            style: "font-family: system-ui, sans-serif; min-height: 100vh;",
            tabindex: 0,
            onclick: move |_| {
                let target = std::mem::take(&mut *click.write());
                menu.write().click(target);
            },
            onkeydown: move |evt: KeyboardEvent| {
                if !platform::window_forwards_keys() {
                    menu.write().key(&evt.key().to_string());
                }
            },
            onmousemove: on_pointer,
            HomeScreen {
                themes,
                notes,
                menu,
                click,
                prefs,
                header: header(),
                clock: clock(),
                offsets: offsets(),
            }
            DashboardScreen { themes, notes, menu, prefs }
            ToastStack { notes }
        }
    }
}
