use dioxus::prelude::*;
use crate::notify::{NotificationCenter, NotificationId, NotificationLevel, Phase};
use crate::platform;
use crate::style::{spacing, ToastColors, TOAST_Z_INDEX};

/// Stacks every live toast in the top-right corner.
#[component]
pub fn ToastStack(notes: Signal<NotificationCenter>) -> Element {
    let toasts: Vec<_> = notes.read().active().to_vec();
    rsx! {
        div {
            style: "position: fixed; top: {spacing::TOAST_OFFSET}; right: {spacing::TOAST_OFFSET}; z-index: {TOAST_Z_INDEX}; display: flex; flex-direction: column; gap: {spacing::TOAST_GAP};",
            for n in toasts {
                Toast {
                    key: "{n.id}",
                    notes,
                    id: n.id,
                    message: n.message.clone(),
                    level: n.level,
                    leaving: n.phase == Phase::Leaving,
                }
            }
        }
    }
}

/// One toast. Schedules its own exit and removal when mounted.
#[component]
fn Toast(
    mut notes: Signal<NotificationCenter>,
    id: NotificationId,
    message: String,
    level: NotificationLevel,
    leaving: bool,
) -> Element {
    use_hook(move || {
        let (visible, exit) = {
            let center = notes.peek();
            (center.visible_for(), center.exit_animation())
        };
        spawn(async move {
            platform::sleep(visible).await;
            notes.write().begin_exit(id);
            platform::sleep(exit).await;
            notes.write().remove(id);
        });
    });

    let animation = if leaving { "slideOut" } else { "slideIn" };
    let bg = ToastColors::background(level);
    let fg = ToastColors::text(level);
    let border = ToastColors::border(level);
    let shadow = ToastColors::shadow(level);
    rsx! {
        div {
            class: "notification",
            style: "background: {bg}; backdrop-filter: blur(20px); color: {fg}; padding: {spacing::TOAST_PADDING}; border-radius: 15px; border: 1px solid {border}; box-shadow: {shadow}; animation: {animation} 0.3s ease forwards;",
            "{message}"
        }
    }
}
