use dioxus::prelude::*;
use crate::effects::ParallaxOffset;
use crate::style::{spacing, GLASS_SURFACE};

#[component]
pub fn GlassCard(offset: ParallaxOffset, blur: bool, children: Element) -> Element {
    let transform = offset.transform();
    let filter = if blur { "blur(20px)" } else { "blur(0px)" };
    rsx! {
        div {
            class: "glass-card",
            style: "background: {GLASS_SURFACE}; backdrop-filter: {filter}; border-radius: {spacing::CARD_RADIUS}; padding: {spacing::CARD_PADDING}; transform: {transform};",
            {children}
        }
    }
}
