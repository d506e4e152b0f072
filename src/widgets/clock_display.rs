use dioxus::prelude::*;
use crate::clock::ClockReading;

#[component]
pub fn ClockDisplay(reading: ClockReading) -> Element {
    rsx! {
        div { class: "clock-block", style: "text-align: center;",
            div { id: "clock", style: "font-size: 1.5rem; font-weight: 600;", "{reading.time}" }
            div { id: "date", style: "font-size: 0.85rem; opacity: 0.8;", "{reading.date}" }
        }
    }
}
