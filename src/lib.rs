//! Portfolio page frontend: theme switching, menus, clock, viewport
//! effects and toasts. The logic modules are UI-independent; `app`,
//! `screens` and `widgets` wire them into Dioxus.

pub mod clock;
pub mod config;
pub mod effects;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod menu;
pub mod notify;
pub mod platform;
pub mod style;
pub mod theme;

#[cfg(any(feature = "web", feature = "desktop"))]
pub mod app;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod screens;
#[cfg(any(feature = "web", feature = "desktop"))]
pub mod widgets;

pub use config::PageConfig;
pub use error::{PageError, Result};
