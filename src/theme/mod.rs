//! Theme system: registry of named themes, the controller that swaps the
//! body class and stylesheet link, and the seams it works through.

mod controller;
mod document;
mod registry;
mod store;

pub use controller::{
    stylesheet_failed, theme_name_from_target, ActiveThemeState, ThemeBinding, ThemeController,
};
pub use document::{MemoryDocument, StylesheetHandle, ThemeDocument, THEME_CLASS_PREFIX};
pub use registry::{ThemeCategory, ThemeDescriptor, ThemeRegistry};
pub use store::{MemoryStore, ThemeStore};

#[cfg(target_arch = "wasm32")]
pub use document::BrowserDocument;
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;
