//! Error types for the page frontend.

use thiserror::Error;

/// Errors raised by the page controllers. None of them is fatal: event
/// handlers log them and surface a notification, then keep going.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Requested theme is absent from the registry
    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    /// A theme button was clicked that no binding knows about
    #[error("no theme bound to control: {0}")]
    UnboundControl(String),

    /// Two descriptors share the same name
    #[error("duplicate theme name: {0}")]
    DuplicateTheme(String),

    /// A theme stylesheet failed to load
    #[error("stylesheet failed to load: {0}")]
    StylesheetLoad(String),

    /// Persisted theme selection could not be read or written
    #[error("storage error: {0}")]
    Storage(String),

    /// A document element was missing or rejected a mutation
    #[error("dom error: {0}")]
    Dom(String),

    /// Config or registry JSON could not be parsed
    #[error("invalid config: {0}")]
    Config(String),

    /// Uncaught script error reported by the page-level handler
    #[error("script error: {0}")]
    Script(String),
}

pub type Result<T> = std::result::Result<T, PageError>;
