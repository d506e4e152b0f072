//! Colors and spacing shared by the toasts, header and cards.

use crate::notify::NotificationLevel;

/// Toast colors: frosted glass for info, dark with an orange accent for errors.
#[derive(Clone, Copy)]
pub struct ToastColors;

impl ToastColors {
    pub const INFO_BACKGROUND: &'static str = "rgba(255, 255, 255, 0.2)";
    pub const INFO_TEXT: &'static str = "white";
    pub const INFO_BORDER: &'static str = "rgba(255, 255, 255, 0.2)";
    pub const INFO_SHADOW: &'static str = "0 10px 25px rgba(31, 38, 135, 0.2)";

    pub const ERROR_BACKGROUND: &'static str = "rgba(17, 17, 17, 0.95)";
    pub const ERROR_TEXT: &'static str = "#FF4500";
    pub const ERROR_BORDER: &'static str = "rgba(255, 69, 0, 0.3)";
    pub const ERROR_SHADOW: &'static str = "0 10px 25px rgba(0, 0, 0, 0.5)";

    pub fn background(level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => Self::INFO_BACKGROUND,
            NotificationLevel::Error => Self::ERROR_BACKGROUND,
        }
    }
    pub fn text(level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => Self::INFO_TEXT,
            NotificationLevel::Error => Self::ERROR_TEXT,
        }
    }
    pub fn border(level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => Self::INFO_BORDER,
            NotificationLevel::Error => Self::ERROR_BORDER,
        }
    }
    pub fn shadow(level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => Self::INFO_SHADOW,
            NotificationLevel::Error => Self::ERROR_SHADOW,
        }
    }
}

pub mod spacing {
    pub const TOAST_OFFSET: &str = "20px";
    pub const TOAST_GAP: &str = "12px";
    pub const TOAST_PADDING: &str = "15px 20px";
    pub const CARD_PADDING: &str = "24px";
    pub const CARD_RADIUS: &str = "20px";
    pub const HEADER_PADDING: &str = "16px 32px";
}

pub const GLASS_SURFACE: &str = "rgba(255, 255, 255, 0.15)";
pub const TOAST_Z_INDEX: u32 = 10000;

/// Toast slide animations, injected once by the root component.
pub const KEYFRAMES: &str = "@keyframes slideIn { from { transform: translateX(120%); opacity: 0; } to { transform: translateX(0); opacity: 1; } } \
@keyframes slideOut { from { transform: translateX(0); opacity: 1; } to { transform: translateX(120%); opacity: 0; } }";
