mod clock_display;
mod glass_card;
mod stylesheets;
mod theme_menu;
mod toast;

pub use clock_display::ClockDisplay;
pub use glass_card::GlassCard;
pub use stylesheets::ThemeStylesheets;
pub use theme_menu::ThemeMenu;
pub use toast::ToastStack;
