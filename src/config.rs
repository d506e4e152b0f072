//! Page configuration: default theme, timings and thresholds.

use crate::clock::ClockLocale;
use crate::error::{PageError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Theme applied at startup when nothing is persisted. Name or stylesheet path.
    pub default_theme: String,
    pub storage_key: String,
    /// Show a toast after every successful theme change.
    pub notify_on_theme_change: bool,
    pub notify_on_dark_mode: bool,
    pub notification_visible_ms: u64,
    pub notification_exit_ms: u64,
    pub debounce_ms: u64,
    pub clock_interval_ms: u64,
    pub scroll_threshold: f64,
    pub parallax_factor: f64,
    pub clock_locale: ClockLocale,
    /// Ids of the dropdown sub-menus in the nav bar.
    pub sub_menus: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_theme: "css/AMOLED/AMOLED.css".to_string(),
            storage_key: "selectedTheme".to_string(),
            notify_on_theme_change: true,
            notify_on_dark_mode: false,
            notification_visible_ms: 3000,
            notification_exit_ms: 300,
            debounce_ms: 16,
            clock_interval_ms: 1000,
            scroll_threshold: 100.0,
            parallax_factor: 0.5,
            clock_locale: ClockLocale::French,
            sub_menus: vec!["menu-apps".to_string(), "menu-links".to_string()],
        }
    }
}

impl PageConfig {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))
    }

    /// Read `PORTFOLIO_*` overrides; unset or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_theme: env::var("PORTFOLIO_DEFAULT_THEME").unwrap_or(defaults.default_theme),
            storage_key: env::var("PORTFOLIO_STORAGE_KEY").unwrap_or(defaults.storage_key),
            notify_on_theme_change: env_parse(
                "PORTFOLIO_NOTIFY_ON_THEME_CHANGE",
                defaults.notify_on_theme_change,
            ),
            notify_on_dark_mode: env_parse("PORTFOLIO_NOTIFY_ON_DARK_MODE", defaults.notify_on_dark_mode),
            notification_visible_ms: env_parse(
                "PORTFOLIO_NOTIFICATION_VISIBLE_MS",
                defaults.notification_visible_ms,
            ),
            notification_exit_ms: env_parse("PORTFOLIO_NOTIFICATION_EXIT_MS", defaults.notification_exit_ms),
            debounce_ms: env_parse("PORTFOLIO_DEBOUNCE_MS", defaults.debounce_ms),
            clock_interval_ms: env_parse("PORTFOLIO_CLOCK_INTERVAL_MS", defaults.clock_interval_ms),
            scroll_threshold: env_parse("PORTFOLIO_SCROLL_THRESHOLD", defaults.scroll_threshold),
            parallax_factor: env_parse("PORTFOLIO_PARALLAX_FACTOR", defaults.parallax_factor),
            clock_locale: env::var("PORTFOLIO_CLOCK_LOCALE")
                .ok()
                .and_then(|s| ClockLocale::from_tag(&s))
                .unwrap_or(defaults.clock_locale),
            sub_menus: defaults.sub_menus,
        }
    }

    pub fn notification_visible(&self) -> Duration {
        Duration::from_millis(self.notification_visible_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
