//! Wall clock shown in the header: time and long-form date.

use chrono::{DateTime, Locale, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockLocale {
    #[default]
    #[serde(rename = "fr-FR")]
    French,
    #[serde(rename = "en-US")]
    English,
}

impl ClockLocale {
    /// Parse a BCP 47 tag such as `fr-FR` or `en_US`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.replace('_', "-").to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Some(Self::French),
            "en" | "en-us" => Some(Self::English),
            _ => None,
        }
    }

    fn chrono_locale(self) -> Locale {
        match self {
            Self::French => Locale::fr_FR,
            Self::English => Locale::en_US,
        }
    }

    fn time_format(self) -> &'static str {
        match self {
            Self::French => "%H:%M:%S",
            Self::English => "%-I:%M:%S %p",
        }
    }

    fn date_format(self) -> &'static str {
        match self {
            Self::French => "%A %-d %B %Y",
            Self::English => "%A, %B %-d, %Y",
        }
    }
}

/// The two strings written into the clock and date targets on each tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

impl ClockReading {
    pub fn at<Tz>(now: &DateTime<Tz>, locale: ClockLocale) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let loc = locale.chrono_locale();
        Self {
            time: now.format_localized(locale.time_format(), loc).to_string(),
            date: now.format_localized(locale.date_format(), loc).to_string(),
        }
    }

    pub fn now(locale: ClockLocale) -> Self {
        Self::at(&chrono::Local::now(), locale)
    }
}
