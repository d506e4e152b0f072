//! Application tiles on the dashboard. Tiles that point at another page
//! navigate; the rest are announced as coming soon.

use crate::notify::{NotificationLevel, Notifier};

const APPS: &[(&str, &str)] = &[
    ("portfolio", "../pagePortfolio/portfolio.html"),
    ("resources", "../pageRessources/ressources.html"),
    ("contact", "#contact"),
    ("blog", "#blog"),
    ("gallery", "#gallery"),
    ("tools", "#tools"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchOutcome {
    Navigate(String),
    Unavailable,
}

pub fn apps() -> impl Iterator<Item = &'static str> {
    APPS.iter().map(|(name, _)| *name)
}

pub fn target(app: &str) -> Option<&'static str> {
    APPS.iter().find(|(name, _)| *name == app).map(|(_, url)| *url)
}

pub fn open(app: &str, notifier: &mut impl Notifier) -> LaunchOutcome {
    match target(app) {
        Some(url) if url.starts_with("../") => {
            tracing::info!(%app, %url, "opening app");
            LaunchOutcome::Navigate(url.to_string())
        }
        _ => {
            notifier.notify(
                format!("Application {app} sera bientôt disponible !"),
                NotificationLevel::Info,
            );
            LaunchOutcome::Unavailable
        }
    }
}
