//! Toast notifications: shown, then sliding out, then removed.
//!
//! Every `show` creates an independent toast. There is no queue, no
//! de-duplication and no cap; concurrent toasts simply stack.

use crate::error::PageError;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Generic text shown when the page-level error handler fires.
pub const SCRIPT_ERROR_MESSAGE: &str = "Une erreur est survenue";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationLevel {
    #[default]
    Info,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Leaving,
    Expired,
}

impl Phase {
    /// Phase of a toast `elapsed` after it was shown.
    pub fn at(elapsed: Duration, visible: Duration, exit: Duration) -> Self {
        if elapsed < visible {
            Phase::Visible
        } else if elapsed < visible + exit {
            Phase::Leaving
        } else {
            Phase::Expired
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub level: NotificationLevel,
    pub phase: Phase,
}

/// Anything that can put a toast on screen.
pub trait Notifier {
    fn notify(&mut self, message: String, level: NotificationLevel) -> NotificationId;
}

#[derive(Clone, Debug)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    visible_for: Duration,
    exit_animation: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(VISIBLE_FOR, EXIT_ANIMATION)
    }
}

impl NotificationCenter {
    pub fn new(visible_for: Duration, exit_animation: Duration) -> Self {
        Self {
            entries: Vec::new(),
            visible_for,
            exit_animation,
        }
    }

    pub fn show(&mut self, message: impl Into<String>) -> NotificationId {
        self.show_level(message, NotificationLevel::Info)
    }

    pub fn show_level(&mut self, message: impl Into<String>, level: NotificationLevel) -> NotificationId {
        let id = NotificationId(Uuid::new_v4());
        let message = message.into();
        tracing::debug!(%id, %message, "notification shown");
        self.entries.push(Notification {
            id,
            message,
            level,
            phase: Phase::Visible,
        });
        id
    }

    /// Start the slide-out animation. Unknown ids are ignored.
    pub fn begin_exit(&mut self, id: NotificationId) {
        if let Some(n) = self.entries.iter_mut().find(|n| n.id == id) {
            n.phase = Phase::Leaving;
        }
    }

    pub fn remove(&mut self, id: NotificationId) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn active(&self) -> &[Notification] {
        &self.entries
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn phase_at(&self, elapsed: Duration) -> Phase {
        Phase::at(elapsed, self.visible_for, self.exit_animation)
    }

    pub fn visible_for(&self) -> Duration {
        self.visible_for
    }

    pub fn exit_animation(&self) -> Duration {
        self.exit_animation
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, message: String, level: NotificationLevel) -> NotificationId {
        self.show_level(message, level)
    }
}

/// Page-level error hook: log the uncaught error and show the generic toast.
pub fn report_script_error(notifier: &mut impl Notifier, message: &str) -> NotificationId {
    let err = PageError::Script(message.to_string());
    tracing::error!(error = %err, "uncaught script error");
    notifier.notify(SCRIPT_ERROR_MESSAGE.to_string(), NotificationLevel::Error)
}
