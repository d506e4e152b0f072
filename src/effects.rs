//! Viewport effects: header translucency on scroll, card parallax on
//! pointer move, the debounce that throttles both, and the blur and
//! dark-mode switches.

use crate::error::Result;
use crate::notify::{NotificationLevel, Notifier};
use crate::theme::ThemeDocument;
use std::time::Duration;

pub const SCROLL_THRESHOLD: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.5;
/// ~60 updates per second.
pub const DEBOUNCE_WAIT: Duration = Duration::from_millis(16);
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderState {
    #[default]
    Light,
    Heavy,
}

impl HeaderState {
    pub fn from_scroll(scroll_y: f64) -> Self {
        Self::with_threshold(scroll_y, SCROLL_THRESHOLD)
    }

    /// Heavy strictly above the threshold. No hysteresis.
    pub fn with_threshold(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            HeaderState::Heavy
        } else {
            HeaderState::Light
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            HeaderState::Light => "rgba(255, 255, 255, 0.15)",
            HeaderState::Heavy => "rgba(255, 255, 255, 0.1)",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            HeaderState::Light => "blur(20px)",
            HeaderState::Heavy => "blur(30px)",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Offset for each of `count` cards: the normalized pointer position
/// scaled by `(index + 1) * factor`, so later cards move further.
pub fn parallax(pointer: (f64, f64), viewport: (f64, f64), count: usize, factor: f64) -> Vec<ParallaxOffset> {
    let norm = |p: f64, size: f64| if size > 0.0 { p / size } else { 0.0 };
    let x = norm(pointer.0, viewport.0);
    let y = norm(pointer.1, viewport.1);
    (0..count)
        .map(|i| {
            let speed = (i + 1) as f64 * factor;
            ParallaxOffset {
                x: x * speed,
                y: y * speed,
            }
        })
        .collect()
}

/// Identifies one scheduled invocation of a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Trailing-edge debounce. Each `trigger` supersedes the pending call;
/// when a ticket's delay elapses, `fire` hands back the latest arguments
/// only if no newer trigger arrived in between.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEBOUNCE_WAIT)
    }
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            generation: 0,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn trigger(&mut self, args: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(args);
        Ticket(self.generation)
    }

    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Page-wide blur and dark-mode switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualPrefs {
    blur_enabled: bool,
    dark_mode: bool,
    notify_dark_mode: bool,
}

impl Default for VisualPrefs {
    fn default() -> Self {
        Self::new(false)
    }
}

impl VisualPrefs {
    pub fn new(notify_dark_mode: bool) -> Self {
        Self {
            blur_enabled: true,
            dark_mode: false,
            notify_dark_mode,
        }
    }

    pub fn blur_enabled(&self) -> bool {
        self.blur_enabled
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Backdrop filter for glass surfaces.
    pub fn surface_blur(&self) -> &'static str {
        if self.blur_enabled {
            "blur(20px)"
        } else {
            "blur(0px)"
        }
    }

    pub fn toggle_blur(&mut self, notifier: &mut impl Notifier) -> bool {
        self.blur_enabled = !self.blur_enabled;
        let state = if self.blur_enabled { "activé" } else { "désactivé" };
        notifier.notify(format!("Blur {state}"), NotificationLevel::Info);
        self.blur_enabled
    }

    pub fn toggle_dark_mode(&mut self, document: &mut impl ThemeDocument, notifier: &mut impl Notifier) -> Result<bool> {
        let next = !self.dark_mode;
        if next {
            document.add_body_class(DARK_MODE_CLASS)?;
        } else {
            document.remove_body_class(DARK_MODE_CLASS)?;
        }
        self.dark_mode = next;
        if self.notify_dark_mode {
            let mode = if next { "sombre" } else { "clair" };
            notifier.notify(format!("Mode {mode} activé"), NotificationLevel::Info);
        }
        Ok(next)
    }
}
