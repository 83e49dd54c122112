//! Toast notifications.

use std::time::{Duration, Instant};

pub const TEXT_ADDED_MESSAGE: &str = "Text element added successfully!";
pub const DESIGN_SAVED_MESSAGE: &str = "Design saved successfully!";

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn show(&mut self, message: &str);
}

/// A message on screen until `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Shows one toast at a time and dismisses it after a fixed interval.
///
/// A new toast replaces the current one and restarts the timer.
#[derive(Debug, Clone)]
pub struct ToastCenter {
    duration: Duration,
    current: Option<Toast>,
    shown_count: usize,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl ToastCenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            shown_count: 0,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn show_at(&mut self, message: &str, now: Instant) {
        tracing::info!("toast: {}", message);
        self.current = Some(Toast {
            message: message.to_string(),
            shown_at: now,
            expires_at: now + self.duration,
        });
        self.shown_count += 1;
    }

    /// The visible toast at `now`, dismissing it if its time is up.
    pub fn current_at(&mut self, now: Instant) -> Option<&Toast> {
        if self
            .current
            .as_ref()
            .is_some_and(|toast| toast.is_expired(now))
        {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn current(&mut self) -> Option<&Toast> {
        self.current_at(Instant::now())
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Total toasts shown so far.
    pub fn shown_count(&self) -> usize {
        self.shown_count
    }
}

impl Notifier for ToastCenter {
    fn show(&mut self, message: &str) {
        self.show_at(message, Instant::now());
    }
}
