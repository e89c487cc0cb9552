// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity, localized message key and creation time.

use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::widget::svg;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Form sent, link copied (3s).
    #[default]
    Success,
    /// Neutral feedback (3s).
    Info,
    /// Recoverable problem such as a rejected settings file (5s).
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn icon(self) -> svg::Handle {
        match self {
            Severity::Success => icons::check(),
            Severity::Info => icons::info(),
            Severity::Warning | Severity::Error => icons::warning(),
        }
    }

    /// Time on screen, `None` when the toast must be dismissed by hand.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// `message_key` is resolved through i18n when the toast is drawn.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::created_at(severity, message_key, Instant::now())
    }

    pub fn created_at(severity: Severity, message_key: impl Into<String>, at: Instant) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: at,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast outlived its severity's lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.created_at) >= lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn lifetimes_follow_severity() {
        assert_eq!(Severity::Success.lifetime(), Some(Duration::from_secs(3)));
        assert_eq!(Severity::Info.lifetime(), Some(Duration::from_secs(3)));
        assert_eq!(Severity::Warning.lifetime(), Some(Duration::from_secs(5)));
        assert_eq!(Severity::Error.lifetime(), None);
    }

    #[test]
    fn expiry_uses_supplied_clock() {
        let start = Instant::now();
        let toast = Notification::created_at(Severity::Success, "k", start);
        assert!(!toast.is_expired(start + Duration::from_millis(2999)));
        assert!(toast.is_expired(start + Duration::from_secs(3)));

        let error = Notification::created_at(Severity::Error, "k", start);
        assert!(!error.is_expired(start + Duration::from_secs(3600)));
    }

    #[test]
    fn arguments_are_kept_in_order() {
        let toast = Notification::info("notification-link-copied").with_arg("link", "https://x");
        assert_eq!(toast.message_args(), &[("link".to_string(), "https://x".to_string())]);
    }
}
