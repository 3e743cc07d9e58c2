// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.
//!
//! At most [`MAX_VISIBLE`] toasts are shown; the rest wait in a queue and are
//! promoted as visible ones are dismissed or expire.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Error => tracing::debug!(key = notification.message_key(), "error toast"),
            Severity::Warning => tracing::debug!(key = notification.message_key(), "warning toast"),
            Severity::Success | Severity::Info => {}
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops visible notifications that expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Whether any notification with `key` is visible or queued.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.visible
            .iter()
            .chain(self.queue.iter())
            .any(|n| n.message_key() == key)
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.visible().all(|n| n.message_key() != "queued"));
        assert!(manager.contains_key("queued"));
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::error(format!("n-{i}")));
        }
        assert!(manager.visible().all(|n| n.message_key() != "n-3"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.visible().any(|n| n.message_key() == "n-3"));
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn tick_expires_success_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::success("done"));
        manager.push(Notification::error("error-network"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(10)));

        assert_eq!(manager.visible().count(), 1);
        assert!(manager.contains_key("error-network"));
        assert!(!manager.contains_key("done"));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::error("error-precondition");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
