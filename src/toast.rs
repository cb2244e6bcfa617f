//! # Toast Notifications
//!
//! Transient, auto-dismissing messages. Only `TOAST_LIMIT` toasts are on
//! screen at once; a new toast pushes out the oldest. Expiry is driven by the
//! app's tick subscription, which only runs while the queue is non-empty.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            duration,
        }
    }

    /// Shows a toast and returns its id
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push_back(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
            expires_at: now + self.duration,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drops every toast whose deadline has passed
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_oldest() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.push("First", "", ToastVariant::Default, now);
        let second = queue.push("Second", "", ToastVariant::Destructive, now);

        assert_eq!(queue.iter().count(), TOAST_LIMIT);
        assert_eq!(queue.latest().map(|t| t.id), Some(second));
    }

    #[test]
    fn test_expire_after_duration() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        queue.push("Contact Added", "Ada has been added", ToastVariant::Default, now);

        queue.expire(now + Duration::from_secs(4));
        assert!(!queue.is_empty());

        queue.expire(now + Duration::from_secs(5));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_by_id() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(5));
        let id = queue.push("Missing Information", "", ToastVariant::Destructive, now);

        queue.dismiss(id + 1);
        assert!(!queue.is_empty());
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
