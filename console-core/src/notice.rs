//! Notification queue
//!
//! The console's toast equivalent: messages carry a severity and an
//! auto-dismiss deadline. Expired notices are pruned whenever the active
//! set is read.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A single user-visible notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Shared queue of notifications with bounded display duration
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    inner: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeQueue {
    /// How long a notice stays visible before auto-dismissing
    const DISPLAY_SECONDS: i64 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notice, returning its id
    pub fn push(&self, severity: Severity, message: impl Into<String>) -> Uuid {
        let notice = Notice {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            expires_at: Utc::now() + Duration::seconds(Self::DISPLAY_SECONDS),
        };
        let id = notice.id;
        self.inner.lock().expect("notice queue poisoned").push(notice);
        id
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(Severity::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(Severity::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.push(Severity::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(Severity::Error, message)
    }

    /// Prune expired notices and return the ones still visible at `now`
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notice> {
        let mut queue = self.inner.lock().expect("notice queue poisoned");
        queue.retain(|n| n.expires_at > now);
        queue.clone()
    }

    /// Dismiss a notice early
    pub fn dismiss(&self, id: Uuid) {
        self.inner
            .lock()
            .expect("notice queue poisoned")
            .retain(|n| n.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_expire_after_display_window() {
        let queue = NoticeQueue::new();
        queue.error("boom");

        let now = Utc::now();
        assert_eq!(queue.active(now).len(), 1);

        let later = now + Duration::seconds(NoticeQueue::DISPLAY_SECONDS + 1);
        assert!(queue.active(later).is_empty());
        // pruned for good, not just hidden
        assert!(queue.active(now).is_empty());
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let queue = NoticeQueue::new();
        let first = queue.info("one");
        queue.info("two");

        queue.dismiss(first);
        let active = queue.active(Utc::now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "two");
    }
}
