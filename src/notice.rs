//! Transient user-facing messages ("toasts").
//!
//! Every notice expires a fixed time after it was posted. Expired notices are pruned
//! whenever the board is read or posted to. Time comes from [`tokio::time::Instant`],
//! so tests can pause and advance the clock.

use std::fmt::Display;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Danger => "danger",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            notices: Vec::new(),
        }
    }

    pub fn post(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        debug!(%level, %message, "Notice");
        self.prune();
        self.notices.push(Notice {
            level,
            message,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Notices that have not expired yet, oldest first.
    pub fn active(&mut self) -> &[Notice] {
        self.prune();
        &self.notices
    }

    fn prune(&mut self) {
        let now = Instant::now();
        self.notices.retain(|notice| notice.expires_at > now);
    }
}
