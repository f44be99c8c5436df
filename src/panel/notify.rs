//! User-visible notices.
//!
//! The workflows report outcomes through the `Notifier` seam rather than
//! writing to any UI directly. The default implementation logs through
//! tracing; tests substitute a recording notifier.

use serde::Serialize;
use tracing::{error, info};

/// Notice severity, mirroring the toast variants of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Success,
    Destructive,
}

/// A user-visible notification.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub title: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoticeKind::Destructive,
        }
    }
}

/// Sink for user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Destructive => error!(title = %notice.title, "notice"),
            _ => info!(title = %notice.title, kind = ?notice.kind, "notice"),
        }
    }
}
