//! In-app notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity used by the notification view to pick an icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// A notification addressed to a single user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    pub id: String,
    /// Addressee (staff user id or patient id)
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}
