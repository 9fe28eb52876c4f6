//! Notification dispatch.

use super::{HospitalStore, StoreError, StoreResult};
use crate::ids;
use crate::models::{AppNotification, NotificationKind};

impl HospitalStore {
    /// Prepend an unread notification for `user_id` and persist it.
    pub(crate) fn dispatch_notification(
        &mut self,
        user_id: &str,
        title: &str,
        message: String,
        kind: NotificationKind,
    ) -> StoreResult<AppNotification> {
        let now = self.clock.now();
        let notification = AppNotification {
            id: ids::notification_id(now),
            user_id: user_id.to_string(),
            title: title.to_string(),
            message,
            date: now,
            read: false,
            kind,
        };

        let mut notifications = Vec::with_capacity(self.notifications.len() + 1);
        notifications.push(notification.clone());
        notifications.extend(self.notifications.iter().cloned());
        self.commit_notifications(notifications)?;

        tracing::debug!(user_id, kind = kind.as_str(), "notification dispatched");
        Ok(notification)
    }

    /// Flip the read flag of exactly one notification.
    pub fn mark_notification_as_read(&mut self, id: &str) -> StoreResult<()> {
        let mut notifications = self.notifications.clone();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::not_found("notification", id))?;
        notification.read = true;

        self.commit_notifications(notifications)
    }
}
