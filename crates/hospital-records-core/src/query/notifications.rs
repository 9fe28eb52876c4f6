//! Per-user notification feed.

use crate::models::AppNotification;

/// Notifications addressed to `user_id`, newest first.
pub fn notifications_for_user<'a>(
    notifications: &'a [AppNotification],
    user_id: &str,
) -> Vec<&'a AppNotification> {
    let mut mine: Vec<&AppNotification> =
        notifications.iter().filter(|n| n.user_id == user_id).collect();
    mine.sort_by(|a, b| b.date.cmp(&a.date));
    mine
}

pub fn unread_count(notifications: &[&AppNotification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
