use chrono::{DateTime, Utc};
use contracts::domain::a007_notification::{build_feed, Notification, NotificationFeed, NotificationId};

use crate::shared::data::DataGateway;
use crate::shared::error::{ServiceError, ServiceResult};

/// Stores notifications raised by a write. Like audit entries, a failed
/// write is logged and does not fail the operation that raised it.
pub async fn publish(gateway: &dyn DataGateway, notifications: Vec<Notification>) {
    for notification in notifications {
        tracing::debug!(
            kind = notification.kind.as_str(),
            department = %notification.department,
            "{}: {}",
            notification.title,
            notification.message
        );
        if let Err(e) = gateway.insert_notification(&notification).await {
            tracing::warn!("Failed to store notification: {:#}", e);
        }
    }
}

/// Stored notifications plus deadline reminders for open KPIs.
pub async fn feed(gateway: &dyn DataGateway, now: DateTime<Utc>) -> ServiceResult<NotificationFeed> {
    let notifications = gateway.fetch_notifications().await?;
    let kpis = gateway.fetch_kpis().await?;
    Ok(build_feed(&notifications, &kpis, now))
}

pub async fn mark_read(gateway: &dyn DataGateway, id: NotificationId) -> ServiceResult<()> {
    if gateway.mark_notification_read(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("Notification {}", id)))
    }
}

pub async fn mark_all_read(gateway: &dyn DataGateway) -> ServiceResult<usize> {
    let changed = gateway.mark_all_notifications_read().await?;
    tracing::info!("Marked {} notifications as read", changed);
    Ok(changed)
}
