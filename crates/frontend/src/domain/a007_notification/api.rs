use contracts::domain::a007_notification::{NotificationFeed, NotificationId};
use serde::Deserialize;

use crate::shared::api_utils::{get_json, post_empty, post_no_content};

const API_BASE: &str = "/api/notification";

#[derive(Debug, Clone, Deserialize)]
struct UpdatedResponse {
    updated: usize,
}

pub async fn fetch_feed() -> Result<NotificationFeed, String> {
    get_json(API_BASE).await
}

pub async fn mark_read(id: NotificationId) -> Result<(), String> {
    post_no_content(&format!("{}/{}/read", API_BASE, id)).await
}

/// Returns how many notifications changed.
pub async fn mark_all_read() -> Result<usize, String> {
    let response: UpdatedResponse = post_empty(&format!("{}/read-all", API_BASE)).await?;
    Ok(response.updated)
}
