use contracts::domain::a005_user::{User, UserDto, UserId};

use crate::shared::api_utils::{get_json, post_json, IdResponse};

const API_BASE: &str = "/api/user";

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json(API_BASE).await
}

pub async fn create(dto: &UserDto) -> Result<UserId, String> {
    let response: IdResponse = post_json(API_BASE, dto).await?;
    Ok(UserId(response.id))
}
