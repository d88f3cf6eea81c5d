//! API utilities for frontend-backend communication
//!
//! Every request carries the selected role so the backend can attribute
//! writes in the audit trail.

use contracts::system::navigation::Role;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::role::storage;

const USER_HEADER: &str = "x-user-name";
const ROLE_HEADER: &str = "x-user-role";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends `query` as a query string, skipping it when every field is empty.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

fn with_actor(builder: RequestBuilder) -> RequestBuilder {
    as_role(builder, storage::get_role())
}

fn as_role(builder: RequestBuilder, tag: Option<String>) -> RequestBuilder {
    match tag {
        Some(tag) => {
            let name = Role::parse(&tag)
                .map(|r| r.label().to_string())
                .unwrap_or_else(|| tag.clone());
            builder.header(USER_HEADER, &name).header(ROLE_HEADER, &tag)
        }
        None => builder,
    }
}

fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let reason = match response.status() {
        400 => "invalid data",
        404 => "not found",
        409 => "conflicting state",
        _ => "server error",
    };
    Err(format!("HTTP {}: {}", response.status(), reason))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_actor(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_text(path: &str) -> Result<String, String> {
    let response = with_actor(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response)?
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = with_actor(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST on behalf of an explicit role tag instead of the stored one. Used
/// while the stored tag is being replaced or cleared.
pub async fn post_json_as<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    role_tag: Option<String>,
) -> Result<T, String> {
    let response = as_role(Request::post(&api_url(path)), role_tag)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST without a body, e.g. state transitions.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_actor(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST without a body whose reply carries nothing to read.
pub async fn post_no_content(path: &str) -> Result<(), String> {
    let response = with_actor(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response).map(|_| ())
}

pub async fn post_text<T: DeserializeOwned>(path: &str, body: String, content_type: &str) -> Result<T, String> {
    let response = with_actor(Request::post(&api_url(path)))
        .header("Content-Type", content_type)
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response)?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_actor(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check(response).map(|_| ())
}

/// Server reply to create/update calls.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct IdResponse {
    pub id: i64,
}
