use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use std::convert::Infallible;

pub const USER_HEADER: &str = "x-user-name";
pub const ROLE_HEADER: &str = "x-user-role";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Who is performing a write, as recorded in the audit log.
///
/// Taken from request headers and never verified: roles are a client-side
/// tag, not an authorization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    pub role: String,
    pub ip_address: String,
}

impl Actor {
    pub fn system() -> Self {
        Self {
            name: "system".into(),
            role: "system".into(),
            ip_address: String::new(),
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let fallback = Self::system();
        Self {
            name: read(USER_HEADER).unwrap_or(fallback.name),
            role: read(ROLE_HEADER).unwrap_or(fallback.role),
            ip_address: read(FORWARDED_FOR_HEADER)
                .and_then(|v| v.split(',').next().map(|s| s.trim().to_string()))
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Actor::from_headers(&parts.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_defaults_to_system() {
        assert_eq!(Actor::from_headers(&HeaderMap::new()), Actor::system());
    }

    #[test]
    fn test_reads_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("Kamil Alhassan"));
        headers.insert(ROLE_HEADER, HeaderValue::from_static("hod"));
        headers.insert(
            FORWARDED_FOR_HEADER,
            HeaderValue::from_static("192.168.1.10, 10.0.0.1"),
        );
        let actor = Actor::from_headers(&headers);
        assert_eq!(actor.name, "Kamil Alhassan");
        assert_eq!(actor.role, "hod");
        assert_eq!(actor.ip_address, "192.168.1.10");
    }

    #[test]
    fn test_blank_header_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("   "));
        assert_eq!(Actor::from_headers(&headers).name, "system");
    }
}
