use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::system::actor::Actor;

/// 1234567 -> "1.234.567"
fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Colour of the time column: cyan for 2xx, yellow otherwise.
fn status_colour(success: bool) -> &'static str {
    if success {
        "36"
    } else {
        "33"
    }
}

/// One console line per request with time, duration, body size, status,
/// acting role, method and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let role = Actor::from_headers(req.headers()).role;

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffered so the size column is the real payload size
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (group_digits(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("Failed to buffer response for {} {}: {}", method, path, e);
            ("error".to_string(), Body::default())
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} | {:<8} {:>6} {}",
        status_colour(parts.status.is_success()),
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        role,
        method,
        path
    );

    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1.000");
        assert_eq!(group_digits(123456), "123.456");
        assert_eq!(group_digits(1234567), "1.234.567");
    }

    #[test]
    fn test_status_colour() {
        assert_eq!(status_colour(true), "36");
        assert_eq!(status_colour(false), "33");
    }
}
