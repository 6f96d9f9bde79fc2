//! Request ID middleware for request correlation.
//!
//! Every request gets an ID: reused from the `x-request-id` header when an
//! upstream proxy already assigned one, freshly generated otherwise. The ID
//! ends up in the request's tracing span, in the Sentry scope, and in the
//! response headers.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Reuse the upstream request ID or mint a UUID v4.
fn incoming_or_new(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = incoming_or_new(request.headers());

    // Record in current span for structured logging
    Span::current().record("request_id", &request_id);

    // Set in Sentry scope for error correlation
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    // Echo in response headers so clients can reference the request ID
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_header_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(incoming_or_new(&headers), "abc-123");
    }

    #[test]
    fn test_missing_header_generates_uuid() {
        let id = incoming_or_new(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
