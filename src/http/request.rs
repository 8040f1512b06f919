//! Request context extraction.
//!
//! # Responsibilities
//! - Snapshot the routing-relevant parts of an incoming request (method,
//!   path, scheme, host)
//! - Carry the request ID through dispatch for log correlation
//!
//! # Design Decisions
//! - Validators receive this snapshot, not the raw framework request, so
//!   the matching layer stays independent of the HTTP types' body generics
//! - An incoming `x-request-id` is preserved; otherwise a UUID v4 is minted

use axum::body::Body;
use axum::http::{header, Method, Request};
use uuid::Uuid;

/// Header the request ID travels in.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The routing-relevant snapshot of one incoming request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub scheme: String,
    pub host: String,
    pub request_id: String,
}

impl RequestContext {
    /// Extract the snapshot from a framework request.
    pub fn from_request(request: &Request<Body>) -> Self {
        let uri = request.uri();
        let host = request
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .or_else(|| uri.host().map(str::to_string))
            .unwrap_or_default();
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            method: request.method().clone(),
            path: uri.path().to_string(),
            scheme: uri.scheme_str().unwrap_or("http").to_string(),
            host,
            request_id,
        }
    }

    /// A plain GET snapshot, mostly useful when driving dispatch directly.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            scheme: "http".to_string(),
            host: String::new(),
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_request() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("https://example.com/about/team?x=1")
            .header("Host", "example.com")
            .header(X_REQUEST_ID, "abc-123")
            .body(Body::empty())
            .unwrap();
        let cx = RequestContext::from_request(&request);
        assert_eq!(cx.method, Method::GET);
        assert_eq!(cx.path, "/about/team");
        assert_eq!(cx.scheme, "https");
        assert_eq!(cx.host, "example.com");
        assert_eq!(cx.request_id, "abc-123");
    }

    #[test]
    fn test_request_id_is_minted_when_absent() {
        let request = Request::builder()
            .uri("/x")
            .body(Body::empty())
            .unwrap();
        let cx = RequestContext::from_request(&request);
        assert!(!cx.request_id.is_empty());
        assert_eq!(cx.scheme, "http");
    }
}
