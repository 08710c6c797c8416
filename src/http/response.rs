//! Fixed responses that do not come from the route table.
//!
//! # Responsibilities
//! - Answer CORS preflights (`OPTIONS` on any path)
//! - Produce the bare `404` for unmatched requests
//!
//! # Design Decisions
//! - `404` carries no body and no extra headers
//! - Preflight allows every origin and every request header

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

/// Value of `Access-Control-Allow-Origin` on every successful response.
pub const ANY_ORIGIN: &str = "*";

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// `200` with the three CORS preflight headers and an empty body.
pub fn preflight() -> Response {
    let mut response = Response::new(Body::empty());
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ANY_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );
    response
}

/// `404` with an empty body.
pub fn not_found() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}
