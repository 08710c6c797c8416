//! A single canned response keyed by method and exact path.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::Response,
};

use crate::http::response::ANY_ORIGIN;

/// Immutable description of one fixture response.
///
/// Headers are kept as an ordered list so they go out on the wire in the
/// order they were declared.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    method: Method,
    path: String,
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Bytes,
}

impl RouteEntry {
    /// Create an entry with no headers and an empty body.
    pub fn new(method: Method, path: impl Into<String>, status: StatusCode) -> Self {
        Self {
            method,
            path: path.into(),
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// `200` HTML fragment readable from any origin.
    pub fn html(method: Method, path: impl Into<String>, body: &'static str) -> Self {
        Self::new(method, path, StatusCode::OK)
            .header(header::CONTENT_TYPE, HeaderValue::from_static("text/html"))
            .header(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static(ANY_ORIGIN),
            )
            .body(Bytes::from_static(body.as_bytes()))
    }

    /// Append a header. Repeated names are all emitted.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    pub fn body_bytes(&self) -> &Bytes {
        &self.body
    }

    /// Build the HTTP response. `Bytes` clones are reference-counted, so
    /// this never copies the body.
    pub fn to_response(&self) -> Response {
        let mut response = Response::new(Body::from(self.body.clone()));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            headers.append(name.clone(), value.clone());
        }
        response
    }
}
