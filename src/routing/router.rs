//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the fixture routes
//! - Look up the entry for a method and exact path
//! - Answer `OPTIONS` preflights for every path
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - Exact, case-sensitive match on the request target; `/card?x=1` is not `/card`
//! - Explicit `NotFound` rather than a silent default

use std::collections::HashMap;

use axum::{
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::response;
use crate::routing::entry::RouteEntry;
use crate::routing::fixtures;

/// Static dispatch table mapping `(method, path)` to a canned response.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: HashMap<Method, HashMap<String, usize>>,
}

/// Outcome of dispatching a request against the table.
#[derive(Debug)]
pub enum Dispatch<'a> {
    /// `OPTIONS` on any path.
    Preflight,
    Matched(&'a RouteEntry),
    NotFound,
}

impl RouteTable {
    /// An empty table. Every request except `OPTIONS` yields `404`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical fixture routes used by the demo page.
    pub fn builtin() -> Self {
        let mut table = Self::new();

        table.insert(RouteEntry::html(Method::GET, "/alert", fixtures::ALERT_HTML));
        table.insert(RouteEntry::html(Method::GET, "/card", fixtures::CARD_HTML));
        table.insert(RouteEntry::html(Method::GET, "/modal", fixtures::MODAL_HTML));
        table.insert(RouteEntry::html(
            Method::GET,
            "/tab-content",
            fixtures::TAB_CONTENT_HTML,
        ));
        table.insert(
            RouteEntry::html(Method::GET, "/toast-trigger", fixtures::TOAST_HTML)
                .header(
                    axum::http::header::ACCESS_CONTROL_EXPOSE_HEADERS,
                    HeaderValue::from_static(fixtures::TOAST_EXPOSED_HEADERS),
                )
                .header(
                    HeaderName::from_static("x-toast-message"),
                    HeaderValue::from_static(fixtures::TOAST_MESSAGE),
                )
                .header(
                    HeaderName::from_static("x-toast-type"),
                    HeaderValue::from_static(fixtures::TOAST_TYPE),
                )
                .header(
                    HeaderName::from_static("x-toast-duration"),
                    HeaderValue::from_static(fixtures::TOAST_DURATION_MS),
                ),
        );
        table.insert(RouteEntry::html(Method::POST, "/save", fixtures::SAVE_TEXT));

        table
    }

    /// Add an entry. An existing entry with the same method and path is
    /// replaced in place, keeping its listing position.
    pub fn insert(&mut self, entry: RouteEntry) {
        let paths = self.index.entry(entry.method().clone()).or_default();
        match paths.get(entry.path()).copied() {
            Some(slot) => self.entries[slot] = entry,
            None => {
                paths.insert(entry.path().to_string(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Exact lookup on method and path.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<&RouteEntry> {
        let slot = *self.index.get(method)?.get(path)?;
        self.entries.get(slot)
    }

    /// Decide how to answer a request.
    pub fn dispatch(&self, method: &Method, path: &str) -> Dispatch<'_> {
        if *method == Method::OPTIONS {
            return Dispatch::Preflight;
        }
        match self.lookup(method, path) {
            Some(entry) => Dispatch::Matched(entry),
            None => Dispatch::NotFound,
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dispatch<'_> {
    pub fn status(&self) -> StatusCode {
        match self {
            Dispatch::Preflight => StatusCode::OK,
            Dispatch::Matched(entry) => entry.status(),
            Dispatch::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Label used in logs and metrics.
    pub fn route_label(&self) -> &str {
        match self {
            Dispatch::Preflight => "preflight",
            Dispatch::Matched(entry) => entry.path(),
            Dispatch::NotFound => "none",
        }
    }
}

impl IntoResponse for Dispatch<'_> {
    fn into_response(self) -> Response {
        match self {
            Dispatch::Preflight => response::preflight(),
            Dispatch::Matched(entry) => entry.to_response(),
            Dispatch::NotFound => response::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_routes() {
        let table = RouteTable::builtin();
        let routes: Vec<_> = table
            .entries()
            .map(|e| format!("{} {}", e.method(), e.path()))
            .collect();
        assert_eq!(
            routes,
            vec![
                "GET /alert",
                "GET /card",
                "GET /modal",
                "GET /tab-content",
                "GET /toast-trigger",
                "POST /save",
            ]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = RouteTable::builtin();
        assert!(table.lookup(&Method::GET, "/alert").is_some());
        assert!(table.lookup(&Method::GET, "/alert/").is_none());
        assert!(table.lookup(&Method::GET, "/ALERT").is_none());
        assert!(table.lookup(&Method::GET, "/aler").is_none());
        // Method is part of the key.
        assert!(table.lookup(&Method::POST, "/alert").is_none());
        assert!(table.lookup(&Method::GET, "/save").is_none());
    }

    #[test]
    fn test_options_is_preflight_everywhere() {
        let table = RouteTable::builtin();
        for path in ["/alert", "/save", "/does-not-exist", "/"] {
            assert!(matches!(
                table.dispatch(&Method::OPTIONS, path),
                Dispatch::Preflight
            ));
        }
    }

    #[test]
    fn test_unknown_method_not_found() {
        let table = RouteTable::builtin();
        let dispatch = table.dispatch(&Method::DELETE, "/alert");
        assert!(matches!(dispatch, Dispatch::NotFound));
        assert_eq!(dispatch.status(), StatusCode::NOT_FOUND);
        assert_eq!(dispatch.route_label(), "none");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = RouteTable::builtin();
        let before = table.len();
        table.insert(
            RouteEntry::new(Method::GET, "/card", StatusCode::ACCEPTED).body("replaced"),
        );

        assert_eq!(table.len(), before);
        let card = table.lookup(&Method::GET, "/card").unwrap();
        assert_eq!(card.status(), StatusCode::ACCEPTED);
        assert_eq!(card.body_bytes().as_ref(), b"replaced");
        assert_eq!(table.entries().nth(1).unwrap().path(), "/card");
    }

    #[test]
    fn test_toast_headers() {
        let table = RouteTable::builtin();
        let toast = table.lookup(&Method::GET, "/toast-trigger").unwrap();
        let find = |name: &str| {
            toast
                .headers()
                .iter()
                .find(|(n, _)| n.as_str() == name)
                .map(|(_, v)| v.to_str().unwrap().to_string())
        };
        assert_eq!(
            find("access-control-expose-headers").as_deref(),
            Some("X-Toast-Message, X-Toast-Type, X-Toast-Duration")
        );
        assert_eq!(
            find("x-toast-message").as_deref(),
            Some("Operation completed successfully!")
        );
        assert_eq!(find("x-toast-type").as_deref(), Some("success"));
        assert_eq!(find("x-toast-duration").as_deref(), Some("5000"));

        let names: Vec<_> = toast.headers().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "content-type",
                "access-control-allow-origin",
                "access-control-expose-headers",
                "x-toast-message",
                "x-toast-type",
                "x-toast-duration",
            ]
        );
    }
}
