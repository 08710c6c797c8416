//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → routing::RouteTable::dispatch (method + exact path)
//!     → response.rs (preflight / 404) or the matched RouteEntry
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{AppState, FixtureServer, ServerError};
