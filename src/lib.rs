//! Mock HTTP server serving canned HTML fragments to front-end demos.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::FixtureServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteEntry, RouteTable};
