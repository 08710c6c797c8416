//! Network layer.
//!
//! Binds the TCP socket the HTTP server accepts on. Bind errors are fatal
//! and carry the address that failed.

pub mod listener;

pub use listener::{bind, ListenerError};
