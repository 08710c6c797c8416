//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → CLI overrides applied in main, validated again by FixtureServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the server runs without any file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::ServerConfig;
pub use validation::{validate_config, ValidationError};
