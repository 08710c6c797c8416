//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//! - Check every declared route converts to a table entry
//! - Detect duplicate routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a host:port pair")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("routes[{index}]: method `{method}` is not GET or POST")]
    RouteMethod { index: usize, method: String },

    #[error("routes[{index}]: path `{path}` must start with '/'")]
    RoutePath { index: usize, path: String },

    #[error("routes[{index}]: {status} is not a valid HTTP status")]
    RouteStatus { index: usize, status: u16 },

    #[error("routes[{index}]: header `{name}` has an invalid name or value")]
    RouteHeader { index: usize, name: String },

    #[error("routes[{index}]: {method} {path} is declared more than once")]
    DuplicateRoute {
        index: usize,
        method: String,
        path: String,
    },
}

/// Check a config, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_host_port(&config.listener.bind_address) {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if let Err(e) = route.parsed_method(index) {
            errors.push(e);
        }
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RoutePath {
                index,
                path: route.path.clone(),
            });
        }
        if let Err(e) = route.parsed_status(index) {
            errors.push(e);
        }
        if let Err(e) = route.parsed_headers(index) {
            errors.push(e);
        }

        let method = route.method.to_ascii_uppercase();
        if !seen.insert((method.clone(), route.path.clone())) {
            errors.push(ValidationError::DuplicateRoute {
                index,
                method,
                path: route.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_host_port(address: &str) -> bool {
    match address.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}
