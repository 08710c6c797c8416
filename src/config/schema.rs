//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML. Every field
//! has a default, so an empty file describes the stock fixture server.

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::validation::ValidationError;
use crate::routing::RouteEntry;

/// Root configuration for the fixture server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Extra routes layered over the built-in fixtures.
    pub routes: Vec<RouteConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address as `host:port`. Host names are resolved at bind time.
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "localhost:8001".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9001".to_string(),
        }
    }
}

/// A canned response declared in the config file.
///
/// ```toml
/// [[routes]]
/// method = "GET"
/// path = "/ping"
/// headers = [["Content-Type", "text/plain"]]
/// body = "pong"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging.
    #[serde(default)]
    pub name: Option<String>,

    /// `GET` or `POST`.
    pub method: String,

    /// Exact request path, starting with `/`.
    pub path: String,

    #[serde(default = "default_status")]
    pub status: u16,

    /// Response headers in emission order.
    #[serde(default)]
    pub headers: Vec<(String, String)>,

    #[serde(default)]
    pub body: String,
}

fn default_status() -> u16 {
    200
}

impl RouteConfig {
    /// Parse the method, accepting only what the table dispatches on.
    pub fn parsed_method(&self, index: usize) -> Result<Method, ValidationError> {
        match self.method.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ValidationError::RouteMethod {
                index,
                method: self.method.clone(),
            }),
        }
    }

    pub fn parsed_status(&self, index: usize) -> Result<StatusCode, ValidationError> {
        StatusCode::from_u16(self.status).map_err(|_| ValidationError::RouteStatus {
            index,
            status: self.status,
        })
    }

    pub fn parsed_headers(
        &self,
        index: usize,
    ) -> Result<Vec<(HeaderName, HeaderValue)>, ValidationError> {
        self.headers
            .iter()
            .map(|(name, value)| -> Result<(HeaderName, HeaderValue), ValidationError> {
                let invalid = || ValidationError::RouteHeader {
                    index,
                    name: name.clone(),
                };
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                Ok((name, value))
            })
            .collect()
    }

    /// Convert into a table entry. `index` is the position in `routes` and
    /// only appears in errors.
    pub fn to_entry(&self, index: usize) -> Result<RouteEntry, ValidationError> {
        if !self.path.starts_with('/') {
            return Err(ValidationError::RoutePath {
                index,
                path: self.path.clone(),
            });
        }

        let mut entry = RouteEntry::new(
            self.parsed_method(index)?,
            self.path.clone(),
            self.parsed_status(index)?,
        );
        for (name, value) in self.parsed_headers(index)? {
            entry = entry.header(name, value);
        }
        Ok(entry.body(self.body.clone()))
    }

    /// Name for logs, falling back to `METHOD path`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.method.to_ascii_uppercase(), self.path),
        }
    }
}
