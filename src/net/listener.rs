//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve and bind the configured `host:port`
//! - Report bind failures with the address that failed
//!
//! # Design Decisions
//! - No retry: a taken port ends the process
//! - Host names (e.g. `localhost`) are resolved by Tokio at bind time

use tokio::net::TcpListener;
use thiserror::Error;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let listener = TcpListener::bind(config.bind_address.as_str())
        .await
        .map_err(|source| ListenerError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
