//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the route table from built-ins plus config routes
//! - Create the Axum router with a single dispatching fallback
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a bound listener until shutdown is triggered

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{validate_config, ConfigError, ServerConfig};
use crate::observability::metrics;
use crate::routing::RouteTable;

/// Error type for a running server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server answering from a static route table.
pub struct FixtureServer {
    router: Router,
    config: ServerConfig,
    routes: Arc<RouteTable>,
}

impl FixtureServer {
    /// Validate the config and build the route table and router.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let mut table = RouteTable::builtin();
        for (index, route) in config.routes.iter().enumerate() {
            let entry = route
                .to_entry(index)
                .map_err(|e| ConfigError::Validation(vec![e]))?;
            let replaced = table.lookup(entry.method(), entry.path()).is_some();
            tracing::debug!(
                route = %route.display_name(),
                replaced,
                "Configured route loaded"
            );
            table.insert(entry);
        }

        let routes = Arc::new(table);
        let state = AppState {
            routes: routes.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            routes,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// The service, for driving in-process without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight
    /// requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answers every request from the route table.
async fn dispatch_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let start = Instant::now();
    // The request target is matched whole, so a query string misses.
    let path = uri
        .path_and_query()
        .map(|target| target.as_str())
        .unwrap_or_else(|| uri.path());

    let dispatch = state.routes.dispatch(&method, path);
    let status = dispatch.status();

    tracing::debug!(
        method = %method,
        path = %path,
        route = dispatch.route_label(),
        status = status.as_u16(),
        "Request dispatched"
    );
    metrics::record_request(method.as_str(), status.as_u16(), dispatch.route_label(), start);

    dispatch.into_response()
}
