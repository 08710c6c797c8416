//! fixture-server
//!
//! A mock HTTP server answering a progressive-enhancement demo page with
//! canned HTML fragments.
//!
//! ```text
//!     Browser (demo page)
//!     ──────────────────────▶ net::bind ──▶ http::FixtureServer ──▶ routing::RouteTable
//!                                                                     │
//!     ◀──────────────────────────── canned response / preflight / 404 ◀┘
//! ```
//!
//! Routes: `OPTIONS *`, `GET /alert`, `GET /card`, `GET /modal`,
//! `GET /tab-content`, `GET /toast-trigger`, `POST /save`, plus any
//! `[[routes]]` from the config file.

use std::path::PathBuf;

use clap::Parser;

use fixture_server::config::{load_config, ServerConfig};
use fixture_server::http::FixtureServer;
use fixture_server::lifecycle::{signals, Shutdown};
use fixture_server::net;
use fixture_server::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "fixture-server", version)]
#[command(about = "Mock HTTP server serving canned HTML fragments", long_about = None)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address (host:port).
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        config_file = ?cli.config,
        "Configuration loaded"
    );

    let server = FixtureServer::new(config)?;
    let observability = server.config().observability.clone();
    if observability.metrics_enabled {
        metrics::init_metrics(observability.metrics_address.parse()?)?;
    }

    let listener = net::bind(&server.config().listener).await?;
    tracing::info!(
        "Mock server running on http://{}",
        server.config().listener.bind_address
    );

    let shutdown = Shutdown::new();
    let mut serving = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut serving => result??,
        _ = signals::wait_for_signal() => {
            shutdown.trigger();
            serving.await??;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
