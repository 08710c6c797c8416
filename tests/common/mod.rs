//! Shared utilities for integration tests.

use std::net::SocketAddr;

use fixture_server::config::ServerConfig;
use fixture_server::http::FixtureServer;
use fixture_server::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A fixture server running on an ephemeral port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a fixture server with `config`, ignoring its bind address.
pub async fn start_fixture_server(config: ServerConfig) -> RunningServer {
    let server = FixtureServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningServer { addr, shutdown }
}

/// Client that never pools or goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
