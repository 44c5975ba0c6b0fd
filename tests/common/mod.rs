//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bid_server::bidding::BidService;
use bid_server::config::ServerConfig;
use bid_server::http::HttpServer;
use bid_server::lifecycle::Shutdown;

/// Spawn the real server on an ephemeral port and return its address
/// together with the shutdown handle.
pub async fn spawn_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    spawn(HttpServer::new(config)).await
}

/// Spawn a server wired to an explicit bid service implementation.
pub async fn spawn_server_with(
    config: ServerConfig,
    service: Arc<dyn BidService>,
) -> (SocketAddr, Shutdown) {
    spawn(HttpServer::with_service(config, service)).await
}

async fn spawn(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port available");
    let addr = listener.local_addr().expect("listener has address");

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the accept loop a moment to come up.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// Non-pooled client so each test drives fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .expect("client builds")
}
