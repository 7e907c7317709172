//! Shared helpers for integration tests.

use std::net::SocketAddr;

use echo_http::config::EchoConfig;
use echo_http::http::{EchoServer, ServerError};
use echo_http::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Start an echo server on an ephemeral port, returning its address, the
/// shutdown coordinator, and the serve task handle.
pub async fn start_server(
    config: EchoConfig,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), ServerError>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    // Subscribe before spawning so an early trigger is never missed
    let rx = shutdown.subscribe();
    let server = EchoServer::new(config);
    let handle = tokio::spawn(async move { server.serve(listener, rx).await });

    (addr, shutdown, handle)
}

/// Config with the given message, listening address left at its default
/// (tests bind their own ephemeral listener).
pub fn config_with_message(message: &str) -> EchoConfig {
    EchoConfig {
        message: message.to_string(),
        ..EchoConfig::default()
    }
}
