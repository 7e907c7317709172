use clap::Parser;

use echo_http::config::{Cli, EchoConfig};
use echo_http::http::EchoServer;
use echo_http::lifecycle::{signals, Shutdown};
use echo_http::observability::logging;

#[tokio::main]
async fn main() {
    // clap handles --help (exit 0) and parse errors (non-zero exit) itself
    let cli = Cli::parse();
    let config = EchoConfig::from(cli);

    logging::init(config.debug);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.listen,
        message = %config.message,
        "echo-http starting"
    );

    let shutdown = Shutdown::new();
    signals::spawn_watcher(&shutdown);

    let server = EchoServer::new(config);
    match server.run(shutdown.subscribe()).await {
        Ok(()) => tracing::info!("server stopped"),
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            std::process::exit(1);
        }
    }
}
