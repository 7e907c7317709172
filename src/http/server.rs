//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum router (every method, every path → echo handler)
//! - Wire up middleware (access log, request timeout)
//! - Bind the listener and accept connections, one task per connection
//! - Enforce per-connection timeouts
//! - Drain in-flight requests on shutdown, bounded by a grace period
//!
//! # Design Decisions
//! - Manual accept loop instead of `axum::serve`: gives us the header read
//!   timeout and a bounded drain via hyper-util's `GracefulShutdown`
//! - Shutdown arrives as a broadcast receiver, so tests can trigger it
//!   synthetically without OS signals
//! - Per-connection errors are logged at debug and never stop the loop;
//!   accept errors on the listener itself are fatal

use std::time::Duration;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceExt;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::Span;

use crate::config::EchoConfig;
use crate::http::echo;

/// Bound on reading a request's header block; also caps keep-alive idle
/// time, since an idle connection is waiting on the next header block.
const HEADER_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Bound on handling a single request, response write included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bound on draining in-flight requests during shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Fatal server errors. Per-connection failures are logged, not returned.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("listener failed: {0}")]
    Accept(std::io::Error),
}

/// HTTP server wrapping the echo handler stack.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    /// Create a new server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(config.clone());
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: EchoConfig) -> Router {
        Router::new()
            .route("/", any(echo::handle))
            .route("/{*path}", any(echo::handle))
            .with_state(config)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                        )
                    })
                    .on_response(|response: &Response, latency: Duration, _span: &Span| {
                        tracing::info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis() as u64,
                            "request completed"
                        );
                    }),
            )
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn run(self, shutdown: broadcast::Receiver<()>) -> Result<(), ServerError> {
        let listener = TcpListener::bind(&self.config.listen)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.config.listen.clone(),
                source,
            })?;

        self.serve(listener, shutdown).await
    }

    /// Serve connections on an already-bound listener until shutdown.
    ///
    /// Returns `Ok(())` on graceful stop; connections still open when the
    /// grace period elapses are aborted.
    pub async fn serve(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let local_addr = listener.local_addr().map_err(ServerError::Accept)?;
        tracing::info!(address = %local_addr, "starting server");

        let mut builder = auto::Builder::new(TokioExecutor::new());
        builder
            .http1()
            .timer(TokioTimer::new())
            .header_read_timeout(HEADER_READ_TIMEOUT)
            .keep_alive(true);

        let graceful = GracefulShutdown::new();

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, remote_addr) = accepted.map_err(ServerError::Accept)?;
                    tracing::debug!(peer_addr = %remote_addr, "connection accepted");

                    // Inject the peer address so ConnectInfo resolves in
                    // the handler, then hand the service to hyper
                    let app = self.router.clone().map_request(
                        move |mut request: Request<Incoming>| {
                            request.extensions_mut().insert(ConnectInfo(remote_addr));
                            request.map(Body::new)
                        },
                    );

                    let connection = builder
                        .serve_connection(TokioIo::new(stream), TowerToHyperService::new(app))
                        .into_owned();
                    let connection = graceful.watch(connection);

                    tokio::spawn(async move {
                        if let Err(e) = connection.await {
                            tracing::debug!(
                                peer_addr = %remote_addr,
                                error = %e,
                                "connection closed with error"
                            );
                        }
                    });
                }
                _ = shutdown.recv() => {
                    tracing::info!("shutdown signal received, no longer accepting connections");
                    break;
                }
            }
        }

        // Close the listen socket before draining so new connects are
        // refused immediately
        drop(listener);

        tokio::select! {
            _ = graceful.shutdown() => {
                tracing::info!("in-flight requests drained");
            }
            _ = tokio::time::sleep(SHUTDOWN_GRACE) => {
                tracing::warn!("grace period elapsed, aborting remaining connections");
            }
        }

        Ok(())
    }
}
