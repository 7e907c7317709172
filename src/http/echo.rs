//! Echo handler: reflects request metadata back to the caller as JSON.
//!
//! # Responsibilities
//! - Describe any request (method, URI, host, headers, peer address)
//! - Join multi-valued headers with "; " in arrival order
//! - Attach the configured static message
//!
//! # Design Decisions
//! - One handler for every method and path; nothing is special-cased
//! - Header names are rendered in canonical HTTP casing (X-Trace), the
//!   form diagnostic consumers expect; the http crate lowercases on parse
//! - The Host header is surfaced in the dedicated `host` field and left
//!   out of the headers map

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request},
    Json,
};
use serde::Serialize;

use crate::config::EchoConfig;

/// JSON document describing an observed request.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    /// Configured static message.
    pub message: String,
    /// "<METHOD> <RequestURI>" exactly as received.
    pub request: String,
    /// Host header, empty when absent.
    pub host: String,
    /// Header name → values joined with "; " in arrival order.
    pub headers: BTreeMap<String, String>,
    /// Peer "ip:port".
    pub remote_addr: String,
}

/// Handle any request by describing it back to the caller.
///
/// Infallible under valid HTTP input: the response shape is fixed and
/// always serializes.
pub async fn handle(
    State(config): State<EchoConfig>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Json<EchoResponse> {
    Json(describe(&config, remote_addr, &request))
}

/// Build the echo document for a request. Pure, so the contract is
/// testable without a socket.
fn describe(config: &EchoConfig, remote_addr: SocketAddr, request: &Request<Body>) -> EchoResponse {
    let uri = request.uri();
    let request_uri = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    // HTTP/1.1 carries the host in the Host header; HTTP/2-style requests
    // carry it in the URI authority
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| uri.host().map(str::to_owned))
        .unwrap_or_default();

    let mut headers = BTreeMap::new();
    for name in request.headers().keys() {
        if name == &header::HOST {
            continue;
        }
        let joined = request
            .headers()
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join("; ");
        headers.insert(canonical_name(name.as_str()), joined);
    }

    EchoResponse {
        message: config.message.clone(),
        request: format!("{} {}", request.method(), request_uri),
        host,
        headers,
        remote_addr: remote_addr.to_string(),
    }
}

/// Restore canonical HTTP header casing: first letter of each
/// hyphen-separated segment uppercased ("x-trace" → "X-Trace").
fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = true;
    for c in name.chars() {
        out.push(if upper { c.to_ascii_uppercase() } else { c });
        upper = c == '-';
    }
    out
}
