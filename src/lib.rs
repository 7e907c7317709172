//! Diagnostic HTTP echo server.
//!
//! Every request, any method and any path, is answered with a JSON document
//! describing that request plus a configurable static message. Useful for
//! verifying connectivity, load-balancer behavior, and header propagation
//! through a network path.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────┐
//!     ────────────────────┼─▶ accept loop ─▶ trace layer ─▶ echo     │
//!                         │   (http/server)  (access log)   handler  │
//!     Client Response     │                                    │     │
//!     ◀───────────────────┼────────────────────────────────────┘     │
//!                         │                                          │
//!                         │  ┌────────────────────────────────────┐  │
//!                         │  │       Cross-Cutting Concerns       │  │
//!                         │  │  ┌────────┐ ┌─────────┐ ┌───────┐  │  │
//!                         │  │  │ config │ │lifecycle│ │logging│  │  │
//!                         │  │  └────────┘ └─────────┘ └───────┘  │  │
//!                         │  └────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::EchoConfig;
pub use http::EchoServer;
pub use lifecycle::Shutdown;
