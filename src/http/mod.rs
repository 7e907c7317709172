//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (accept loop, per-connection timeouts, graceful drain)
//!     → trace layer (access log: method, path, status, duration)
//!     → echo.rs (build EchoResponse from request metadata)
//!     → JSON response to client
//! ```

pub mod echo;
pub mod server;

pub use echo::EchoResponse;
pub use server::{EchoServer, ServerError};
