//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; the access log is a
//!   TraceLayer span around the echo handler
//! - `RUST_LOG` overrides everything; otherwise the debug flag picks the
//!   default filter

pub mod logging;
