//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT/SIGTERM (signals.rs)
//!     → Shutdown coordinator (shutdown.rs)
//!     → broadcast to the serve loop
//!     → stop accepting, drain in-flight, exit
//! ```
//!
//! # Design Decisions
//! - The server observes a broadcast receiver, not OS signals directly,
//!   so tests can shut it down synthetically

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
