//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line / environment
//!     → cli.rs (clap parse: flag > env var > default)
//!     → schema.rs (EchoConfig, immutable)
//!     → shared with the handler via axum state
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every option has a default so the server runs with no arguments
//! - Parse failures are fatal before anything binds or logs

pub mod cli;
pub mod schema;

pub use cli::Cli;
pub use schema::EchoConfig;
