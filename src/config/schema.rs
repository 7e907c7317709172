//! Configuration schema.

use crate::config::cli::Cli;

/// Immutable runtime configuration.
///
/// Constructed once at startup and shared read-only for the process
/// lifetime, so handlers need no synchronization around it.
#[derive(Debug, Clone)]
pub struct EchoConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub listen: String,

    /// Static message echoed in every response.
    pub message: String,

    /// Verbose diagnostic logging.
    pub debug: bool,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            message: "echo".to_string(),
            debug: false,
        }
    }
}

impl From<Cli> for EchoConfig {
    fn from(cli: Cli) -> Self {
        Self {
            listen: cli.listen,
            message: cli.message,
            debug: cli.dbg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_matches_cli_defaults() {
        let from_cli = EchoConfig::from(Cli::try_parse_from(["echo-http"]).unwrap());
        let default = EchoConfig::default();
        assert_eq!(from_cli.listen, default.listen);
        assert_eq!(from_cli.message, default.message);
        assert_eq!(from_cli.debug, default.debug);
    }

    #[test]
    fn cli_values_carry_over() {
        let cli = Cli::try_parse_from(["echo-http", "-m", "pong", "--dbg"]).unwrap();
        let config = EchoConfig::from(cli);
        assert_eq!(config.message, "pong");
        assert!(config.debug);
    }
}
