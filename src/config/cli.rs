//! Command-line surface.
//!
//! Each option resolves in priority order: explicit flag, then environment
//! variable, then built-in default. clap's `env` feature gives exactly that
//! ordering.

use clap::Parser;

/// Diagnostic HTTP echo server.
#[derive(Debug, Parser)]
#[command(name = "echo-http", version, about = "HTTP echo server for network diagnostics")]
pub struct Cli {
    /// Address to listen on, host:port
    #[arg(short = 'l', long, env = "LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Static message included in every response
    #[arg(short = 'm', long, env = "MESSAGE", default_value = "echo")]
    pub message: String,

    /// Enable verbose diagnostic logging
    #[arg(long = "dbg", env = "DEBUG")]
    pub dbg: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let cli = Cli::try_parse_from(["echo-http"]).unwrap();
        assert_eq!(cli.listen, "0.0.0.0:8080");
        assert_eq!(cli.message, "echo");
        assert!(!cli.dbg);
    }

    #[test]
    fn flags_override_defaults() {
        let cli =
            Cli::try_parse_from(["echo-http", "-l", "127.0.0.1:9000", "-m", "hello", "--dbg"])
                .unwrap();
        assert_eq!(cli.listen, "127.0.0.1:9000");
        assert_eq!(cli.message, "hello");
        assert!(cli.dbg);
    }

    #[test]
    fn long_flags_accepted() {
        let cli = Cli::try_parse_from(["echo-http", "--listen", "[::1]:8081", "--message", "hi"])
            .unwrap();
        assert_eq!(cli.listen, "[::1]:8081");
        assert_eq!(cli.message, "hi");
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Cli::try_parse_from(["echo-http", "--bogus"]).is_err());
    }
}
