//! Server configuration.

use clap::Parser;

/// Default address to bind to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port to listen on.
pub const DEFAULT_PORT: u16 = 8080;

/// Go data type catalog server command line arguments.
#[derive(Debug, Parser)]
#[command(name = "gotypes-server")]
#[command(about = "Serves the Go data type catalog as JSON")]
#[command(version)]
pub struct Args {
    /// Address to bind to.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error), used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Default log level.
    pub log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to, as `host:port`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter directive applied when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> String {
        format!("gotypes_server={0},tower_http={0}", self.log_level)
    }
}
