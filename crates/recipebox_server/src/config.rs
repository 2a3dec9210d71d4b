//! Server configuration.
//!
//! Every flag can also be supplied through the environment; explicit flags
//! win over environment values.

use clap::Parser;
use recipebox_core::{default_log_level, DEFAULT_DATA_FILE};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Runtime settings for `recipebox-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "recipebox-server", version, about = "Serve the recipe catalog over HTTP")]
pub struct ServerConfig {
    /// Address to bind. Loopback only by default; use 0.0.0.0 to listen on
    /// all interfaces.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file holding the recipe collection.
    #[arg(long, env = "RECIPEBOX_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log level (trace|debug|info|warn|error). Defaults by build mode.
    #[arg(long, env = "RECIPEBOX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "RECIPEBOX_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configured log level, or the build-mode default.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }
}
