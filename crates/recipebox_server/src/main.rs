//! `recipebox-server` entry point.

use clap::Parser;
use recipebox_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    recipebox_core::init_logging(config.log_level(), config.log_dir.as_deref())
        .map_err(anyhow::Error::msg)?;

    recipebox_server::serve(config).await
}
