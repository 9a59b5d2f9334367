use std::path::PathBuf;

use clap::Parser;

/// Catalog category service
#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Document-backed category CRUD service")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "catalog.toml", env = "CATALOG_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CATALOG_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
