use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use curator_server::catalog_store::SqliteCatalogStore;
use curator_server::config::{AppConfig, CliConfig, FileConfig};
use curator_server::curation::NormalizationTable;
use curator_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite catalog database file.
    #[clap(value_parser = parse_path)]
    pub catalog_db: PathBuf,

    /// Optional TOML config file; its values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Number of read-only catalog connections for concurrent requests.
    #[clap(long, default_value_t = 4)]
    pub read_pool_size: usize,

    /// How many curated tracks to return when a request does not specify
    /// a count.
    #[clap(long, default_value_t = 3)]
    pub default_curation_size: usize,

    /// How many of the most popular album hits to sample from.
    #[clap(long, default_value_t = 10)]
    pub album_pool_size: usize,

    /// How many albums to return from the popularity pool.
    #[clap(long, default_value_t = 3)]
    pub album_sample_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let cli_config = CliConfig {
        catalog_db: Some(cli_args.catalog_db),
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        read_pool_size: cli_args.read_pool_size,
        default_curation_size: cli_args.default_curation_size,
        album_pool_size: cli_args.album_pool_size,
        album_sample_size: cli_args.album_sample_size,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Opening SQLite catalog database at {:?}...",
        config.catalog_db
    );
    let catalog_store = Arc::new(SqliteCatalogStore::new(
        &config.catalog_db,
        config.read_pool_size,
    )?);

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level,
        port: config.port,
        default_curation_size: config.default_curation_size,
        album_pool_size: config.album_pool_size,
        album_sample_size: config.album_sample_size,
    };

    info!("Ready to serve at port {}!", server_config.port);
    run_server(
        catalog_store,
        NormalizationTable::default(),
        server_config,
    )
    .await
}
