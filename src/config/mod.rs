mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that participate in config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog_db: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub read_pool_size: usize,
    pub default_curation_size: usize,
    pub album_pool_size: usize,
    pub album_sample_size: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_db: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub read_pool_size: usize,
    pub default_curation_size: usize,
    pub album_pool_size: usize,
    pub album_sample_size: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let catalog_db = file
            .catalog_db
            .map(PathBuf::from)
            .or_else(|| cli.catalog_db.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("catalog_db must be specified via CLI or in config file")
            })?;

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let read_pool_size = file.read_pool_size.unwrap_or(cli.read_pool_size);
        if read_pool_size == 0 {
            bail!("read_pool_size must be at least 1");
        }

        let default_curation_size = file
            .default_curation_size
            .unwrap_or(cli.default_curation_size);
        if default_curation_size == 0 {
            bail!("default_curation_size must be at least 1");
        }

        let album_pool_size = file.album_pool_size.unwrap_or(cli.album_pool_size);
        let album_sample_size = file.album_sample_size.unwrap_or(cli.album_sample_size);
        if album_sample_size > album_pool_size {
            bail!(
                "album_sample_size ({}) cannot exceed album_pool_size ({})",
                album_sample_size,
                album_pool_size
            );
        }

        Ok(AppConfig {
            catalog_db,
            port,
            logging_level,
            read_pool_size,
            default_curation_size,
            album_pool_size,
            album_sample_size,
        })
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
