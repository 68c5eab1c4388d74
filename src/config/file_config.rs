use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub catalog_db: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub read_pool_size: Option<usize>,

    // Curation settings
    pub default_curation_size: Option<usize>,
    pub album_pool_size: Option<usize>,
    pub album_sample_size: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config: FileConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.port, Some(8080));
        assert!(config.catalog_db.is_none());
        assert!(config.default_curation_size.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: FileConfig = toml::from_str("something_else = 1").unwrap();
        assert!(config.port.is_none());
    }
}
