use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// How many curated tracks a request gets when it does not ask for a
    /// specific count.
    pub default_curation_size: usize,
    /// Album search keeps this many of the most popular hits...
    pub album_pool_size: usize,
    /// ...and returns a random sample of this size for display variety.
    pub album_sample_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            default_curation_size: 3,
            album_pool_size: 10,
            album_sample_size: 3,
        }
    }
}
