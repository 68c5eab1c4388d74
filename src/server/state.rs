use crate::catalog_store::CatalogStore;
use crate::curation::NormalizationTable;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalogStore = Arc<dyn CatalogStore>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog_store: GuardedCatalogStore,
    /// Immutable per-process normalization constants, shared by every
    /// request.
    pub norms: Arc<NormalizationTable>,
    pub hash: String,
}
