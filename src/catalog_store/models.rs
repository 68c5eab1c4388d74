//! Catalog entry models for the SQLite-backed store.

use serde::Serialize;

use crate::curation::FeatureVector;

/// One catalog track with its measured audio features.
#[derive(Clone, Debug)]
pub struct TrackEntry {
    pub id: String,
    pub name: String,
    /// Raw artists field as stored in the catalog dump.
    pub artists: String,
    pub year: i64,
    pub popularity: i64,
    pub features: FeatureVector,
}

/// One album search hit, popularity-ordered by the store.
#[derive(Clone, Debug, Serialize)]
pub struct AlbumEntry {
    pub id: String,
    pub name: String,
    pub year: i64,
}
