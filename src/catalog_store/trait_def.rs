//! CatalogStore trait definition.

use anyhow::Result;

use super::models::{AlbumEntry, TrackEntry};

/// Trait for catalog storage backends.
///
/// The curation core only talks to this trait, so tests and alternative
/// backends can stand in for the SQLite store transparently.
pub trait CatalogStore: Send + Sync {
    /// Get a track by its exact catalog identifier.
    fn get_track(&self, id: &str) -> Result<Option<TrackEntry>>;

    /// Find the first track whose title contains the query.
    ///
    /// Matching is case-insensitive and returns the first match in id
    /// order, so repeated lookups are deterministic. Implementations may
    /// additionally retry with typo correction; the substring contract is
    /// the only guarantee.
    fn find_track_by_title(&self, query: &str) -> Result<Option<TrackEntry>>;

    /// Every catalog track except the given one, in id order.
    fn get_all_tracks_except(&self, id: &str) -> Result<Vec<TrackEntry>>;

    /// Albums matching an artist substring and optional inclusive year
    /// bounds, ordered by descending popularity.
    fn find_albums(
        &self,
        artist: &str,
        from_year: Option<i64>,
        to_year: Option<i64>,
    ) -> Result<Vec<AlbumEntry>>;

    /// The number of tracks in the catalog.
    fn get_tracks_count(&self) -> Result<usize>;
}
