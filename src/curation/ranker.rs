//! Catalog-wide similarity ranking around a reference track.

use serde::Serialize;

use super::error::CurationError;
use super::features::NormalizationTable;
use super::gestalt::compute_gestalt;
use super::weights::WeightConfig;
use crate::catalog_store::{CatalogStore, TrackEntry};

/// How the caller identifies the reference track.
#[derive(Clone, Debug)]
pub enum ReferenceQuery {
    /// Exact catalog identifier.
    Id(String),
    /// Free-text title, resolved through the store's fuzzy lookup.
    Title(String),
}

/// One ranked candidate.
#[derive(Clone, Debug, Serialize)]
pub struct CuratedTrack {
    pub id: String,
    pub name: String,
    pub gestalt: f64,
    /// Absolute difference from the reference gestalt.
    pub gestalt_diff: f64,
}

/// The outcome of a curation call: the resolved reference and the k
/// closest tracks, ascending by gestalt difference.
#[derive(Clone, Debug, Serialize)]
pub struct Curation {
    pub reference_id: String,
    pub reference_name: String,
    pub reference_gestalt: f64,
    pub tracks: Vec<CuratedTrack>,
}

fn resolve_reference(
    reference: &ReferenceQuery,
    catalog: &dyn CatalogStore,
) -> Result<TrackEntry, CurationError> {
    let found = match reference {
        ReferenceQuery::Id(id) => catalog.get_track(id),
        ReferenceQuery::Title(title) => catalog.find_track_by_title(title),
    }
    .map_err(CurationError::CatalogUnavailable)?;
    found.ok_or(CurationError::ReferenceNotFound)
}

/// Rank the catalog by gestalt closeness to the reference track and return
/// the `k` closest candidates.
///
/// The reference itself is excluded from the candidates. An empty catalog
/// (after exclusion) yields an empty list, not an error; `k` larger than
/// the candidate count returns all candidates. Invalid weights fail the
/// whole call before anything is fetched, so partial results are never
/// produced.
///
/// Ordering is deterministic: candidates are scored in the store's
/// id-ordered scan and sorted with a stable sort, so equal differences
/// keep catalog id order.
pub fn curate(
    reference: &ReferenceQuery,
    weights: &WeightConfig,
    norms: &NormalizationTable,
    catalog: &dyn CatalogStore,
    k: usize,
) -> Result<Curation, CurationError> {
    if weights.total() == 0 {
        return Err(CurationError::InvalidConfiguration);
    }

    let reference = resolve_reference(reference, catalog)?;
    let reference_gestalt = compute_gestalt(&reference.features, weights, norms)?;

    let candidates = catalog
        .get_all_tracks_except(&reference.id)
        .map_err(CurationError::CatalogUnavailable)?;

    let mut tracks = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let gestalt = compute_gestalt(&candidate.features, weights, norms)?;
        tracks.push(CuratedTrack {
            id: candidate.id,
            name: candidate.name,
            gestalt,
            gestalt_diff: (reference_gestalt - gestalt).abs(),
        });
    }

    tracks.sort_by(|a, b| a.gestalt_diff.total_cmp(&b.gestalt_diff));
    tracks.truncate(k);

    Ok(Curation {
        reference_id: reference.id,
        reference_name: reference.name,
        reference_gestalt,
        tracks,
    })
}
