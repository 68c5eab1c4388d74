use thiserror::Error;

/// Errors surfaced by gestalt scoring and curation.
///
/// None of these are swallowed into default scores; a failed call never
/// returns partial results.
#[derive(Debug, Error)]
pub enum CurationError {
    /// The reference track lookup produced no match.
    #[error("no track matches the requested reference")]
    ReferenceNotFound,

    /// All weights are zero, the weighted average is undefined.
    #[error("invalid weight configuration: weights sum to zero")]
    InvalidConfiguration,

    /// The catalog store failed; retrying is the caller's call.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[source] anyhow::Error),
}
