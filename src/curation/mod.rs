//! Gestalt scoring and similarity ranking.
//!
//! A track's "gestalt" is a single weighted, normalized scalar summarizing
//! its eleven audio features. Curation ranks the rest of the catalog by
//! closeness to a reference track's gestalt.

mod error;
mod features;
mod gestalt;
mod ranker;
mod weights;

pub use error::CurationError;
pub use features::{Feature, FeatureVector, NormalizationTable};
pub use gestalt::compute_gestalt;
pub use ranker::{curate, Curation, CuratedTrack, ReferenceQuery};
pub use weights::WeightConfig;
