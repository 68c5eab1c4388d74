//! Gestalt computation.
//!
//! Gestalt is calculated as sum[feature * feature_normalizer *
//! (feature_weight / total_weight)] over all eleven features.

use super::error::CurationError;
use super::features::{Feature, FeatureVector, NormalizationTable};
use super::weights::WeightConfig;

/// Compute the gestalt score for one feature vector.
///
/// Each weight is normalized to a fraction of the weight total, so the
/// absolute scale a user picks ("all 5" vs "all 1") never changes the
/// result. The division is guarded up front: a zero weight total is an
/// [`CurationError::InvalidConfiguration`], never a NaN that leaks into
/// the ranking.
pub fn compute_gestalt(
    vector: &FeatureVector,
    weights: &WeightConfig,
    norms: &NormalizationTable,
) -> Result<f64, CurationError> {
    let total = weights.total();
    if total == 0 {
        return Err(CurationError::InvalidConfiguration);
    }
    let total = total as f64;

    let mut gestalt = 0.0;
    for feature in Feature::ALL {
        let fraction = weights.get(feature) as f64 / total;
        gestalt += vector.get(feature) * fraction * norms.get(feature);
    }
    Ok(gestalt)
}
