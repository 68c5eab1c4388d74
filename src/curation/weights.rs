//! Per-request feature importance weights.

use super::features::Feature;

/// One importance weight per feature, supplied with each curation request.
///
/// Weights are relative, not absolute: all-1 weights produce the same
/// gestalt as all-10 weights, only the ratios between weights matter.
/// They are unsigned by construction, so negative weights are
/// unrepresentable; a configuration summing to zero is rejected at scoring
/// time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightConfig {
    weights: [u32; Feature::COUNT],
}

impl WeightConfig {
    /// Build a configuration from weights in [`Feature::ALL`] order.
    pub fn new(weights: [u32; Feature::COUNT]) -> Self {
        WeightConfig { weights }
    }

    /// The same weight for every feature.
    pub fn uniform(weight: u32) -> Self {
        WeightConfig {
            weights: [weight; Feature::COUNT],
        }
    }

    pub fn get(&self, feature: Feature) -> u32 {
        self.weights[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, weight: u32) {
        self.weights[feature.index()] = weight;
    }

    /// Sum of all weights. Zero means the configuration is invalid.
    pub fn total(&self) -> u64 {
        self.weights.iter().map(|&w| w as u64).sum()
    }
}

impl Default for WeightConfig {
    /// The neutral mid-slider configuration.
    fn default() -> Self {
        WeightConfig::uniform(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_features() {
        assert_eq!(WeightConfig::uniform(5).total(), 55);
        assert_eq!(WeightConfig::uniform(0).total(), 0);

        let mut weights = WeightConfig::uniform(0);
        weights.set(Feature::Tempo, 7);
        assert_eq!(weights.total(), 7);
        assert_eq!(weights.get(Feature::Tempo), 7);
        assert_eq!(weights.get(Feature::Energy), 0);
    }

    #[test]
    fn default_is_mid_slider() {
        assert_eq!(WeightConfig::default(), WeightConfig::uniform(5));
    }
}
