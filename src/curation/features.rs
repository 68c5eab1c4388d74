//! Audio feature definitions and the per-feature normalization table.

/// One of the eleven audio feature dimensions tracked for every catalog
/// track. The set is closed; scoring iterates over [`Feature::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Acousticness,
    Danceability,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Speechiness,
    Tempo,
    Valence,
}

impl Feature {
    pub const COUNT: usize = 11;

    /// All features, in canonical (catalog column) order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Acousticness,
        Feature::Danceability,
        Feature::Energy,
        Feature::Instrumentalness,
        Feature::Key,
        Feature::Liveness,
        Feature::Loudness,
        Feature::Mode,
        Feature::Speechiness,
        Feature::Tempo,
        Feature::Valence,
    ];

    /// The catalog database column holding this feature's value.
    pub fn column_name(self) -> &'static str {
        match self {
            Feature::Acousticness => "acousticness",
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Key => "key",
            Feature::Liveness => "liveness",
            Feature::Loudness => "loudness",
            Feature::Mode => "mode",
            Feature::Speechiness => "speechiness",
            Feature::Tempo => "tempo",
            Feature::Valence => "valence",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// One measured value per feature for a single catalog track.
///
/// Vectors are complete (no partial vectors) and read-only once loaded
/// from the catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    values: [f64; Feature::COUNT],
}

impl FeatureVector {
    /// Build a vector from values in [`Feature::ALL`] order.
    pub fn new(values: [f64; Feature::COUNT]) -> Self {
        FeatureVector { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }
}

/// Fixed per-feature multipliers bringing the differing natural value
/// ranges to comparable magnitude (~100).
///
/// The constants were determined offline from catalog-wide averages; they
/// are hardly perfect but good enough that a uniform weight configuration
/// does not let high-magnitude features (tempo) drown out binary ones
/// (mode). Loudness averages near -8 dB, hence the negative multiplier.
#[derive(Clone, Copy, Debug)]
pub struct NormalizationTable {
    multipliers: [f64; Feature::COUNT],
}

impl NormalizationTable {
    /// A custom table, values in [`Feature::ALL`] order.
    pub fn new(multipliers: [f64; Feature::COUNT]) -> Self {
        NormalizationTable { multipliers }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.multipliers[feature.index()]
    }
}

impl Default for NormalizationTable {
    fn default() -> Self {
        NormalizationTable {
            multipliers: [
                199.237, // acousticness
                186.482, // danceability
                207.905, // energy
                512.906, // instrumentalness
                19.215,  // key
                473.047, // liveness
                -8.491,  // loudness
                142.218, // mode
                944.320, // speechiness
                0.855,   // tempo
                190.386, // valence
            ],
        }
    }
}
