//! The curation endpoint: reference track plus weights in, ranked
//! similar tracks out.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};

use super::state::ServerState;
use crate::curation::{curate, CurationError, Feature, ReferenceQuery, WeightConfig};

/// Weight bound enforced at the request layer; the sliders go 0..=10.
const MAX_WEIGHT: i64 = 10;

#[derive(Deserialize, Debug)]
pub struct CurationBody {
    /// Free-text reference title, resolved with fuzzy matching.
    pub title: Option<String>,
    /// Exact reference track id; takes precedence over `title`.
    pub track_id: Option<String>,

    pub acousticness_weight: i64,
    pub danceability_weight: i64,
    pub energy_weight: i64,
    pub instrumentalness_weight: i64,
    pub key_weight: i64,
    pub liveness_weight: i64,
    pub loudness_weight: i64,
    pub mode_weight: i64,
    pub speechiness_weight: i64,
    pub tempo_weight: i64,
    pub valence_weight: i64,

    /// Result count, defaults to the configured curation size.
    pub count: Option<usize>,
}

impl CurationBody {
    fn reference(&self) -> Option<ReferenceQuery> {
        if let Some(id) = &self.track_id {
            return Some(ReferenceQuery::Id(id.clone()));
        }
        self.title
            .as_ref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| ReferenceQuery::Title(t.clone()))
    }

    fn validated_weights(&self) -> Result<WeightConfig, String> {
        let raw = [
            (Feature::Acousticness, self.acousticness_weight),
            (Feature::Danceability, self.danceability_weight),
            (Feature::Energy, self.energy_weight),
            (Feature::Instrumentalness, self.instrumentalness_weight),
            (Feature::Key, self.key_weight),
            (Feature::Liveness, self.liveness_weight),
            (Feature::Loudness, self.loudness_weight),
            (Feature::Mode, self.mode_weight),
            (Feature::Speechiness, self.speechiness_weight),
            (Feature::Tempo, self.tempo_weight),
            (Feature::Valence, self.valence_weight),
        ];

        let mut weights = WeightConfig::uniform(0);
        for (feature, value) in raw {
            if !(0..=MAX_WEIGHT).contains(&value) {
                return Err(format!(
                    "{}_weight must be between 0 and {}",
                    feature.column_name(),
                    MAX_WEIGHT
                ));
            }
            weights.set(feature, value as u32);
        }
        Ok(weights)
    }
}

pub async fn post_curation(
    State(state): State<ServerState>,
    Json(body): Json<CurationBody>,
) -> Response {
    let Some(reference) = body.reference() else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "either title or track_id is required",
        )
            .into_response();
    };

    let weights = match body.validated_weights() {
        Ok(weights) => weights,
        Err(message) => return (StatusCode::UNPROCESSABLE_ENTITY, message).into_response(),
    };

    let count = body.count.unwrap_or(state.config.default_curation_size);

    match curate(
        &reference,
        &weights,
        &state.norms,
        state.catalog_store.as_ref(),
        count,
    ) {
        Ok(curation) => Json(curation).into_response(),
        Err(CurationError::ReferenceNotFound) => {
            debug!("Curation reference not found: {:?}", reference);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err @ CurationError::InvalidConfiguration) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
        Err(CurationError::CatalogUnavailable(err)) => {
            error!("Curation failed, catalog unavailable: {:#}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
