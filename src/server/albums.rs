//! Album search: popularity-ordered artist lookup with random
//! sub-sampling for display variety.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use tracing::error;

use super::state::ServerState;
use crate::catalog_store::AlbumEntry;

#[derive(Deserialize, Debug)]
pub struct AlbumSearchBody {
    pub artist: String,
    pub from_year: Option<i64>,
    pub to_year: Option<i64>,
}

/// Keep the `pool_size` most popular hits and return `sample_size` of
/// them at random. The input is already popularity-ordered, so the
/// sampled subset is always within the top pool.
pub fn sample_top_albums(
    albums: Vec<AlbumEntry>,
    pool_size: usize,
    sample_size: usize,
    rng: &mut impl Rng,
) -> Vec<AlbumEntry> {
    let mut pool: Vec<AlbumEntry> = albums.into_iter().take(pool_size).collect();
    pool.shuffle(rng);
    pool.truncate(sample_size);
    pool
}

pub async fn post_album_search(
    State(state): State<ServerState>,
    Json(body): Json<AlbumSearchBody>,
) -> Response {
    match state
        .catalog_store
        .find_albums(&body.artist, body.from_year, body.to_year)
    {
        Ok(albums) => {
            let sampled = sample_top_albums(
                albums,
                state.config.album_pool_size,
                state.config.album_sample_size,
                &mut rand::rng(),
            );
            Json(sampled).into_response()
        }
        Err(err) => {
            error!("Album search failed: {:#}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
