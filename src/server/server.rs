use anyhow::Result;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use super::albums::post_album_search;
use super::curation::post_curation;
#[cfg(feature = "slowdown")]
use super::http_layers::slowdown_request;
use super::state::{GuardedCatalogStore, ServerState};
use super::{log_requests, ServerConfig};
use crate::curation::NormalizationTable;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub tracks_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> Response {
    let tracks_count = match state.catalog_store.get_tracks_count() {
        Ok(count) => count,
        Err(err) => {
            error!("Failed to count catalog tracks: {:#}", err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        tracks_count,
    };
    Json(stats).into_response()
}

impl ServerState {
    fn new(
        config: ServerConfig,
        catalog_store: GuardedCatalogStore,
        norms: NormalizationTable,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog_store,
            norms: Arc::new(norms),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    catalog_store: GuardedCatalogStore,
    norms: NormalizationTable,
) -> Result<Router> {
    let state = ServerState::new(config, catalog_store, norms);

    let content_routes: Router = Router::new()
        .route("/curation", post(post_curation))
        .route("/albums/search", post(post_album_search))
        .with_state(state.clone());

    let home_router: Router = Router::new().route("/", get(home)).with_state(state.clone());

    #[allow(unused_mut)]
    let mut app: Router = home_router.nest("/v1", content_routes);

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    let app = app.layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    catalog_store: GuardedCatalogStore,
    norms: NormalizationTable,
    config: ServerConfig,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog_store, norms)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
