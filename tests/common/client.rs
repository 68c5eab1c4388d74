//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all curator-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET / (server stats)
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// POST /v1/curation with uniform weights of 5 and a title reference
    pub async fn curate_by_title(&self, title: &str) -> Response {
        let mut body = uniform_weights(5);
        body["title"] = json!(title);
        self.curate(&body).await
    }

    /// POST /v1/curation with uniform weights of 5 and an id reference
    pub async fn curate_by_id(&self, track_id: &str) -> Response {
        let mut body = uniform_weights(5);
        body["track_id"] = json!(track_id);
        self.curate(&body).await
    }

    /// POST /v1/curation with a raw JSON body
    pub async fn curate(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/v1/curation", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Curation request failed")
    }

    /// POST /v1/albums/search
    pub async fn search_albums(
        &self,
        artist: &str,
        from_year: Option<i64>,
        to_year: Option<i64>,
    ) -> Response {
        self.client
            .post(format!("{}/v1/albums/search", self.base_url))
            .json(&json!({
                "artist": artist,
                "from_year": from_year,
                "to_year": to_year,
            }))
            .send()
            .await
            .expect("Album search request failed")
    }
}

/// Builds a curation body with every feature weight set to `weight` and
/// no reference. Tests fill in `title` or `track_id` as needed.
pub fn uniform_weights(weight: i64) -> Value {
    json!({
        "acousticness_weight": weight,
        "danceability_weight": weight,
        "energy_weight": weight,
        "instrumentalness_weight": weight,
        "key_weight": weight,
        "liveness_weight": weight,
        "loudness_weight": weight,
        "mode_weight": weight,
        "speechiness_weight": weight,
        "tempo_weight": weight,
        "valence_weight": weight,
    })
}
