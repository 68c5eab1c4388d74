//! Test fixture creation for the catalog database
//!
//! The catalog is read-only at runtime, so tests seed it with direct
//! SQL inserts before the server opens it.

use super::constants::*;
use anyhow::Result;
use curator_server::catalog_store::SqliteCatalogStore;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

/// One seeded track: id, title, artists, year, popularity, tempo.
///
/// All tracks share the same values for the other ten features so that
/// with uniform weights the curation order is determined by tempo alone.
type SeedTrack = (&'static str, &'static str, &'static str, i64, i64, f64);

const SEED_TRACKS: &[SeedTrack] = &[
    (TRACK_1_ID, TRACK_1_TITLE, "['Queen']", 1975, 89, 72.0),
    (TRACK_2_ID, "Somebody to Love", "['Queen']", 1976, 80, 127.0),
    (TRACK_3_ID, TRACK_3_TITLE, "['Eagles']", 1976, 83, 75.0),
    (TRACK_4_ID, "New Kid in Town", "['Eagles']", 1976, 70, 104.0),
    (TRACK_5_ID, "Take It Easy", "['Eagles']", 1972, 76, 88.0),
];

/// Creates a temporary seeded catalog with 5 tracks from 2 artists.
/// Returns (temp_dir, catalog_db_path).
pub fn create_test_catalog() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let catalog_db_path = dir.path().join("catalog.db");

    // Open the store once so the schema gets created, then seed directly.
    let _store = SqliteCatalogStore::new(&catalog_db_path, 1)?;

    let conn = Connection::open(&catalog_db_path)?;
    for (id, name, artists, year, popularity, tempo) in SEED_TRACKS {
        conn.execute(
            "INSERT INTO tracks (id, name, artists, year, popularity, \
             acousticness, danceability, energy, instrumentalness, \"key\", \
             liveness, loudness, mode, speechiness, tempo, valence) \
             VALUES (?1, ?2, ?3, ?4, ?5, 0.5, 0.5, 0.5, 0.0, 5.0, 0.1, -8.0, 1.0, 0.05, ?6, 0.5)",
            params![id, name, artists, year, popularity, tempo],
        )?;
    }

    Ok((dir, catalog_db_path))
}
