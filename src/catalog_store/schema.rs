//! SQLite schema definitions for the track catalog database.
//!
//! A single `tracks` table carries the metadata and the eleven audio
//! feature columns of the catalog dump. `key` is quoted because it is a
//! SQLite keyword.

use anyhow::Result;
use rusqlite::Transaction;

/// One schema version with an optional migration from the previous one.
pub struct VersionedSchema {
    pub version: usize,
    pub create_sql: &'static str,
    pub migration: Option<fn(&Transaction) -> Result<()>>,
}

const TRACKS_TABLE_V0: &str = "
CREATE TABLE tracks (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    artists TEXT NOT NULL,
    year INTEGER NOT NULL,
    popularity INTEGER NOT NULL,
    acousticness REAL NOT NULL,
    danceability REAL NOT NULL,
    energy REAL NOT NULL,
    instrumentalness REAL NOT NULL,
    \"key\" REAL NOT NULL,
    liveness REAL NOT NULL,
    loudness REAL NOT NULL,
    mode REAL NOT NULL,
    speechiness REAL NOT NULL,
    tempo REAL NOT NULL,
    valence REAL NOT NULL
);
CREATE INDEX idx_tracks_name ON tracks(name);
CREATE INDEX idx_tracks_popularity ON tracks(popularity);
";

/// All catalog schema versions, oldest first. The store migrates through
/// the tail of this list based on `PRAGMA user_version`.
pub const CATALOG_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    create_sql: TRACKS_TABLE_V0,
    migration: None,
}];
