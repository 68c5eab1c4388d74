//! SQLite-backed catalog store implementation.
//!
//! Reads the track catalog (metadata plus the eleven audio feature
//! columns) from a SQLite database dump.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::models::{AlbumEntry, TrackEntry};
use super::schema::CATALOG_VERSIONED_SCHEMAS;
use super::trait_def::CatalogStore;
use crate::curation::{Feature, FeatureVector};
use crate::search::TitleVocabulary;

/// Maximum edit distance when retrying a failed title lookup with typo
/// correction.
const TITLE_TYPO_MAX_DISTANCE: usize = 2;

const TRACK_COLUMNS: &str = "id, name, artists, year, popularity, \
     acousticness, danceability, energy, instrumentalness, \"key\", \
     liveness, loudness, mode, speechiness, tempo, valence";

/// SQLite-backed catalog store with a round-robin read connection pool.
#[derive(Clone)]
pub struct SqliteCatalogStore {
    read_pool: Vec<Arc<Mutex<Connection>>>,
    read_index: Arc<AtomicUsize>,
    title_vocabulary: Arc<TitleVocabulary>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let latest = CATALOG_VERSIONED_SCHEMAS
        .last()
        .expect("at least one schema version");

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        // Brand new database, create the latest schema directly.
        info!("Creating catalog db schema at version {}", latest.version);
        conn.execute_batch(latest.create_sql)?;
        conn.pragma_update(None, "user_version", latest.version as i64)?;
        return Ok(());
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    let mut current_version = db_version as usize;
    if current_version >= latest.version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in CATALOG_VERSIONED_SCHEMAS
        .iter()
        .skip(current_version + 1)
    {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating catalog db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
            current_version = schema.version;
        }
    }
    tx.pragma_update(None, "user_version", current_version as i64)?;
    tx.commit()?;
    Ok(())
}

/// Escape `%`, `_` and the escape character itself so user input is
/// matched literally inside a LIKE pattern.
fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn row_to_track(row: &Row) -> rusqlite::Result<TrackEntry> {
    let mut values = [0.0; Feature::COUNT];
    for (offset, value) in values.iter_mut().enumerate() {
        // Feature columns start after id, name, artists, year, popularity.
        *value = row.get(5 + offset)?;
    }
    Ok(TrackEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        artists: row.get(2)?,
        year: row.get(3)?,
        popularity: row.get(4)?,
        features: FeatureVector::new(values),
    })
}

impl SqliteCatalogStore {
    /// Open the catalog database, migrating the schema if needed.
    ///
    /// `read_pool_size` connections are opened read-only and handed out
    /// round-robin for concurrent request handling.
    pub fn new<P: AsRef<Path>>(db_path: P, read_pool_size: usize) -> Result<Self> {
        let db_path = db_path.as_ref();

        let mut setup_conn = Connection::open_with_flags(
            db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open catalog database")?;

        migrate_if_needed(&mut setup_conn)?;
        setup_conn.pragma_update(None, "journal_mode", "WAL")?;

        let track_count: i64 = setup_conn
            .query_row("SELECT COUNT(*) FROM tracks", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened track catalog: {} tracks", track_count);

        let mut title_vocabulary = TitleVocabulary::new();
        {
            let mut statement = setup_conn.prepare("SELECT name FROM tracks")?;
            let mut rows = statement.query([])?;
            while let Some(row) = rows.next()? {
                let name: String = row.get(0)?;
                title_vocabulary.add_title(&name);
            }
        }
        debug!(
            "Built title vocabulary with {} words",
            title_vocabulary.len()
        );
        drop(setup_conn);

        let mut read_pool = Vec::with_capacity(read_pool_size.max(1));
        for _ in 0..read_pool_size.max(1) {
            let read_conn = Connection::open_with_flags(
                db_path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_URI
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            read_pool.push(Arc::new(Mutex::new(read_conn)));
        }

        Ok(SqliteCatalogStore {
            read_pool,
            read_index: Arc::new(AtomicUsize::new(0)),
            title_vocabulary: Arc::new(title_vocabulary),
        })
    }

    fn get_read_conn(&self) -> Arc<Mutex<Connection>> {
        let index = self.read_index.fetch_add(1, Ordering::SeqCst) % self.read_pool.len();
        self.read_pool[index].clone()
    }

    fn find_by_title_substring(&self, query: &str) -> Result<Option<TrackEntry>> {
        let pattern = format!("%{}%", escape_like_pattern(query.trim()));
        let conn = self.get_read_conn();
        let conn = conn.lock().unwrap();
        let sql = format!(
            "SELECT {} FROM tracks WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id LIMIT 1",
            TRACK_COLUMNS
        );
        conn.query_row(&sql, params![pattern], row_to_track)
            .optional()
            .context("Title lookup failed")
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn get_track(&self, id: &str) -> Result<Option<TrackEntry>> {
        let conn = self.get_read_conn();
        let conn = conn.lock().unwrap();
        let sql = format!("SELECT {} FROM tracks WHERE id = ?1", TRACK_COLUMNS);
        conn.query_row(&sql, params![id], row_to_track)
            .optional()
            .context("Track lookup failed")
    }

    fn find_track_by_title(&self, query: &str) -> Result<Option<TrackEntry>> {
        if let Some(track) = self.find_by_title_substring(query)? {
            return Ok(Some(track));
        }

        // Retry once with the query corrected against known title words.
        let Some(corrected) = self
            .title_vocabulary
            .correct_query(query, TITLE_TYPO_MAX_DISTANCE)
        else {
            return Ok(None);
        };
        debug!("Retrying title lookup: {:?} -> {:?}", query, corrected);
        self.find_by_title_substring(&corrected)
    }

    fn get_all_tracks_except(&self, id: &str) -> Result<Vec<TrackEntry>> {
        let conn = self.get_read_conn();
        let conn = conn.lock().unwrap();
        let sql = format!(
            "SELECT {} FROM tracks WHERE id != ?1 ORDER BY id",
            TRACK_COLUMNS
        );
        let mut statement = conn.prepare(&sql)?;
        let rows = statement.query_map(params![id], row_to_track)?;
        let mut tracks = Vec::new();
        for row in rows {
            tracks.push(row?);
        }
        Ok(tracks)
    }

    fn find_albums(
        &self,
        artist: &str,
        from_year: Option<i64>,
        to_year: Option<i64>,
    ) -> Result<Vec<AlbumEntry>> {
        let pattern = format!("%{}%", escape_like_pattern(artist.trim()));
        let conn = self.get_read_conn();
        let conn = conn.lock().unwrap();
        let mut statement = conn.prepare(
            "SELECT id, name, year FROM tracks \
             WHERE artists LIKE ?1 ESCAPE '\\' \
               AND (?2 IS NULL OR year >= ?2) \
               AND (?3 IS NULL OR year <= ?3) \
             ORDER BY popularity DESC, id",
        )?;
        let rows = statement.query_map(params![pattern, from_year, to_year], |row| {
            Ok(AlbumEntry {
                id: row.get(0)?,
                name: row.get(1)?,
                year: row.get(2)?,
            })
        })?;
        let mut albums = Vec::new();
        for row in rows {
            albums.push(row?);
        }
        Ok(albums)
    }

    fn get_tracks_count(&self) -> Result<usize> {
        let conn = self.get_read_conn();
        let conn = conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tracks", [], |r| r.get(0))
            .context("Track count failed")?;
        Ok(count as usize)
    }
}
