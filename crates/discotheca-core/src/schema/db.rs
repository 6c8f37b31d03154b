use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Format, Release, ReleaseLabel, ReleaseVideo, Track};

use super::ddl::{ColumnSpec, Schema, SchemaVariant, DROP_SQL, STAMP_TABLE};

/// A database connection with schema and row-level operations for the
/// release catalog.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

/// The version stamp written by the most recent [`Database::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaStamp {
    pub variant: SchemaVariant,
    pub version: u32,
    pub applied_at: DateTime<Utc>,
}

impl Database {
    /// Open (or create) a database file at the given path.
    ///
    /// The schema is not touched; a fresh file has no tables until
    /// [`reset`](Self::reset) is called.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Drop and recreate the catalog tables for the given schema variant.
    ///
    /// Destructive: every existing row in the catalog tables is lost.
    /// Tolerates absent tables, so running it on a fresh database (or
    /// twice in a row) succeeds. The drop/create script runs as one
    /// batch; atomicity is whatever the engine gives batch execution.
    pub fn reset(&self, schema: &Schema) -> Result<()> {
        log::info!(
            "Resetting catalog schema to {} v{}",
            schema.variant,
            schema.version
        );
        let mut script = String::from(DROP_SQL);
        script.push_str(schema.create_sql);
        self.conn.execute_batch(&script)?;
        self.conn.execute(
            "INSERT INTO schema_info (version, variant) VALUES (?1, ?2)",
            params![schema.version, schema.variant.as_str()],
        )?;
        Ok(())
    }

    /// The stamp left by the most recent reset, or `None` on a database
    /// that was never reset.
    pub fn applied_schema(&self) -> Result<Option<SchemaStamp>> {
        if !self.table_exists(STAMP_TABLE)? {
            return Ok(None);
        }
        let row = self
            .conn
            .query_row(
                "SELECT version, variant, applied_at FROM schema_info
                 ORDER BY rowid DESC LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, u32>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()?;

        let Some((version, variant, applied_at)) = row else {
            return Ok(None);
        };
        let variant = SchemaVariant::from_name(&variant)
            .ok_or_else(|| Error::InvalidData(format!("unknown schema variant: {variant}")))?;
        let applied_at = NaiveDateTime::parse_from_str(&applied_at, "%Y-%m-%d %H:%M:%S")
            .map_err(|e| Error::InvalidData(format!("bad applied_at stamp: {e}")))?
            .and_utc();

        Ok(Some(SchemaStamp {
            variant,
            version,
            applied_at,
        }))
    }

    /// Whether a table with the given name exists.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Check the live database against the declared column sets.
    ///
    /// Every table the schema declares must exist with exactly the declared
    /// columns: name, declared type, NOT NULL flag, and primary-key flag,
    /// in declaration order.
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        for table in schema.tables {
            if !self.table_exists(table.name)? {
                return Err(Error::SchemaMismatch {
                    table: table.name,
                    detail: "table does not exist".to_string(),
                });
            }

            let mut stmt = self
                .conn
                .prepare(&format!("PRAGMA table_info({})", table.name))?;
            let actual: Vec<(String, String, bool, bool)> = stmt
                .query_map([], |row| {
                    Ok((
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, i64>(3)? != 0,
                        row.get::<_, i64>(5)? != 0,
                    ))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            if actual.len() != table.columns.len() {
                return Err(Error::SchemaMismatch {
                    table: table.name,
                    detail: format!(
                        "expected {} columns, found {}",
                        table.columns.len(),
                        actual.len()
                    ),
                });
            }
            for (actual, expected) in actual.iter().zip(table.columns) {
                check_column(table.name, actual, expected)?;
            }
        }
        Ok(())
    }

    /// Number of rows in the named table.
    pub fn row_count(&self, table: &str) -> Result<i64> {
        let count =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        Ok(count)
    }
}

fn check_column(
    table: &'static str,
    actual: &(String, String, bool, bool),
    expected: &ColumnSpec,
) -> Result<()> {
    let (name, sql_type, not_null, primary_key) = actual;
    if name != expected.name {
        return Err(Error::SchemaMismatch {
            table,
            detail: format!("expected column {}, found {}", expected.name, name),
        });
    }
    if !sql_type.eq_ignore_ascii_case(expected.sql_type) {
        return Err(Error::SchemaMismatch {
            table,
            detail: format!(
                "column {}: expected type {}, found {}",
                expected.name, expected.sql_type, sql_type
            ),
        });
    }
    if *not_null != expected.not_null {
        return Err(Error::SchemaMismatch {
            table,
            detail: format!(
                "column {}: expected NOT NULL = {}, found {}",
                expected.name, expected.not_null, not_null
            ),
        });
    }
    if *primary_key != expected.primary_key {
        return Err(Error::SchemaMismatch {
            table,
            detail: format!(
                "column {}: expected PRIMARY KEY = {}, found {}",
                expected.name, expected.primary_key, primary_key
            ),
        });
    }
    Ok(())
}

// Release rows
impl Database {
    /// Insert a release. List-valued columns are stored JSON-encoded.
    pub fn insert_release(&self, release: &Release) -> Result<()> {
        self.conn.execute(
            "INSERT INTO release (id, status, title, country, released, notes,
                                  genres, styles, master_id, data_quality)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                release.id,
                release.status,
                release.title,
                release.country,
                release.released,
                release.notes,
                serde_json::to_string(&release.genres)?,
                serde_json::to_string(&release.styles)?,
                release.master_id,
                release.data_quality,
            ],
        )?;
        Ok(())
    }

    /// Fetch a release by its catalog id.
    pub fn get_release(&self, id: i32) -> Result<Release> {
        let release = self
            .conn
            .query_row(
                "SELECT id, status, title, country, released, notes,
                        genres, styles, master_id, data_quality
                 FROM release WHERE id = ?1",
                [id],
                row_to_release,
            )
            .optional()?;
        release.ok_or_else(|| Error::NotFound {
            entity: "release",
            id: id.to_string(),
        })
    }
}

// Child rows (canonical schema only)
impl Database {
    /// Insert a label association; returns the assigned surrogate key.
    pub fn insert_release_label(&self, label: &ReleaseLabel) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO release_label (release_id, label_id, label, catno)
             VALUES (?1, ?2, ?3, ?4)",
            params![label.release_id, label.label_id, label.label, label.catno],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a video; returns the assigned surrogate key.
    pub fn insert_release_video(&self, video: &ReleaseVideo) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO release_video (release_id, duration, src, title)
             VALUES (?1, ?2, ?3, ?4)",
            params![video.release_id, video.duration, video.src, video.title],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a track; returns the assigned surrogate key.
    pub fn insert_track(&self, track: &Track) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO track (release_id, title, position, duration)
             VALUES (?1, ?2, ?3, ?4)",
            params![track.release_id, track.title, track.position, track.duration],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a format descriptor; returns the assigned surrogate key.
    pub fn insert_format(&self, format: &Format) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO format (release_id, name, qty, text)
             VALUES (?1, ?2, ?3, ?4)",
            params![format.release_id, format.name, format.qty, format.text],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All label associations for a release, in insertion order.
    pub fn labels_for_release(&self, release_id: i32) -> Result<Vec<ReleaseLabel>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, release_id, label_id, label, catno
             FROM release_label WHERE release_id = ?1 ORDER BY id",
        )?;
        let labels = stmt
            .query_map([release_id], row_to_release_label)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(labels)
    }

    /// All videos for a release, in insertion order.
    pub fn videos_for_release(&self, release_id: i32) -> Result<Vec<ReleaseVideo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, release_id, duration, src, title
             FROM release_video WHERE release_id = ?1 ORDER BY id",
        )?;
        let videos = stmt
            .query_map([release_id], row_to_release_video)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(videos)
    }

    /// All tracks for a release, in insertion order.
    pub fn tracks_for_release(&self, release_id: i32) -> Result<Vec<Track>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, release_id, title, position, duration
             FROM track WHERE release_id = ?1 ORDER BY id",
        )?;
        let tracks = stmt
            .query_map([release_id], row_to_track)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tracks)
    }

    /// All format descriptors for a release, in insertion order.
    pub fn formats_for_release(&self, release_id: i32) -> Result<Vec<Format>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, release_id, name, qty, text
             FROM format WHERE release_id = ?1 ORDER BY id",
        )?;
        let formats = stmt
            .query_map([release_id], row_to_format)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(formats)
    }
}

fn row_to_release(row: &rusqlite::Row) -> rusqlite::Result<Release> {
    let genres: Option<String> = row.get(6)?;
    let styles: Option<String> = row.get(7)?;
    Ok(Release {
        id: row.get(0)?,
        status: row.get(1)?,
        title: row.get(2)?,
        country: row.get(3)?,
        released: row.get(4)?,
        notes: row.get(5)?,
        genres: decode_list(genres.as_deref()),
        styles: decode_list(styles.as_deref()),
        master_id: row.get(8)?,
        data_quality: row.get(9)?,
    })
}

fn row_to_release_label(row: &rusqlite::Row) -> rusqlite::Result<ReleaseLabel> {
    Ok(ReleaseLabel {
        id: row.get(0)?,
        release_id: row.get(1)?,
        label_id: row.get(2)?,
        label: row.get(3)?,
        catno: row.get(4)?,
    })
}

fn row_to_release_video(row: &rusqlite::Row) -> rusqlite::Result<ReleaseVideo> {
    Ok(ReleaseVideo {
        id: row.get(0)?,
        release_id: row.get(1)?,
        duration: row.get(2)?,
        src: row.get(3)?,
        title: row.get(4)?,
    })
}

fn row_to_track(row: &rusqlite::Row) -> rusqlite::Result<Track> {
    Ok(Track {
        id: row.get(0)?,
        release_id: row.get(1)?,
        title: row.get(2)?,
        position: row.get(3)?,
        duration: row.get(4)?,
    })
}

fn row_to_format(row: &rusqlite::Row) -> rusqlite::Result<Format> {
    Ok(Format {
        id: row.get(0)?,
        release_id: row.get(1)?,
        name: row.get(2)?,
        qty: row.get(3)?,
        text: row.get(4)?,
    })
}

/// Rows written by hand may hold NULL or malformed JSON in a list column;
/// both read back as the empty list.
fn decode_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}
