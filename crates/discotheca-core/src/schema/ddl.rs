//! Table definitions for both schema variants.
//!
//! Each variant pairs the DDL text that creates it with declarative column
//! specs that validation checks the live database against.

use std::fmt;

/// Which form of the schema a [`Schema`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVariant {
    /// The superseding five-table form with surrogate keys on child tables.
    Canonical,
    /// The older three-table form, without surrogate keys.
    Legacy,
}

impl SchemaVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Legacy => "legacy",
        }
    }

    /// Inverse of [`as_str`](Self::as_str), for reading stamps back.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "canonical" => Some(Self::Canonical),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected shape of one column, as `PRAGMA table_info` reports it.
#[derive(Debug)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub not_null: bool,
    pub primary_key: bool,
}

/// Expected shape of one table.
#[derive(Debug)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

/// A complete schema variant: the DDL that creates it plus the column
/// specs validation checks it against.
#[derive(Debug)]
pub struct Schema {
    pub variant: SchemaVariant,
    pub version: u32,
    pub create_sql: &'static str,
    pub tables: &'static [TableSpec],
}

impl Schema {
    #[must_use]
    pub fn for_variant(variant: SchemaVariant) -> &'static Self {
        match variant {
            SchemaVariant::Canonical => &CANONICAL,
            SchemaVariant::Legacy => &LEGACY,
        }
    }

    /// Entity tables, excluding the version-stamp bookkeeping table.
    pub fn entity_tables(&self) -> impl Iterator<Item = &TableSpec> {
        self.tables.iter().filter(|t| t.name != STAMP_TABLE)
    }
}

/// Bookkeeping table recording which variant the last reset applied.
pub const STAMP_TABLE: &str = "schema_info";

/// Drops every catalog table plus the version stamp, children first.
///
/// The source schema relied on `DROP TABLE ... CASCADE`; SQLite has no
/// CASCADE on DROP, so the child-first order does the same work. `IF
/// EXISTS` keeps a reset of a fresh database from failing.
pub const DROP_SQL: &str = r#"
DROP TABLE IF EXISTS format;
DROP TABLE IF EXISTS track;
DROP TABLE IF EXISTS release_video;
DROP TABLE IF EXISTS release_label;
DROP TABLE IF EXISTS release;
DROP TABLE IF EXISTS schema_info;
"#;

const CANONICAL_SQL: &str = r#"
-- Version stamp, rewritten on every reset
CREATE TABLE schema_info (
    version INTEGER NOT NULL,
    variant TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Releases imported from the external catalog. `id` is the catalog's own
-- identifier; neither it nor the `release_id` columns below carry key
-- constraints, matching the source declarations.
CREATE TABLE release (
    id INTEGER NOT NULL,
    status TEXT,
    title TEXT,
    country TEXT,
    released TEXT,
    notes TEXT,
    genres TEXT,            -- JSON array of genre names, catalog order
    styles TEXT,            -- JSON array of style names, catalog order
    master_id INTEGER,
    data_quality TEXT
);

-- Label / catalog-number associations
CREATE TABLE release_label (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    release_id INTEGER NOT NULL,
    label_id INTEGER,
    label TEXT,
    catno TEXT
);

-- Promotional videos
CREATE TABLE release_video (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    release_id INTEGER NOT NULL,
    duration INTEGER,       -- seconds
    src TEXT,
    title TEXT
);

-- Tracklist entries; position and duration stay textual ("A1", "3:45")
CREATE TABLE track (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    release_id INTEGER NOT NULL,
    title TEXT,
    position TEXT,
    duration TEXT
);

-- Physical/medium format descriptors
CREATE TABLE format (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    release_id INTEGER NOT NULL,
    name TEXT,
    qty TEXT,
    text TEXT
);
"#;

const LEGACY_SQL: &str = r#"
-- Version stamp, rewritten on every reset
CREATE TABLE schema_info (
    version INTEGER NOT NULL,
    variant TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Releases imported from the external catalog
CREATE TABLE release (
    id INTEGER NOT NULL,
    status TEXT,
    title TEXT,
    country TEXT,
    released TEXT,
    notes TEXT,
    genres TEXT,            -- JSON array of genre names, catalog order
    styles TEXT,            -- JSON array of style names, catalog order
    master_id INTEGER,
    data_quality TEXT
);

-- Label / catalog-number associations, pre-surrogate-key column order
CREATE TABLE release_label (
    release_id INTEGER NOT NULL,
    label TEXT,
    catno TEXT,
    label_id INTEGER
);

-- Promotional videos, pre-surrogate-key form
CREATE TABLE release_video (
    release_id INTEGER NOT NULL,
    duration INTEGER,
    src TEXT,
    title TEXT
);
"#;

const STAMP_SPEC: TableSpec = TableSpec {
    name: STAMP_TABLE,
    columns: &[
        ColumnSpec { name: "version", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "variant", sql_type: "TEXT", not_null: true, primary_key: false },
        ColumnSpec { name: "applied_at", sql_type: "TEXT", not_null: true, primary_key: false },
    ],
};

const RELEASE_SPEC: TableSpec = TableSpec {
    name: "release",
    columns: &[
        ColumnSpec { name: "id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "status", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "title", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "country", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "released", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "notes", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "genres", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "styles", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "master_id", sql_type: "INTEGER", not_null: false, primary_key: false },
        ColumnSpec { name: "data_quality", sql_type: "TEXT", not_null: false, primary_key: false },
    ],
};

const RELEASE_LABEL_SPEC: TableSpec = TableSpec {
    name: "release_label",
    columns: &[
        ColumnSpec { name: "id", sql_type: "INTEGER", not_null: false, primary_key: true },
        ColumnSpec { name: "release_id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "label_id", sql_type: "INTEGER", not_null: false, primary_key: false },
        ColumnSpec { name: "label", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "catno", sql_type: "TEXT", not_null: false, primary_key: false },
    ],
};

const RELEASE_VIDEO_SPEC: TableSpec = TableSpec {
    name: "release_video",
    columns: &[
        ColumnSpec { name: "id", sql_type: "INTEGER", not_null: false, primary_key: true },
        ColumnSpec { name: "release_id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "duration", sql_type: "INTEGER", not_null: false, primary_key: false },
        ColumnSpec { name: "src", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "title", sql_type: "TEXT", not_null: false, primary_key: false },
    ],
};

const TRACK_SPEC: TableSpec = TableSpec {
    name: "track",
    columns: &[
        ColumnSpec { name: "id", sql_type: "INTEGER", not_null: false, primary_key: true },
        ColumnSpec { name: "release_id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "title", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "position", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "duration", sql_type: "TEXT", not_null: false, primary_key: false },
    ],
};

const FORMAT_SPEC: TableSpec = TableSpec {
    name: "format",
    columns: &[
        ColumnSpec { name: "id", sql_type: "INTEGER", not_null: false, primary_key: true },
        ColumnSpec { name: "release_id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "name", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "qty", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "text", sql_type: "TEXT", not_null: false, primary_key: false },
    ],
};

const LEGACY_RELEASE_LABEL_SPEC: TableSpec = TableSpec {
    name: "release_label",
    columns: &[
        ColumnSpec { name: "release_id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "label", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "catno", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "label_id", sql_type: "INTEGER", not_null: false, primary_key: false },
    ],
};

const LEGACY_RELEASE_VIDEO_SPEC: TableSpec = TableSpec {
    name: "release_video",
    columns: &[
        ColumnSpec { name: "release_id", sql_type: "INTEGER", not_null: true, primary_key: false },
        ColumnSpec { name: "duration", sql_type: "INTEGER", not_null: false, primary_key: false },
        ColumnSpec { name: "src", sql_type: "TEXT", not_null: false, primary_key: false },
        ColumnSpec { name: "title", sql_type: "TEXT", not_null: false, primary_key: false },
    ],
};

/// The superseding five-table schema.
pub const CANONICAL: Schema = Schema {
    variant: SchemaVariant::Canonical,
    version: 2,
    create_sql: CANONICAL_SQL,
    tables: &[
        STAMP_SPEC,
        RELEASE_SPEC,
        RELEASE_LABEL_SPEC,
        RELEASE_VIDEO_SPEC,
        TRACK_SPEC,
        FORMAT_SPEC,
    ],
};

/// The older three-table schema.
pub const LEGACY: Schema = Schema {
    variant: SchemaVariant::Legacy,
    version: 1,
    create_sql: LEGACY_SQL,
    tables: &[
        STAMP_SPEC,
        RELEASE_SPEC,
        LEGACY_RELEASE_LABEL_SPEC,
        LEGACY_RELEASE_VIDEO_SPEC,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_declares_five_entity_tables() {
        let names: Vec<&str> = CANONICAL.entity_tables().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["release", "release_label", "release_video", "track", "format"]
        );
    }

    #[test]
    fn test_legacy_lacks_track_and_format() {
        let names: Vec<&str> = LEGACY.entity_tables().map(|t| t.name).collect();
        assert_eq!(names, vec!["release", "release_label", "release_video"]);
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in [SchemaVariant::Canonical, SchemaVariant::Legacy] {
            assert_eq!(SchemaVariant::from_name(variant.as_str()), Some(variant));
        }
        assert_eq!(SchemaVariant::from_name("v3"), None);
    }

    #[test]
    fn test_drop_sql_covers_every_entity_table() {
        for table in CANONICAL.entity_tables() {
            assert!(
                DROP_SQL.contains(&format!("DROP TABLE IF EXISTS {};", table.name)),
                "drop script misses {}",
                table.name
            );
        }
    }

    #[test]
    fn test_create_sql_matches_specs() {
        for schema in [&CANONICAL, &LEGACY] {
            for table in schema.tables {
                assert!(
                    schema.create_sql.contains(&format!("CREATE TABLE {} (", table.name)),
                    "{} create script misses {}",
                    schema.variant,
                    table.name
                );
            }
        }
    }
}
