//! SQLite schema for the release catalog.
//!
//! Two variants of the schema exist. The canonical five-table form
//! (`release`, `release_label`, `release_video`, `track`, `format`) is what
//! every row-level operation targets; the older three-table form is kept
//! for compatibility with databases created before `track` and `format`
//! were split out, and can only be created and validated.
//!
//! The imported dump is stored exactly as declared by the source catalog:
//! `release.id` is the conceptual primary key but carries no PRIMARY KEY
//! constraint, and child tables reference releases through a NOT NULL
//! `release_id` with no FOREIGN KEY behind it. Orphan child rows and
//! duplicate release ids are accepted. That gap is inherited from the
//! source schema and is documented here rather than fixed.

pub mod db;
pub mod ddl;

pub use db::{Database, SchemaStamp};
pub use ddl::{ColumnSpec, Schema, SchemaVariant, TableSpec, CANONICAL, LEGACY};
