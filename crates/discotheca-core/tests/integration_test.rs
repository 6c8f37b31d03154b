//! Integration tests for the schema lifecycle: reset → validate → inspect.
//!
//! These run against temporary on-disk databases to exercise the same code
//! paths the CLI uses; in-memory connections cover the rest.

use tempfile::TempDir;

use discotheca_core::model::{Release, Track};
use discotheca_core::schema::{Database, SchemaVariant, CANONICAL, LEGACY};

#[test]
fn reset_creates_the_declared_tables() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    let db = Database::open(&db_path).expect("Failed to open database");
    db.reset(&CANONICAL).expect("Failed to reset schema");

    db.validate(&CANONICAL)
        .expect("Live schema should match its own declaration");
    for table in ["release", "release_label", "release_video", "track", "format"] {
        assert!(db.table_exists(table).unwrap(), "missing table {table}");
    }
}

#[test]
fn reset_twice_in_succession_succeeds() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&CANONICAL).expect("First reset failed");
    db.reset(&CANONICAL).expect("Second reset failed");
    db.validate(&CANONICAL).unwrap();
}

#[test]
fn reset_discards_existing_rows() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&CANONICAL).unwrap();
    db.insert_release(&Release::new(1).with_title("Doomed")).unwrap();
    assert_eq!(db.row_count("release").unwrap(), 1);

    db.reset(&CANONICAL).unwrap();
    assert_eq!(db.row_count("release").unwrap(), 0);
}

/// No foreign key is declared, so a child row pointing at a release id that
/// was never inserted goes in without complaint. Inherited from the source
/// schema; documented behavior, not a bug to fix here.
#[test]
fn orphan_child_rows_are_accepted() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&CANONICAL).unwrap();

    db.insert_track(&Track::new(999).with_title("Phantom"))
        .expect("Orphan track should be accepted");
    assert_eq!(db.tracks_for_release(999).unwrap().len(), 1);
}

/// `release.id` carries no PRIMARY KEY constraint either; the dump is
/// trusted to be unique on it.
#[test]
fn duplicate_release_ids_are_accepted() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&CANONICAL).unwrap();

    db.insert_release(&Release::new(1).with_title("First")).unwrap();
    db.insert_release(&Release::new(1).with_title("Second"))
        .expect("Duplicate release id should be accepted");
    assert_eq!(db.row_count("release").unwrap(), 2);
}

#[test]
fn genres_and_styles_keep_order_and_duplicates() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&CANONICAL).unwrap();

    let release = Release::new(10)
        .with_genres(["Electronic", "Rock", "Electronic"])
        .with_styles(["House", "Acid House"]);
    db.insert_release(&release).unwrap();

    let fetched = db.get_release(10).unwrap();
    assert_eq!(fetched.genres, vec!["Electronic", "Rock", "Electronic"]);
    assert_eq!(fetched.styles, vec!["House", "Acid House"]);
}

#[test]
fn release_with_track_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("catalog.db");

    let db = Database::open(&db_path).unwrap();
    db.reset(&CANONICAL).unwrap();

    db.insert_release(&Release::new(1).with_title("Test")).unwrap();
    db.insert_track(
        &Track::new(1)
            .with_title("A")
            .with_position("A1")
            .with_duration("3:30"),
    )
    .unwrap();

    let tracks = db.tracks_for_release(1).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, Some("A".to_string()));
    assert_eq!(tracks[0].position, Some("A1".to_string()));
    assert_eq!(tracks[0].duration, Some("3:30".to_string()));
}

#[test]
fn legacy_schema_creates_and_validates() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&LEGACY).unwrap();

    db.validate(&LEGACY).unwrap();
    assert!(!db.table_exists("track").unwrap());
    assert!(!db.table_exists("format").unwrap());

    // The canonical declaration must not pass against a legacy database.
    assert!(db.validate(&CANONICAL).is_err());
}

#[test]
fn validate_rejects_a_drifted_table() {
    let db = Database::open_in_memory().unwrap();
    db.reset(&CANONICAL).unwrap();

    db.conn()
        .execute_batch("DROP TABLE track; CREATE TABLE track (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT);")
        .unwrap();

    let err = db.validate(&CANONICAL).unwrap_err();
    assert!(err.to_string().contains("track"));
}

#[test]
fn applied_schema_reflects_the_last_reset() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.applied_schema().unwrap().is_none());

    db.reset(&LEGACY).unwrap();
    let stamp = db.applied_schema().unwrap().unwrap();
    assert_eq!(stamp.variant, SchemaVariant::Legacy);
    assert_eq!(stamp.version, 1);

    db.reset(&CANONICAL).unwrap();
    let stamp = db.applied_schema().unwrap().unwrap();
    assert_eq!(stamp.variant, SchemaVariant::Canonical);
    assert_eq!(stamp.version, 2);
}
