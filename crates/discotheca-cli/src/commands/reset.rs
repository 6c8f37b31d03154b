use anyhow::{Context, Result};
use discotheca_core::schema::{Database, CANONICAL, LEGACY};
use std::path::Path;

pub fn run_reset(db_path: &Path, legacy: bool) -> Result<()> {
    let schema = if legacy { &LEGACY } else { &CANONICAL };

    log::warn!(
        "Dropping and recreating all catalog tables in {}",
        db_path.display()
    );

    let db = Database::open(db_path)?;
    db.reset(schema)
        .with_context(|| format!("Failed to reset schema in {}", db_path.display()))?;

    println!("✓ Schema reset to {} v{}", schema.variant, schema.version);
    println!("  Database: {}", db_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::validate::run_validate;
    use tempfile::TempDir;

    #[test]
    fn test_reset_then_validate() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("catalog.db");

        run_reset(&db_path, false).unwrap();
        run_validate(&db_path, false).unwrap();
    }

    #[test]
    fn test_validate_flags_wrong_variant() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("catalog.db");

        run_reset(&db_path, true).unwrap();
        assert!(run_validate(&db_path, false).is_err());
        run_validate(&db_path, true).unwrap();
    }
}
