use anyhow::{Context, Result};
use discotheca_core::schema::{Database, CANONICAL, LEGACY};
use std::path::Path;

pub fn run_validate(db_path: &Path, legacy: bool) -> Result<()> {
    let schema = if legacy { &LEGACY } else { &CANONICAL };

    let db = Database::open(db_path)?;
    db.validate(schema).with_context(|| {
        format!(
            "{} does not match the declared {} schema",
            db_path.display(),
            schema.variant
        )
    })?;

    println!(
        "✓ Schema matches the declared {} form ({} tables)",
        schema.variant,
        schema.tables.len()
    );
    Ok(())
}
