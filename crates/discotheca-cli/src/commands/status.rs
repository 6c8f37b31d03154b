use anyhow::Result;
use discotheca_core::schema::{Database, Schema};
use std::path::Path;

pub fn show_status(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;

    println!("\n📊 Discotheca Status\n");
    println!("  Database: {}", db_path.display());

    let Some(stamp) = db.applied_schema()? else {
        println!("  Schema: not applied");
        println!("\n  Run `discotheca reset` to create the catalog tables");
        return Ok(());
    };

    println!(
        "  Schema: {} v{} (applied {})",
        stamp.variant, stamp.version, stamp.applied_at
    );

    let schema = Schema::for_variant(stamp.variant);
    println!("\n  Rows:");
    for table in schema.entity_tables() {
        println!("    {:<16} {}", table.name, db.row_count(table.name)?);
    }

    Ok(())
}
