//! VMaNGOS SQL generation.

use crate::error::Result;
use crate::models::{CreatureRecord, GameobjectRecord};
use chrono::NaiveDateTime;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `INSERT INTO` statement with a value line per row. Every line
/// ends in `,` except the last, which ends in `;`.
fn write_insert<W: Write>(writer: &mut W, table: &str, columns: &str, rows: &[String]) -> Result<()> {
    writeln!(writer, "INSERT INTO `{}` {} VALUES", table, columns)?;
    for (i, row) in rows.iter().enumerate() {
        let suffix = if i + 1 < rows.len() { "," } else { ";" };
        writeln!(writer, "{}{}", row, suffix)?;
    }
    Ok(())
}

/// Render the header comments followed by the creature and gameobject
/// sections. A section with no rows is left out.
pub fn write_sql<W: Write>(
    writer: &mut W,
    source_name: &str,
    generated_at: NaiveDateTime,
    creatures: &[CreatureRecord],
    gameobjects: &[GameobjectRecord],
) -> Result<()> {
    writeln!(writer, "-- VMaNGOS SQL generated from {}", source_name)?;
    writeln!(writer, "-- Generated on {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer)?;

    if !creatures.is_empty() {
        writeln!(writer, "-- CREATURES ({} total)", creatures.len())?;
        let rows: Vec<String> = creatures.iter().map(CreatureRecord::values_row).collect();
        write_insert(writer, "creature", CreatureRecord::COLUMNS, &rows)?;
    }

    if !gameobjects.is_empty() {
        if !creatures.is_empty() {
            writeln!(writer)?;
        }
        writeln!(writer, "-- GAMEOBJECTS ({} total)", gameobjects.len())?;
        let rows: Vec<String> = gameobjects.iter().map(GameobjectRecord::values_row).collect();
        write_insert(writer, "gameobject", GameobjectRecord::COLUMNS, &rows)?;
    }

    Ok(())
}

/// Create (or truncate) `path` and write the SQL as UTF-8 without a BOM.
pub fn write_sql_file(
    path: &Path,
    source_name: &str,
    generated_at: NaiveDateTime,
    creatures: &[CreatureRecord],
    gameobjects: &[GameobjectRecord],
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_sql(&mut writer, source_name, generated_at, creatures, gameobjects)?;
    writer.flush()?;
    Ok(())
}
