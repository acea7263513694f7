use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{BomError, Result};
use crate::interface::render::display_materials;
use crate::models::MaterialMap;

/// Write the map as CSV rows of `ingredient,quantity,unit`.
pub fn write_csv<W: Write>(map: &MaterialMap, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ingredient", "quantity", "unit"])?;
    for (id, entry) in map.iter() {
        let quantity = format!("{:.3}", entry.quantity);
        wtr.write_record([id, quantity.as_str(), entry.unit.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the map as a pretty-printed JSON object.
pub fn write_json<W: Write>(map: &MaterialMap, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, map).map_err(|e| BomError::json("materials", e))?;
    writeln!(writer)?;
    Ok(())
}

/// Emit the map in `format`, to `output` when given, else stdout.
///
/// Table output always goes to stdout.
pub fn export_materials(
    map: &MaterialMap,
    title: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    match (format, output) {
        (OutputFormat::Table, _) => {
            display_materials(map, title);
            Ok(())
        }
        (OutputFormat::Csv, Some(path)) => write_csv(map, File::create(path)?),
        (OutputFormat::Csv, None) => write_csv(map, io::stdout().lock()),
        (OutputFormat::Json, Some(path)) => write_json(map, File::create(path)?),
        (OutputFormat::Json, None) => write_json(map, io::stdout().lock()),
    }
}
