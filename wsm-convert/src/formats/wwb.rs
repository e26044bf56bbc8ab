//! WWB (Wireless Workbench) import serializer
//!
//! WWB imports a headerless, space-delimited, UTF-8 CSV of
//! frequency/level pairs, one pair per line, `\n` terminated. The
//! frequency cell carries its own trailing comma, so an output line
//! reads `470.025, -60`.

use crate::types::{ConvertError, ReformattedTable, Result};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Cell delimiter in WWB import files
pub const DELIMITER: u8 = b' ';

/// WWB import file writer
pub struct WwbWriter;

impl WwbWriter {
    /// Serialize a reformatted table to a file
    ///
    /// The file handle is scoped to this call. Nothing is written until
    /// the caller already holds a complete `ReformattedTable`, so a
    /// failed transform never leaves a partial file behind.
    pub fn write_file(path: &Path, table: &ReformattedTable) -> Result<()> {
        log::info!("Writing WWB import file: {:?}", path);
        let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_path(path)?;
        for row in &table.rows {
            writer.write_record([row.frequency.as_str(), row.level.as_str()])?;
        }
        writer.flush()?;
        log::debug!("Wrote {} rows to {:?}", table.row_count(), path);
        Ok(())
    }

    /// Serialize a reformatted table to any writer
    pub fn write_to<W: Write>(writer: W, table: &ReformattedTable) -> Result<()> {
        let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_writer(writer);
        for row in &table.rows {
            writer.write_record([row.frequency.as_str(), row.level.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Serialize a reformatted table to an in-memory string
    pub fn to_string(table: &ReformattedTable) -> Result<String> {
        let mut buf = Vec::new();
        Self::write_to(&mut buf, table)?;
        String::from_utf8(buf)
            .map_err(|e| ConvertError::Shape(format!("serialized output is not UTF-8: {}", e)))
    }
}
