//! WSM (Wireless Systems Manager) export parser and validator
//!
//! WSM frequency-scan exports are semicolon-delimited CSV files with a
//! fixed shape: a 7-row metadata block whose last row is the header
//! fingerprint, the scan data rows, and a 13-row footer block at a
//! fixed offset. The fingerprint row is the sole signal that a file is
//! a WSM export; nothing else in the file is self-describing.
//!
//! ## Known Limitations
//! - Only one WSM format revision is recognized. Whether the footer
//!   slice [2728, 2741) depends on the swept frequency range is
//!   unverified; new revisions belong in `SourceFormat` as variants.

use crate::types::{ScanTable, ValidatedTable};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Row index (0-based) where the fingerprint must appear
pub const FINGERPRINT_ROW_INDEX: usize = 6;

/// Header cells identifying a WSM export, cell-for-cell and in order
pub const FINGERPRINT: [&str; 7] = [
    "Frequency",
    "RF level (%)",
    "RF level",
    "Memory (%)",
    "Memory",
    "Squelch (%)",
    "Squelch",
];

/// Metadata rows [0, HEADER_ROWS) dropped by the transform
pub const HEADER_ROWS: usize = 7;

/// First row of the fixed footer block
pub const FOOTER_START: usize = 2728;

/// One past the last row of the fixed footer block
pub const FOOTER_END: usize = 2741;

/// Minimum row count for the fixed slice boundaries to be meaningful
pub const MIN_ROWS: usize = FOOTER_END;

/// Cell delimiter in WSM exports
pub const DELIMITER: u8 = b';';

/// WSM export file reader
pub struct WsmReader;

impl WsmReader {
    /// Read and parse a WSM export file into a `ScanTable`
    ///
    /// The file handle is scoped to this call and released on all exit
    /// paths. Parsing makes no shape assumptions; validation is a
    /// separate step.
    pub fn read_file(path: &Path) -> crate::types::Result<ScanTable> {
        log::info!("Reading WSM export: {:?}", path);
        let file = File::open(path)?;
        let table = Self::read_from(BufReader::new(file))?;
        log::debug!("Parsed {} rows from {:?}", table.row_count(), path);
        Ok(table)
    }

    /// Parse semicolon-delimited text from any reader
    pub fn read_from<R: Read>(reader: R) -> crate::types::Result<ScanTable> {
        // Metadata and footer rows have fewer cells than data rows, so
        // the reader must accept variable-width records.
        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(ScanTable::new(rows))
    }
}

/// Check whether the fingerprint row identifies this table as a WSM export
///
/// Tables with fewer than 7 rows never match.
pub fn fingerprint_matches(table: &ScanTable) -> bool {
    match table.rows.get(FINGERPRINT_ROW_INDEX) {
        Some(row) => {
            row.len() == FINGERPRINT.len()
                && row.iter().zip(FINGERPRINT.iter()).all(|(cell, expected)| cell == expected)
        }
        None => false,
    }
}

/// Outcome of fingerprint validation
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// The table matched and is eligible for the transform
    Valid(ValidatedTable),
    /// The table did not match; handed back untouched for display only
    Unrecognized(ScanTable),
}

impl Validation {
    /// Whether validation succeeded
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

/// Validate a parsed table against the WSM header fingerprint
///
/// On a match the table is wrapped in [`ValidatedTable`], which is the
/// only way to make it eligible for the transform. On a mismatch the
/// table comes back unchanged so the caller can keep it for display;
/// the caller decides from this outcome whether conversion is enabled.
pub fn validate_and_load(table: ScanTable) -> Validation {
    if fingerprint_matches(&table) {
        log::debug!("WSM fingerprint matched at row {}", FINGERPRINT_ROW_INDEX);
        Validation::Valid(ValidatedTable::new(table))
    } else {
        log::debug!("No WSM fingerprint at row {}", FINGERPRINT_ROW_INDEX);
        Validation::Unrecognized(table)
    }
}
