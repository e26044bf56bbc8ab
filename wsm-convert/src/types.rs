//! Core types for the scan converter library
//!
//! This module defines the table types the converter passes between its
//! stages and the single error enum all operations report through. The
//! converter is a pure pipeline: tables go in, tables come out, nothing
//! on disk is touched until an explicit export.

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input lacks the expected fingerprint row. Recoverable: the
    /// caller keeps the table for display and disables conversion.
    #[error("not a recognized WSM export: {0}")]
    FormatMismatch(String),

    /// The input does not have the fixed shape the remap relies on.
    /// Fatal for the conversion attempt; no partial output is written.
    #[error("input shape error: {0}")]
    Shape(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A scan table parsed from a semicolon-delimited WSM export
///
/// Rows are ordered sequences of string cells. Column identity is purely
/// positional; WSM exports carry no usable named-column structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanTable {
    /// Ordered rows of ordered cells, exactly as parsed
    pub rows: Vec<Vec<String>>,
}

impl ScanTable {
    /// Create a table from already-parsed rows
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows in the table
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A scan table that passed fingerprint validation
///
/// Only `formats::wsm::validate_and_load` can produce this type, so the
/// transform statically cannot run on an unvalidated table.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTable(ScanTable);

impl ValidatedTable {
    pub(crate) fn new(table: ScanTable) -> Self {
        Self(table)
    }

    /// The validated rows, unchanged from parsing
    pub fn rows(&self) -> &[Vec<String>] {
        &self.0.rows
    }

    /// Number of rows in the table
    pub fn row_count(&self) -> usize {
        self.0.rows.len()
    }

    /// Give the underlying table back to the caller
    pub fn into_inner(self) -> ScanTable {
        self.0
    }
}

/// One output row in the WWB layout
///
/// `frequency` carries the rebuilt display string including its trailing
/// comma (e.g. `"470.025,"`); `level` is the scaled integer string in
/// the -120..0 range (e.g. `"-60"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformattedRow {
    pub frequency: String,
    pub level: String,
}

/// The full conversion result, ready for serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReformattedTable {
    pub rows: Vec<ReformattedRow>,
}

impl ReformattedTable {
    /// Number of output rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
