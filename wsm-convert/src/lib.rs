//! WSM → WWB Scan Converter Library
//!
//! Converts radio-frequency spectrum scans exported from Sennheiser's
//! Wireless Systems Manager (WSM, semicolon-delimited CSV) into the
//! space-delimited, headerless layout Shure's Wireless Workbench (WWB)
//! imports for frequency planning.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on the conversion:
//! - Parses WSM exports and validates them by their header fingerprint
//! - Remaps the fixed-shape scan table into WWB's frequency/level rows
//! - Serializes the result as headerless, space-delimited UTF-8
//!
//! The library does NOT:
//! - Own any user interface (dialogs, windows, status lines)
//! - Stream or chunk large files
//! - Support variable-schema inputs or configurable output formats
//!
//! All user interaction lives in the front end (wsm-convert-cli), which
//! drives the [`Session`] type through open, convert and export.
//!
//! # Example Usage
//!
//! ```no_run
//! use wsm_convert::{transform, WsmReader, WwbWriter};
//! use wsm_convert::formats::wsm::{self, Validation};
//! use std::path::Path;
//!
//! let table = WsmReader::read_file(Path::new("scan.csv")).unwrap();
//!
//! match wsm::validate_and_load(table) {
//!     Validation::Valid(valid) => {
//!         let reformatted = transform(&valid).unwrap();
//!         WwbWriter::write_file(Path::new("scan_wwb.csv"), &reformatted).unwrap();
//!     }
//!     Validation::Unrecognized(_) => eprintln!("not a WSM export"),
//! }
//! ```

// Public modules
pub mod formats;
pub mod session;
pub mod transform;
pub mod types;

// Re-export main types for convenience
pub use formats::wsm::{Validation, WsmReader};
pub use formats::wwb::WwbWriter;
pub use formats::SourceFormat;
pub use session::Session;
pub use transform::transform;
pub use types::{
    ConvertError, ReformattedRow, ReformattedTable, Result, ScanTable, ValidatedTable,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
