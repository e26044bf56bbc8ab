//! Conversion session
//!
//! The session is the explicit value replacing the hidden window state
//! a GUI front end would carry. It owns at most one loaded scan table
//! (validated, or retained for display after a fingerprint mismatch)
//! and drives the load → validate → transform → serialize cycle. A new
//! open replaces the held table wholesale; nothing persists between
//! sessions.

use crate::formats::wsm::{self, Validation, WsmReader};
use crate::formats::wwb::WwbWriter;
use crate::transform;
use crate::types::{ConvertError, ReformattedTable, Result, ScanTable, ValidatedTable};
use std::path::Path;

/// What the session currently holds
#[derive(Debug)]
enum Loaded {
    /// Passed validation; eligible for conversion
    Convertible(ValidatedTable),
    /// Failed validation; kept for display only
    DisplayOnly(ScanTable),
}

/// A single load/convert/export cycle over one scan table
///
/// # Example Usage
/// ```no_run
/// use wsm_convert::Session;
/// use std::path::Path;
///
/// let mut session = Session::new();
/// session.open(Path::new("scan.csv")).unwrap();
/// assert!(session.can_convert());
/// session.export(Path::new("scan_wwb.csv")).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<Loaded>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a WSM export and validate its fingerprint
    ///
    /// On a mismatch the parsed table is still held for display, but
    /// conversion stays disabled and `FormatMismatch` is returned so
    /// the caller can tell the user the file does not look right.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let table = WsmReader::read_file(path)?;
        match wsm::validate_and_load(table) {
            Validation::Valid(valid) => {
                log::info!("WSM fingerprint matched; {} rows loaded", valid.row_count());
                self.loaded = Some(Loaded::Convertible(valid));
                Ok(())
            }
            Validation::Unrecognized(table) => {
                log::warn!("No WSM fingerprint in {:?}; kept for display only", path);
                self.loaded = Some(Loaded::DisplayOnly(table));
                Err(ConvertError::FormatMismatch(
                    "this does not look like a WSM export".to_string(),
                ))
            }
        }
    }

    /// Whether the held table passed validation
    ///
    /// This is what the front end keys its convert action off.
    pub fn can_convert(&self) -> bool {
        matches!(self.loaded, Some(Loaded::Convertible(_)))
    }

    /// Number of rows currently held, if any
    pub fn row_count(&self) -> Option<usize> {
        match &self.loaded {
            Some(Loaded::Convertible(table)) => Some(table.row_count()),
            Some(Loaded::DisplayOnly(table)) => Some(table.row_count()),
            None => None,
        }
    }

    /// Run the transform over the held validated table
    pub fn convert(&self) -> Result<ReformattedTable> {
        match &self.loaded {
            Some(Loaded::Convertible(valid)) => transform::transform(valid),
            _ => Err(ConvertError::FormatMismatch(
                "no validated WSM table loaded".to_string(),
            )),
        }
    }

    /// Convert and write the WWB import file in one step
    ///
    /// The transform runs to completion before the destination is
    /// opened, so a shape error never leaves a partial file behind.
    pub fn export(&self, path: &Path) -> Result<()> {
        let reformatted = self.convert()?;
        WwbWriter::write_file(path, &reformatted)?;
        log::info!("Saved WWB import file: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session() {
        let session = Session::new();
        assert!(!session.can_convert());
        assert!(session.row_count().is_none());
        assert!(matches!(
            session.convert(),
            Err(ConvertError::FormatMismatch(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let mut session = Session::new();
        let err = session.open(Path::new("/nonexistent/scan.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
        assert!(!session.can_convert());
    }
}
