//! Vendor file format support (WSM in, WWB out)
//!
//! This module contains the parser/validator for the WSM export format
//! and the serializer for the WWB import format. Each format keeps its
//! fixed offsets and delimiters as named constants in its own module.

use crate::types::ScanTable;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod wsm;
pub mod wwb;

// Re-export the format entry points
pub use wsm::WsmReader;
pub use wwb::WwbWriter;

/// Supported source export formats
///
/// Tagged so a future WSM format revision (different header block or
/// footer slice) can be added as a new validated variant instead of by
/// editing slice arithmetic in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Sennheiser WSM frequency-scan export
    Wsm,
}

impl SourceFormat {
    /// Identify the source format of a parsed table, if any
    pub fn detect(table: &ScanTable) -> Option<SourceFormat> {
        if wsm::fingerprint_matches(table) {
            Some(SourceFormat::Wsm)
        } else {
            None
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Wsm => write!(f, "WSM"),
        }
    }
}
