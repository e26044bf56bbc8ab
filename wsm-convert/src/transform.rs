//! The WSM → WWB row remap
//!
//! A deterministic, single-pass, index-based restructuring of a
//! validated scan table. The fixed offsets come from the WSM format
//! module; the index arithmetic mirrors the legacy converter exactly so
//! the output stays byte-compatible with what WWB already accepts.
//!
//! The transform is pure: it reads the validated table and builds a new
//! one. It never re-validates - the `ValidatedTable` parameter type
//! makes running it on an unvalidated table impossible.

use crate::formats::wsm::{FOOTER_END, FOOTER_START, HEADER_ROWS, MIN_ROWS};
use crate::types::{ConvertError, ReformattedRow, ReformattedTable, Result, ValidatedTable};

/// Digits before the decimal point in the frequency display.
/// WSM writes "470025" for 470.025 MHz.
const FREQ_INTEGER_DIGITS: usize = 3;

/// Cells a data row must still have once the derived columns are gone
const MIN_DATA_CELLS: usize = 2;

/// Remap a validated WSM table into the WWB row layout
///
/// Steps, on the original row indices:
/// 1. drop the footer slice [2728, 2741) - always emitted by WSM at
///    that fixed offset, so a shorter table is a fatal shape error;
/// 2. drop the metadata block [0, 7);
/// 3. per remaining row, drop the derived/percentage cells [2, 7),
///    rebuild the frequency display from cell 0 and the scaled level
///    from cell 1.
///
/// Any row left with too few usable cells aborts the whole conversion.
/// WWB requires every row well-formed, so there is no partial success
/// and no silent row skipping.
pub fn transform(table: &ValidatedTable) -> Result<ReformattedTable> {
    let rows = table.rows();
    if rows.len() < MIN_ROWS {
        return Err(ConvertError::Shape(format!(
            "expected at least {} rows, got {}",
            MIN_ROWS,
            rows.len()
        )));
    }

    log::debug!(
        "Transforming {} rows ({} data rows expected)",
        rows.len(),
        rows.len() - HEADER_ROWS - (FOOTER_END - FOOTER_START)
    );

    // Footer first, header second, matching the legacy deletion order
    // on the original indices. What survives is [7, 2728) plus
    // everything past the footer.
    let data_rows = rows[..FOOTER_START]
        .iter()
        .chain(rows[FOOTER_END..].iter())
        .skip(HEADER_ROWS);

    let mut out = Vec::with_capacity(rows.len() - HEADER_ROWS - (FOOTER_END - FOOTER_START));
    for (i, row) in data_rows.enumerate() {
        let reformatted = reformat_row(row).map_err(|e| match e {
            ConvertError::Shape(msg) => ConvertError::Shape(format!("data row {}: {}", i, msg)),
            other => other,
        })?;
        out.push(reformatted);
    }

    Ok(ReformattedTable { rows: out })
}

/// Remap one data row
///
/// Dropping the derived cells [2, 7) leaves cells 0 (frequency) and 1
/// (RF level %); everything in the output is rebuilt from those two.
fn reformat_row(row: &[String]) -> Result<ReformattedRow> {
    if row.len() < MIN_DATA_CELLS {
        return Err(ConvertError::Shape(format!(
            "need at least {} cells, got {}",
            MIN_DATA_CELLS,
            row.len()
        )));
    }

    Ok(ReformattedRow {
        frequency: frequency_display(&row[0]),
        level: scale_level(&row[1])?,
    })
}

/// Build the WWB frequency display from a WSM frequency cell
///
/// WSM writes frequencies without a decimal point; WWB expects the
/// point after the first three digits plus a trailing comma:
/// `"470025"` becomes `"470.025,"`. A pure string operation - the cell
/// is never interpreted numerically.
pub fn frequency_display(raw: &str) -> String {
    let split = raw
        .char_indices()
        .map(|(i, _)| i)
        .nth(FREQ_INTEGER_DIGITS)
        .unwrap_or(raw.len());
    format!("{}.{},", &raw[..split], &raw[split..])
}

/// Map an RF level percentage onto the -120..0 scale WWB expects
///
/// `round(value / 100 * 120 - 120)`, formatted as an integer string:
/// 0% is -120, 50% is -60, 100% is 0.
pub fn scale_level(raw: &str) -> Result<String> {
    let percent: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConvertError::Shape(format!("RF level cell is not numeric: {:?}", raw)))?;

    let scaled = (percent / 100.0 * 120.0 - 120.0).round() as i64;
    Ok(scaled.to_string())
}
