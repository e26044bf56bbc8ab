//! End-to-end conversion tests over synthetic WSM exports
//!
//! These build a complete semicolon-delimited WSM file on disk, drive
//! the pipeline through `Session` exactly like the CLI does, and check
//! the WWB output byte-for-byte.

use std::fs;
use std::path::PathBuf;

use wsm_convert::formats::wsm::{
    FINGERPRINT, FINGERPRINT_ROW_INDEX, FOOTER_END, FOOTER_START, HEADER_ROWS,
};
use wsm_convert::{ConvertError, ScanTable, Session, SourceFormat, WsmReader};

/// Render a synthetic WSM export: metadata block, fingerprint at row 6,
/// data rows up to the footer, the 13-row footer, and `extra` more data
/// rows after it.
fn wsm_export_text(extra: usize) -> String {
    let mut lines = Vec::new();
    for i in 0..HEADER_ROWS {
        if i == FINGERPRINT_ROW_INDEX {
            lines.push(FINGERPRINT.join(";"));
        } else {
            lines.push(format!("WSM metadata {}", i));
        }
    }
    for i in 0..(FOOTER_START - HEADER_ROWS) {
        lines.push(data_line(i));
    }
    for _ in FOOTER_START..FOOTER_END {
        lines.push("end of scan;".to_string());
    }
    for i in 0..extra {
        lines.push(data_line(FOOTER_START - HEADER_ROWS + i));
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn data_line(i: usize) -> String {
    let freq = 470_000 + i * 25;
    let level = i % 101;
    format!("{};{};-60 dBm;0;-120 dBm;0;-120 dBm", freq, level)
}

/// The WWB line the pipeline must emit for data row `i`
fn expected_line(i: usize) -> String {
    let freq = (470_000 + i * 25).to_string();
    let level = ((i % 101) as f64 / 100.0 * 120.0 - 120.0).round() as i64;
    format!("{}.{}, {}", &freq[..3], &freq[3..], level)
}

fn write_input(dir: &tempfile::TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("scan.csv");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn converts_a_full_wsm_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &wsm_export_text(0));
    let output = dir.path().join("scan_wwb.csv");

    let mut session = Session::new();
    session.open(&input).unwrap();
    assert!(session.can_convert());
    session.export(&output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), FOOTER_START - HEADER_ROWS);

    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, expected_line(i), "line {} differs", i);
    }

    // Spot checks against hand-computed values
    assert_eq!(lines[0], "470.000, -120");
    assert_eq!(lines[50], "471.250, -60");
    assert_eq!(lines[100], "472.500, 0");
    assert!(written.ends_with('\n'));
}

#[test]
fn converts_rows_past_the_footer() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &wsm_export_text(8));
    let output = dir.path().join("scan_wwb.csv");

    let mut session = Session::new();
    session.open(&input).unwrap();
    session.export(&output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), FOOTER_START - HEADER_ROWS + 8);
}

#[test]
fn rejects_a_file_without_the_fingerprint() {
    let dir = tempfile::tempdir().unwrap();
    let text = wsm_export_text(0).replace("RF level (%)", "RF level (dB)");
    let input = write_input(&dir, &text);

    let mut session = Session::new();
    let err = session.open(&input).unwrap_err();
    assert!(matches!(err, ConvertError::FormatMismatch(_)));

    // File is loaded for display, conversion stays disabled
    assert!(!session.can_convert());
    assert!(session.row_count().is_some());
    assert!(matches!(
        session.convert(),
        Err(ConvertError::FormatMismatch(_))
    ));
}

#[test]
fn shape_error_writes_no_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    // Valid fingerprint, but the table ends before the footer offsets
    let mut lines: Vec<String> = (0..HEADER_ROWS)
        .map(|i| {
            if i == FINGERPRINT_ROW_INDEX {
                FINGERPRINT.join(";")
            } else {
                format!("WSM metadata {}", i)
            }
        })
        .collect();
    for i in 0..100 {
        lines.push(data_line(i));
    }
    let input = write_input(&dir, &(lines.join("\n") + "\n"));
    let output = dir.path().join("scan_wwb.csv");

    let mut session = Session::new();
    session.open(&input).unwrap();
    assert!(session.can_convert());

    let err = session.export(&output).unwrap_err();
    assert!(matches!(err, ConvertError::Shape(_)));
    assert!(!output.exists(), "no partial output on a failed conversion");
}

#[test]
fn conversion_is_not_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, &wsm_export_text(0));
    let output = dir.path().join("scan_wwb.csv");

    let mut session = Session::new();
    session.open(&input).unwrap();
    session.export(&output).unwrap();

    // The output no longer carries the fingerprint or the input shape,
    // so feeding it back through the pipeline must fail.
    let reparsed: ScanTable = WsmReader::read_file(&output).unwrap();
    assert_eq!(SourceFormat::detect(&reparsed), None);

    let mut second = Session::new();
    let err = second.open(&output).unwrap_err();
    assert!(matches!(err, ConvertError::FormatMismatch(_)));
    assert!(!second.can_convert());
}
