//! Delimited-text codec for clipboard and file interchange
//!
//! Writes CSV with minimal quoting and reads CSV/TSV through the csv crate
//! (RFC 4180 compliant: quoted fields may contain the delimiter, escaped
//! quotes, and embedded line breaks). Reading is lenient — rows may be
//! ragged and unreadable records are skipped rather than failing the whole
//! paste.

use std::io::Cursor;
use tracing::debug;

/// Encode headers and rows as CSV text, one row per line, rows joined by
/// `\n` with no trailing newline.
///
/// A cell is quoted if and only if it contains a comma, a double quote, or a
/// line break; inner quotes are doubled. All other cells are emitted
/// verbatim.
pub fn write_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(write_record(headers));
    for row in rows {
        lines.push(write_record(row));
    }
    lines.join("\n")
}

fn write_record(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv(cell))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_csv(cell: &str) -> String {
    if cell.chars().any(|ch| matches!(ch, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Parse delimited text into rows of cells.
///
/// Rows may differ in length; no rectangularity is enforced. Records the
/// reader cannot decode are dropped, surfacing whatever the parser salvages
/// instead of raising.
pub fn parse_delimited(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(text.as_bytes()));

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(|cell| cell.to_string()).collect()),
            Err(e) => debug!(error = %e, "skipping unreadable delimited record"),
        }
    }
    rows
}

/// Parse clipboard-style text, sniffing the delimiter: comma first, and if
/// that yields at most one row, tab.
pub fn sniff_and_parse(text: &str) -> Vec<Vec<String>> {
    let rows = parse_delimited(text, ',');
    if rows.len() <= 1 {
        parse_delimited(text, '\t')
    } else {
        rows
    }
}

/// Whether a pasted row duplicates the target table's header labels,
/// compared cell-by-cell, whitespace-trimmed and case-insensitively. The
/// host skips such a row when inserting pasted data.
pub fn header_matches(row: &[String], headers: &[String]) -> bool {
    row.len() == headers.len()
        && row
            .iter()
            .zip(headers)
            .all(|(cell, header)| cell.trim().to_lowercase() == header.trim().to_lowercase())
}
