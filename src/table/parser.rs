//! Pipe-table detection in raw Markdown text
//!
//! The grammar is deliberately simple: a table is a maximal run of
//! consecutive non-blank lines containing `|`, whose second line is a valid
//! dash/colon separator. A literal `|` inside a cell is unsupported (no
//! escape handling).

use super::model::{Align, Table};
use tracing::debug;

/// A detected table and the `[start, end)` line range it occupies in the
/// source text. The range lets the host splice replacement text back in
/// without re-scanning the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion {
    pub start: usize,
    pub end: usize,
    pub table: Table,
}

/// Find every pipe table in a block of Markdown text.
///
/// Scans top to bottom, attempting a parse at each line not already claimed
/// by an earlier match. Matches are sequential and non-overlapping: on
/// success the scan resumes at the region's end, on failure it advances one
/// line. Stateless — purely a function of the input text.
pub fn find_tables(text: &str) -> Vec<TableRegion> {
    let lines: Vec<&str> = text.lines().collect();
    let mut regions = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        match parse_pipe_table_at(&lines, i) {
            Some((table, end)) => {
                regions.push(TableRegion {
                    start: i,
                    end,
                    table,
                });
                i = end;
            }
            None => i += 1,
        }
    }
    debug!(tables = regions.len(), lines = lines.len(), "scanned document");
    regions
}

/// Try to parse a pipe table starting at `lines[start]`.
///
/// Collects the maximal run of non-blank `|`-containing lines from `start`.
/// The run must be at least two lines (header plus separator) and every cell
/// of the second line must match `:?--+:?`, otherwise the whole candidate is
/// rejected — there is no partial recovery; the caller retries at the next
/// line. On success returns the table and the index one past its last line.
pub fn parse_pipe_table_at(lines: &[&str], start: usize) -> Option<(Table, usize)> {
    let mut end = start;
    while end < lines.len() && lines[end].contains('|') && !lines[end].trim().is_empty() {
        end += 1;
    }
    if end - start < 2 {
        return None;
    }
    let run = &lines[start..end];

    let separator = split_row(run[1]);
    if !separator.iter().all(|cell| is_separator_cell(cell)) {
        return None;
    }
    let aligns = separator.iter().map(|cell| align_of(cell)).collect();

    let header = split_row(run[0]);
    let rows = run[2..].iter().map(|line| split_row(line)).collect();
    Some((Table::new(header, aligns, rows), end))
}

/// Split a table line into trimmed cells: drop one leading and one trailing
/// `|` if present, then split on `|`.
fn split_row(line: &str) -> Vec<String> {
    let mut inner = line.trim();
    inner = inner.strip_prefix('|').unwrap_or(inner);
    inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// A separator cell is an optional leading `:`, two or more dashes, and an
/// optional trailing `:`.
fn is_separator_cell(cell: &str) -> bool {
    let dashes = cell.strip_prefix(':').unwrap_or(cell);
    let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
    dashes.len() >= 2 && dashes.bytes().all(|b| b == b'-')
}

fn align_of(cell: &str) -> Align {
    match (cell.starts_with(':'), cell.ends_with(':')) {
        (true, true) => Align::Center,
        (false, true) => Align::Right,
        _ => Align::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let text = "| Col A | Col B |\n\
                    | :--- | ---: |\n\
                    | one | 1 |\n\
                    | two | 2 |";
        let regions = find_tables(text);
        assert_eq!(regions.len(), 1);

        let region = &regions[0];
        assert_eq!((region.start, region.end), (0, 4));
        assert_eq!(region.table.header, vec!["Col A", "Col B"]);
        assert_eq!(region.table.aligns, vec![Align::Left, Align::Right]);
        assert_eq!(
            region.table.rows,
            vec![vec!["one", "1"], vec!["two", "2"]]
        );
    }

    #[test]
    fn test_single_pipe_line_is_not_a_table() {
        let lines = vec!["| just one line |"];
        assert_eq!(parse_pipe_table_at(&lines, 0), None);
        assert!(find_tables("| just one line |").is_empty());
    }

    #[test]
    fn test_invalid_separator_cell_rejects_whole_candidate() {
        let lines = vec!["| a | b |", "| --- | abc |", "| 1 | 2 |"];
        assert_eq!(parse_pipe_table_at(&lines, 0), None);
    }

    #[test]
    fn test_separator_needs_two_dashes() {
        let lines = vec!["| a |", "| - |"];
        assert_eq!(parse_pipe_table_at(&lines, 0), None);
        let lines = vec!["| a |", "| -- |"];
        assert!(parse_pipe_table_at(&lines, 0).is_some());
    }

    #[test]
    fn test_alignment_mapping() {
        let lines = vec![
            "| a | b | c | d |",
            "| :---: | ---: | :--- | --- |",
        ];
        let (table, _) = parse_pipe_table_at(&lines, 0).unwrap();
        assert_eq!(
            table.aligns,
            vec![Align::Center, Align::Right, Align::Left, Align::Left]
        );
    }

    #[test]
    fn test_run_ends_at_blank_or_pipeless_line() {
        let text = "| a |\n| --- |\n| 1 |\n\nplain text\n| 2 |";
        let regions = find_tables(text);
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].start, regions[0].end), (0, 3));
    }

    #[test]
    fn test_two_tables_do_not_overlap() {
        let text = "| a |\n| --- |\n| 1 |\n\n| b |\n| --- |\n| 2 |";
        let regions = find_tables(text);
        assert_eq!(regions.len(), 2);
        assert_eq!((regions[0].start, regions[0].end), (0, 3));
        assert_eq!((regions[1].start, regions[1].end), (4, 7));
        assert!(regions[0].end <= regions[1].start);
    }

    #[test]
    fn test_table_after_prose() {
        let text = "# Heading\n\nsome prose\n\n| x | y |\n| --- | --- |\n| 1 | 2 |\n\nmore prose";
        let regions = find_tables(text);
        assert_eq!(regions.len(), 1);
        assert_eq!((regions[0].start, regions[0].end), (4, 7));
        assert_eq!(regions[0].table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_cells_trimmed_and_outer_pipes_optional() {
        let lines = vec!["  a |  b  ", "--- | ---"];
        let (table, end) = parse_pipe_table_at(&lines, 0).unwrap();
        assert_eq!(end, 2);
        assert_eq!(table.header, vec!["a", "b"]);
    }

    #[test]
    fn test_separator_like_cell_with_colon_inside_rejected() {
        let lines = vec!["| a |", "| -:- |"];
        assert_eq!(parse_pipe_table_at(&lines, 0), None);
    }

    #[test]
    fn test_find_tables_is_repeatable() {
        let text = "| a |\n| --- |\n| 1 |";
        assert_eq!(find_tables(text), find_tables(text));
    }

    #[test]
    fn test_empty_text_has_no_tables() {
        assert!(find_tables("").is_empty());
    }
}
