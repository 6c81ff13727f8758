//! Pipe-table data model and canonical Markdown rendering

/// Column alignment declared by a table's separator row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// An in-memory pipe table: header cells, per-column alignment, data rows.
///
/// Immutable by convention: edits build a new `Table` rather than mutating
/// one in place. Column count is fixed by the header; rendering pads short
/// rows with empty cells and ignores extra cells in long rows. `aligns` is
/// expected to match the header length but this is not enforced — missing
/// alignments default to left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub aligns: Vec<Align>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, aligns: Vec<Align>, rows: Vec<Vec<String>>) -> Self {
        Self {
            header,
            aligns,
            rows,
        }
    }

    /// Number of columns, fixed by the header
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Alignment for a column, defaulting to left past the end of `aligns`
    pub fn align(&self, col: usize) -> Align {
        self.aligns.get(col).copied().unwrap_or_default()
    }

    /// One-line description for table pickers and listings
    pub fn label(&self) -> String {
        if self.header.is_empty() {
            "(empty table)".to_string()
        } else {
            self.header.join(" | ")
        }
    }

    /// Render the table as a canonical, width-aligned Markdown block.
    ///
    /// Each column is as wide as its longest cell (header included). Data
    /// cells are always left-justified with one space of inner padding on
    /// each side of the `|` delimiters; the declared alignment affects only
    /// the separator row's colon markers. Lines are newline-joined with no
    /// trailing newline. Never fails: an empty header produces a minimal
    /// two-line `||` block.
    pub fn to_markdown(&self) -> String {
        let cols = self.column_count();
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, width) in widths.iter_mut().enumerate() {
                let len = row.get(i).map_or(0, |cell| cell.chars().count());
                *width = (*width).max(len);
            }
        }

        let format_row = |cells: &[String]| -> String {
            let padded: Vec<String> = (0..cols)
                .map(|i| {
                    let text = cells.get(i).map_or("", String::as_str);
                    format!(" {:<width$} ", text, width = widths[i])
                })
                .collect();
            format!("|{}|", padded.join("|"))
        };

        let separator: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| match self.align(i) {
                Align::Left => format!(":{}", "-".repeat(width + 1)),
                Align::Right => format!("{}:", "-".repeat(width + 1)),
                Align::Center => format!(":{}:", "-".repeat(width)),
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(&self.header));
        lines.push(format!("|{}|", separator.join("|")));
        for row in &self.rows {
            lines.push(format_row(row));
        }
        lines.join("\n")
    }
}
