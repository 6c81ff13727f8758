//! Markdown pipe-table detection and rendering
//!
//! Recognizes one Markdown block type: GitHub-style pipe tables, where rows
//! are delimited by `|` and the second row is a dash/colon separator that
//! declares column alignment. Every other line in a document is treated as
//! opaque text.
//!
//! # Architecture
//!
//! ```text
//! document text
//! └── find_tables
//!     └── Vec<TableRegion>        (non-overlapping [start, end) line ranges)
//!             └── Table           (header, aligns, rows)
//!                     └── to_markdown   (canonical, width-aligned block)
//! ```
//!
//! Parsing and rendering are pure functions of their input; a region's line
//! range lets the host splice a re-rendered table back into the document
//! without re-scanning it.

mod model;
mod parser;

pub use model::{Align, Table};
pub use parser::{find_tables, parse_pipe_table_at, TableRegion};
