//! mdtable - Markdown pipe-table tooling
//!
//! This crate provides the core logic for detecting GitHub-style pipe tables
//! in Markdown text, editing their tabular data, and round-tripping that data
//! through canonical Markdown and CSV/TSV text.
//!
//! The core modules ([`table`], [`delimited`], [`document`]) are pure: they
//! never touch the filesystem or clipboard and hold no state between calls.
//! The binary in `main.rs` is the host layer that does the I/O and drives the
//! core.

pub mod cli;
pub mod delimited;
pub mod document;
pub mod settings;
pub mod table;
pub mod tracing;

// Re-export commonly used types
pub use delimited::{header_matches, parse_delimited, sniff_and_parse, write_csv};
pub use document::splice_lines;
pub use table::{find_tables, parse_pipe_table_at, Align, Table, TableRegion};
