//! Command-line argument parsing for the table tool
//!
//! Supports:
//! - Listing tables detected in a Markdown file
//! - Exporting a table as CSV or canonical Markdown
//! - Re-rendering all tables in canonical form
//! - Appending clipboard rows (CSV/TSV) to a table
//!
//! Every command takes an optional file argument; when omitted, the last
//! opened file from settings is used.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A Markdown pipe-table editor and converter
#[derive(Parser, Debug)]
#[command(
    name = "mdtable",
    version,
    about = "Detect, edit, and export Markdown pipe tables"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the pipe tables detected in a Markdown file
    List {
        /// Markdown file (defaults to the last opened file)
        file: Option<PathBuf>,
    },
    /// Export one table as CSV or canonical Markdown
    Export {
        /// Markdown file (defaults to the last opened file)
        file: Option<PathBuf>,
        /// Table number as shown by `list` (1-based)
        #[arg(short, long, value_name = "N", default_value_t = 1)]
        table: usize,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Re-render every detected table in canonical, width-aligned form
    Fmt {
        /// Markdown file (defaults to the last opened file)
        file: Option<PathBuf>,
        /// Rewrite the file in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,
    },
    /// Append rows from the clipboard (CSV or TSV) to a table
    Paste {
        /// Markdown file (defaults to the last opened file)
        file: Option<PathBuf>,
        /// Table number as shown by `list` (1-based)
        #[arg(short, long, value_name = "N", default_value_t = 1)]
        table: usize,
        /// Rewrite the file in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_with_file() {
        let args = CliArgs::parse_from(["mdtable", "list", "notes.md"]);
        match args.command {
            Command::List { file } => assert_eq!(file, Some(PathBuf::from("notes.md"))),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_without_file() {
        let args = CliArgs::parse_from(["mdtable", "list"]);
        assert!(matches!(args.command, Command::List { file: None }));
    }

    #[test]
    fn test_export_defaults() {
        let args = CliArgs::parse_from(["mdtable", "export", "notes.md"]);
        match args.command {
            Command::Export {
                table,
                format,
                output,
                ..
            } => {
                assert_eq!(table, 1);
                assert_eq!(format, ExportFormat::Csv);
                assert!(output.is_none());
            }
            other => panic!("expected export, got {:?}", other),
        }
    }

    #[test]
    fn test_export_markdown_to_file() {
        let args = CliArgs::parse_from([
            "mdtable", "export", "notes.md", "--table", "2", "--format", "markdown", "-o",
            "out.md",
        ]);
        match args.command {
            Command::Export {
                table,
                format,
                output,
                ..
            } => {
                assert_eq!(table, 2);
                assert_eq!(format, ExportFormat::Markdown);
                assert_eq!(output, Some(PathBuf::from("out.md")));
            }
            other => panic!("expected export, got {:?}", other),
        }
    }

    #[test]
    fn test_fmt_write_flag() {
        let args = CliArgs::parse_from(["mdtable", "fmt", "notes.md", "--write"]);
        assert!(matches!(
            args.command,
            Command::Fmt { write: true, .. }
        ));
    }
}
