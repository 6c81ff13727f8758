use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use mdtable::cli::{CliArgs, Command, ExportFormat};
use mdtable::delimited::{header_matches, sniff_and_parse, write_csv};
use mdtable::document::splice_lines;
use mdtable::settings::Settings;
use mdtable::table::{find_tables, Table, TableRegion};

fn main() -> Result<()> {
    mdtable::tracing::init();
    let args = CliArgs::parse();

    match args.command {
        Command::List { file } => list(file),
        Command::Export {
            file,
            table,
            format,
            output,
        } => export(file, table, format, output),
        Command::Fmt { file, write } => fmt(file, write),
        Command::Paste { file, table, write } => paste(file, table, write),
    }
}

/// Resolve the target file, falling back to the last opened one, and record
/// it for the next invocation.
fn resolve_file(file: Option<PathBuf>, settings: &mut Settings) -> Result<PathBuf> {
    let path = match file {
        Some(path) => path,
        None => settings
            .last_file
            .clone()
            .context("no file given and no previously opened file to fall back to")?,
    };
    settings.record_last_file(&path);
    Ok(path)
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn select_table(regions: &[TableRegion], number: usize) -> Result<&TableRegion> {
    if number == 0 || number > regions.len() {
        bail!(
            "table {} not found ({} table(s) detected; see `mdtable list`)",
            number,
            regions.len()
        );
    }
    Ok(&regions[number - 1])
}

fn emit(path: &Path, contents: &str, write: bool) -> Result<()> {
    if write {
        fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "document updated");
        println!("Updated {}", path.display());
    } else {
        println!("{contents}");
    }
    Ok(())
}

fn list(file: Option<PathBuf>) -> Result<()> {
    let mut settings = Settings::load();
    let path = resolve_file(file, &mut settings)?;
    let text = read_document(&path)?;
    settings.save();

    let regions = find_tables(&text);
    if regions.is_empty() {
        println!("No pipe tables found in {}", path.display());
        return Ok(());
    }
    for (idx, region) in regions.iter().enumerate() {
        println!(
            "{}: {} (lines {}-{}, {} row(s))",
            idx + 1,
            region.table.label(),
            region.start + 1,
            region.end,
            region.table.rows.len()
        );
    }
    Ok(())
}

fn export(
    file: Option<PathBuf>,
    table: usize,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut settings = Settings::load();
    let path = resolve_file(file, &mut settings)?;
    let text = read_document(&path)?;
    settings.save();

    let regions = find_tables(&text);
    let region = select_table(&regions, table)?;
    let rendered = match format {
        ExportFormat::Csv => write_csv(&region.table.header, &region.table.rows),
        ExportFormat::Markdown => region.table.to_markdown(),
    };

    match output {
        Some(out) => {
            fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Exported table {} to {}", table, out.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn fmt(file: Option<PathBuf>, write: bool) -> Result<()> {
    let mut settings = Settings::load();
    let path = resolve_file(file, &mut settings)?;
    let text = read_document(&path)?;
    settings.save();

    let regions = find_tables(&text);
    if regions.is_empty() {
        println!("No pipe tables found in {}", path.display());
        return Ok(());
    }

    // Splice back to front so earlier regions keep their line numbers.
    let mut updated = text;
    for region in regions.iter().rev() {
        updated = splice_lines(&updated, region.start, region.end, &region.table.to_markdown());
    }
    debug!(tables = regions.len(), "re-rendered tables");
    emit(&path, &updated, write)
}

fn paste(file: Option<PathBuf>, table: usize, write: bool) -> Result<()> {
    let mut settings = Settings::load();
    let path = resolve_file(file, &mut settings)?;
    let text = read_document(&path)?;
    settings.save();

    let regions = find_tables(&text);
    let region = select_table(&regions, table)?;

    let mut clipboard = arboard::Clipboard::new().context("failed to open the system clipboard")?;
    let pasted = clipboard
        .get_text()
        .context("clipboard is empty or not text")?;
    let rows = sniff_and_parse(&pasted);
    if rows.is_empty() {
        bail!("clipboard does not appear to contain CSV or TSV data");
    }

    let updated_table = append_pasted_rows(&region.table, &rows);
    let appended = updated_table.rows.len() - region.table.rows.len();
    info!(appended, table, "pasted rows from clipboard");

    let updated = splice_lines(&text, region.start, region.end, &updated_table.to_markdown());
    emit(&path, &updated, write)
}

/// Append pasted rows to a table, skipping a leading row that duplicates the
/// header and sizing every row to the table's column count.
fn append_pasted_rows(table: &Table, pasted: &[Vec<String>]) -> Table {
    let cols = table.column_count();
    let skip = usize::from(
        pasted
            .first()
            .is_some_and(|row| header_matches(row, &table.header)),
    );

    let mut rows = table.rows.clone();
    for pasted_row in &pasted[skip..] {
        let mut cells: Vec<String> = pasted_row.iter().take(cols).cloned().collect();
        cells.resize(cols, String::new());
        rows.push(cells);
    }
    Table::new(table.header.clone(), table.aligns.clone(), rows)
}
