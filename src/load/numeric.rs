//! Delimited numeric text -> `NumericTable`.

use crate::domain::{CellPolicy, Config, HeaderMode, NumericTable};
use crate::error::{LoaderError, Result};
use crate::utils::{content_checksum, decode_bytes, is_binary_content};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Parsing knobs taken from the run configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub delimiter: u8,
    pub header: HeaderMode,
    pub cell_policy: CellPolicy,
    pub encoding: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ParseOptions {
    fn from(config: &Config) -> Self {
        Self {
            delimiter: config.delimiter,
            header: config.header,
            cell_policy: config.cell_policy,
            encoding: config.encoding.clone(),
        }
    }
}

/// A table plus what was learned about its source bytes.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub table: NumericTable,
    pub encoding: String,
    pub checksum: String,
}

/// Parse one cell. Empty cells and text that is not a number yield `None`.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parse header-less delimited text into a table.
///
/// Empty cells always become `NaN`. Non-numeric text becomes `NaN` under
/// [`CellPolicy::Coerce`] and is an error under [`CellPolicy::Strict`].
/// Blank lines are ignored; short rows are padded with `NaN`. With a space
/// delimiter, runs of whitespace count as one separator.
pub fn parse_numeric(
    content: &str,
    options: &ParseOptions,
) -> std::result::Result<NumericTable, String> {
    let collapsed;
    let content = if options.delimiter == b' ' {
        collapsed = collapse_whitespace(content);
        collapsed.as_str()
    } else {
        content
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(options.delimiter)
        .from_reader(content.as_bytes());

    let mut column_names: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("malformed CSV: {}", e))?;

        if idx == 0 && is_header(&record, options.header) {
            column_names = Some(record.iter().map(str::to_string).collect());
            continue;
        }

        let mut row = Vec::with_capacity(record.len());
        for (col, cell) in record.iter().enumerate() {
            match parse_cell(cell) {
                Some(value) => row.push(value),
                None if cell.is_empty() || options.cell_policy == CellPolicy::Coerce => {
                    row.push(f64::NAN)
                }
                None => {
                    let line = record.position().map_or(idx as u64 + 1, |pos| pos.line());
                    return Err(format!(
                        "line {}, column {}: '{}' is not numeric",
                        line,
                        col + 1,
                        cell
                    ));
                }
            }
        }
        rows.push(row);
    }

    let table = NumericTable::from_rows(rows);
    Ok(match column_names {
        Some(names) => table.with_column_names(names),
        None => table,
    })
}

/// Rewrite each line as its whitespace-separated fields joined by one space.
/// Line count is preserved so record positions still match the file.
fn collapse_whitespace(content: &str) -> String {
    content
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_header(record: &csv::StringRecord, mode: HeaderMode) -> bool {
    match mode {
        HeaderMode::Keep => false,
        HeaderMode::Skip => true,
        HeaderMode::Auto => {
            record.iter().any(|cell| !cell.is_empty())
                && record.iter().all(|cell| parse_cell(cell).is_none())
        }
    }
}

/// Read, decode and parse one file.
///
/// The file is read fully into memory and closed before parsing starts.
pub fn load_numeric_table(path: &Path, options: &ParseOptions) -> Result<LoadedFile> {
    let failure =
        |reason: String| LoaderError::FileLoadFailure { path: path.to_path_buf(), reason };

    let bytes = std::fs::read(path).map_err(|e| failure(e.to_string()))?;
    if is_binary_content(&bytes) {
        return Err(failure("file appears to be binary".to_string()));
    }

    let checksum = content_checksum(&bytes);
    let (content, encoding) = decode_bytes(&bytes, options.encoding.as_deref());
    tracing::debug!("{}: {} bytes decoded as {}", path.display(), bytes.len(), encoding);

    let table = parse_numeric(&content, options).map_err(failure)?;
    Ok(LoadedFile { table, encoding, checksum })
}
