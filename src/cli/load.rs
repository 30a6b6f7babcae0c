//! Load command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::utils::parse_option;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::parse_delimiter;
use crate::pipeline::load_directory;
use crate::render::{render_summary, write_report, ConsoleProgress};
use crate::scan::DirectoryScanner;
use crate::utils::display_path;

#[derive(Args)]
pub struct LoadArgs {
    /// Directory containing the CSV files
    #[arg(value_name = "DIR", env = "CSV_INPUT_DIR")]
    pub dir: PathBuf,

    /// Path to config file (csv-registry.toml or csv-registry.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Glob matched against file names (default: *.csv, case-sensitive)
    #[arg(short = 'p', long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Field delimiter: a single character, or comma|tab|semicolon|space|pipe
    #[arg(short = 'd', long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Processing order: name|listing
    #[arg(long, value_name = "ORDER")]
    pub order: Option<String>,

    /// First-row handling: keep|skip|auto
    #[arg(long, value_name = "MODE")]
    pub header: Option<String>,

    /// Non-numeric cells: coerce (to NaN) | strict (fail the file)
    #[arg(long, value_name = "POLICY")]
    pub cell_policy: Option<String>,

    /// When a file fails to load: skip|abort
    #[arg(long, value_name = "POLICY")]
    pub on_file_error: Option<String>,

    /// Decode every file with this encoding instead of detecting it
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Write a JSON manifest of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Omit the timestamp from the manifest for reproducible diffs
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: LoadArgs) -> Result<()> {
    let delimiter = args
        .delimiter
        .as_deref()
        .map(parse_delimiter)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let cli_overrides = CliOverrides {
        pattern: args.pattern.clone(),
        delimiter,
        order: parse_option(&args.order)?,
        header: parse_option(&args.header)?,
        cell_policy: parse_option(&args.cell_policy)?,
        on_file_error: parse_option(&args.on_file_error)?,
        encoding: args.encoding.clone(),
    };

    // A missing directory is reported before any config file problem
    DirectoryScanner::new(args.dir.clone()).validate()?;
    let file_config = load_config(&args.dir, args.config.as_deref())?;
    let config = merge_cli_with_config(file_config, cli_overrides);
    tracing::debug!("Effective config: {:?}", config);

    let mut progress = ConsoleProgress::new(std::io::stdout().lock());
    let outcome = load_directory(&args.dir, &config, &mut progress)?;

    let mut out = progress.into_inner();
    write!(out, "{}", render_summary(&outcome))?;

    if let Some(report_path) = &args.report {
        write_report(report_path, &args.dir, &config, &outcome, !args.no_timestamp)
            .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
        writeln!(out, "Report written to {}", display_path(report_path))?;
    }

    Ok(())
}
