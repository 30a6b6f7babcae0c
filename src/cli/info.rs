//! Info command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::utils::parse_option;
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::load::identifier_for;
use crate::pipeline::Progress;
use crate::render::ConsoleProgress;
use crate::scan::DirectoryScanner;

#[derive(Args)]
pub struct InfoArgs {
    /// Directory to inspect
    #[arg(value_name = "DIR", env = "CSV_INPUT_DIR")]
    pub dir: PathBuf,

    /// Path to config file (csv-registry.toml or csv-registry.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Glob matched against file names (default: *.csv, case-sensitive)
    #[arg(short = 'p', long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Processing order: name|listing
    #[arg(long, value_name = "ORDER")]
    pub order: Option<String>,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let cli_overrides = CliOverrides {
        pattern: args.pattern.clone(),
        order: parse_option(&args.order)?,
        ..CliOverrides::default()
    };

    // A missing directory is reported before any config file problem
    DirectoryScanner::new(args.dir.clone()).validate()?;
    let file_config = load_config(&args.dir, args.config.as_deref())?;
    let config = merge_cli_with_config(file_config, cli_overrides);

    let scanner = DirectoryScanner::new(args.dir.clone())
        .pattern(config.pattern.clone())
        .order(config.order);

    let mut console = ConsoleProgress::new(std::io::stdout().lock());
    console.listing_started(scanner.root());
    let mut entries = 0usize;
    for name in scanner.entries()? {
        console.directory_entry(&name?);
        entries += 1;
    }

    let files = scanner.csv_files()?;
    console.csv_files_found(&files);
    drop(console);

    // Planned bindings, flagging identifiers shared by several files
    println!("Identifiers:");
    let mut total_bytes = 0u64;
    let mut planned: Vec<(String, &str)> = Vec::new();
    for file in &files {
        total_bytes += file.path.metadata().map(|m| m.len()).unwrap_or(0);
        match identifier_for(&file.file_name) {
            Some(identifier) => planned.push((identifier, file.file_name.as_str())),
            None => println!("  {} -> (no identifier, will be skipped)", file.file_name),
        }
    }
    for (identifier, file_name) in &planned {
        let shared = planned.iter().filter(|(other, _)| other == identifier).count();
        if shared > 1 {
            println!(
                "  {} -> {} (shared by {} files, last one wins)",
                file_name, identifier, shared
            );
        } else {
            println!("  {} -> {}", file_name, identifier);
        }
    }

    println!("Statistics:");
    println!("  Entries: {}", entries);
    println!("  Matching '{}': {}", config.pattern, files.len());
    println!("  Total bytes: {}", total_bytes);

    Ok(())
}
