//! The directory loading pipeline.
//!
//! validate directory -> list all entries -> list matching entries ->
//! for each match: derive identifier, load table, bind, report.

use crate::domain::{
    starts_with_letter, Binding, Config, FileErrorPolicy, LoadFailure, LoadOutcome,
};
use crate::error::{LoaderError, Result};
use crate::load::{identifier_for, load_numeric_table, ParseOptions};
use crate::scan::{CsvEntry, DirectoryScanner};
use std::path::Path;

/// Receives progress as the pipeline runs. Every hook defaults to a no-op.
pub trait Progress {
    /// The directory passed validation and is about to be listed.
    fn listing_started(&mut self, _root: &Path) {}
    /// One non-directory entry of the input directory.
    fn directory_entry(&mut self, _name: &str) {}
    /// The matched files, in processing order.
    fn csv_files_found(&mut self, _files: &[CsvEntry]) {}
    fn file_loaded(&mut self, _file_name: &str, _identifier: &str) {}
    fn file_skipped(&mut self, _file_name: &str, _error: &LoaderError) {}
}

/// Progress sink that reports nothing.
pub struct Silent;

impl Progress for Silent {}

/// Load every matching file in `root` into a fresh registry.
///
/// Fails before producing any output when `root` is not a directory, and
/// before loading anything when no file matches `config.pattern`.
pub fn load_directory(
    root: &Path,
    config: &Config,
    progress: &mut dyn Progress,
) -> Result<LoadOutcome> {
    let scanner = DirectoryScanner::new(root.to_path_buf())
        .pattern(config.pattern.clone())
        .order(config.order);
    scanner.validate()?;

    let mut outcome = LoadOutcome::default();

    progress.listing_started(root);
    for name in scanner.entries()? {
        progress.directory_entry(&name?);
        outcome.stats.entries_listed += 1;
    }

    let files = scanner.csv_files()?;
    outcome.stats.csv_matched = files.len();
    progress.csv_files_found(&files);

    let options = ParseOptions::from(config);
    for entry in &files {
        match load_entry(entry, &options) {
            Ok(binding) => {
                let identifier = binding.identifier.clone();
                if !starts_with_letter(&identifier) {
                    tracing::warn!(
                        "{} is bound as '{}', which does not start with a letter",
                        entry.file_name,
                        identifier
                    );
                }
                if let Some(previous) = outcome.registry.bind(binding) {
                    tracing::debug!(
                        "'{}' from {} replaced the table from {}",
                        identifier,
                        entry.file_name,
                        previous.file_name
                    );
                    outcome.stats.identifiers_overwritten += 1;
                }
                outcome.stats.files_loaded += 1;
                progress.file_loaded(&entry.file_name, &identifier);
            }
            Err(err) if err.is_per_file() && config.on_file_error == FileErrorPolicy::Skip => {
                tracing::warn!("Skipping {}: {}", entry.file_name, err);
                outcome.stats.files_failed += 1;
                outcome
                    .failures
                    .push(LoadFailure { file: entry.file_name.clone(), reason: err.to_string() });
                progress.file_skipped(&entry.file_name, &err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcome)
}

fn load_entry(entry: &CsvEntry, options: &ParseOptions) -> Result<Binding> {
    let identifier = identifier_for(&entry.file_name)
        .ok_or_else(|| LoaderError::EmptyIdentifier { file: entry.file_name.clone() })?;
    let loaded = load_numeric_table(&entry.path, options)?;

    Ok(Binding {
        identifier,
        file_name: entry.file_name.clone(),
        source: entry.path.clone(),
        table: loaded.table,
        encoding: loaded.encoding,
        checksum: loaded.checksum,
    })
}
