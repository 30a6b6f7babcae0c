//! Run manifest JSON generation.

use crate::domain::{Config, LoadOutcome, REPORT_SCHEMA_VERSION};
use crate::utils::display_path;
use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;

/// Build the manifest describing one run. Tables are summarized, not dumped.
pub fn build_report(
    input_dir: &Path,
    config: &Config,
    outcome: &LoadOutcome,
    include_timestamp: bool,
) -> Result<Value> {
    let bindings = outcome
        .registry
        .iter()
        .map(|b| {
            let mut entry = json!({
                "identifier": b.identifier,
                "file": b.file_name,
                "rows": b.table.rows(),
                "columns": b.table.columns(),
                "missing": b.table.missing_count(),
                "encoding": b.encoding,
                "checksum": b.checksum,
            });
            if let Some(names) = b.table.column_names() {
                entry["column_names"] = json!(names);
            }
            entry
        })
        .collect::<Vec<_>>();

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("input_dir".to_string(), Value::String(display_path(input_dir)));
    report.insert("config".to_string(), serde_json::to_value(config)?);
    report.insert("stats".to_string(), outcome.stats.to_report_value());
    report.insert("bindings".to_string(), Value::Array(bindings));
    if !outcome.failures.is_empty() {
        report.insert("failures".to_string(), serde_json::to_value(&outcome.failures)?);
    }

    Ok(Value::Object(report))
}

pub fn write_report(
    report_path: &Path,
    input_dir: &Path,
    config: &Config,
    outcome: &LoadOutcome,
    include_timestamp: bool,
) -> Result<()> {
    let report = build_report(input_dir, config, outcome, include_timestamp)?;
    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
