//! Identifier -> table registry produced by one loader run.

use super::table::NumericTable;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One loaded file bound to an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub identifier: String,
    /// File name as listed in the input directory.
    pub file_name: String,
    pub source: PathBuf,
    pub table: NumericTable,
    /// Encoding label the file was decoded with.
    pub encoding: String,
    /// First 16 hex chars of the SHA-256 of the raw file bytes.
    pub checksum: String,
}

/// Mapping from identifier to the table bound to it, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    bindings: BTreeMap<String, Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `binding` under its identifier, returning whatever was bound
    /// there before. The newer binding always wins.
    pub fn bind(&mut self, binding: Binding) -> Option<Binding> {
        self.bindings.insert(binding.identifier.clone(), binding)
    }

    pub fn get(&self, identifier: &str) -> Option<&NumericTable> {
        self.bindings.get(identifier).map(|b| &b.table)
    }

    pub fn binding(&self, identifier: &str) -> Option<&Binding> {
        self.bindings.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.bindings.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Bindings whose identifier starts with an ASCII letter, i.e. the ones
    /// that are valid variable names and belong in the end-of-run listing.
    pub fn summary_bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values().filter(|b| starts_with_letter(&b.identifier))
    }

    /// Drop the provenance and keep only identifier -> table.
    pub fn into_tables(self) -> BTreeMap<String, NumericTable> {
        self.bindings.into_iter().map(|(id, b)| (id, b.table)).collect()
    }
}

pub fn starts_with_letter(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// A file that was matched but not bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub file: String,
    pub reason: String,
}

/// Counters collected while a run progresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-directory entries in the input directory.
    pub entries_listed: usize,
    /// Entries matching the file pattern.
    pub csv_matched: usize,
    pub files_loaded: usize,
    pub files_failed: usize,
    /// Bindings that replaced an earlier binding with the same identifier.
    pub identifiers_overwritten: usize,
}

impl LoadStats {
    pub fn to_report_value(&self) -> Value {
        json!({
            "entries_listed": self.entries_listed,
            "csv_matched": self.csv_matched,
            "files_loaded": self.files_loaded,
            "files_failed": self.files_failed,
            "identifiers_overwritten": self.identifiers_overwritten,
        })
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub registry: Registry,
    pub stats: LoadStats,
    pub failures: Vec<LoadFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(identifier: &str, file_name: &str, value: f64) -> Binding {
        Binding {
            identifier: identifier.to_string(),
            file_name: file_name.to_string(),
            source: PathBuf::from(file_name),
            table: NumericTable::from_rows(vec![vec![value]]),
            encoding: "utf-8".to_string(),
            checksum: "0".repeat(16),
        }
    }

    #[test]
    fn test_bind_overwrites_and_returns_previous() {
        let mut registry = Registry::new();
        assert!(registry.bind(binding("a_1", "a-1.csv", 1.0)).is_none());

        let previous = registry.bind(binding("a_1", "a_1.csv", 2.0)).expect("previous binding");
        assert_eq!(previous.file_name, "a-1.csv");

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a_1").and_then(|t| t.get(0, 0)), Some(2.0));
        assert_eq!(registry.binding("a_1").map(|b| b.file_name.as_str()), Some("a_1.csv"));
    }

    #[test]
    fn test_identifiers_are_sorted() {
        let mut registry = Registry::new();
        registry.bind(binding("zeta", "zeta.csv", 1.0));
        registry.bind(binding("alpha", "alpha.csv", 1.0));
        let ids: Vec<&str> = registry.identifiers().collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_summary_excludes_non_letter_identifiers() {
        let mut registry = Registry::new();
        registry.bind(binding("run", "run.csv", 1.0));
        registry.bind(binding("2024_run", "2024 run.csv", 1.0));
        registry.bind(binding("_tmp", ".tmp.csv", 1.0));

        let listed: Vec<&str> =
            registry.summary_bindings().map(|b| b.identifier.as_str()).collect();
        assert_eq!(listed, vec!["run"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_into_tables() {
        let mut registry = Registry::new();
        registry.bind(binding("x", "x.csv", 3.0));
        let tables = registry.into_tables();
        assert_eq!(tables["x"].get(0, 0), Some(3.0));
    }
}
