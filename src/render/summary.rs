//! End-of-run listing of created identifiers.

use crate::domain::LoadOutcome;
use std::fmt::Write;

/// Render the identifiers that start with a letter together with their
/// table shapes, followed by notes on anything left out.
pub fn render_summary(outcome: &LoadOutcome) -> String {
    let mut out = String::new();
    let registry = &outcome.registry;

    let listed: Vec<_> = registry.summary_bindings().collect();
    let width = listed.iter().map(|b| b.identifier.len()).max().unwrap_or(0);

    let _ = writeln!(out, "Loaded tables ({}):", listed.len());
    for binding in &listed {
        let (rows, columns) = binding.table.shape();
        let missing = binding.table.missing_count();
        let _ = write!(out, "  {:<width$}  {}x{}", binding.identifier, rows, columns);
        if missing > 0 {
            let _ = write!(out, "  ({} missing)", missing);
        }
        out.push('\n');
    }

    let hidden = registry.len() - listed.len();
    if hidden > 0 {
        let _ = writeln!(
            out,
            "  ({} more bound under identifiers not starting with a letter)",
            hidden
        );
    }
    if outcome.stats.identifiers_overwritten > 0 {
        let _ = writeln!(out, "Overwritten bindings: {}", outcome.stats.identifiers_overwritten);
    }
    if !outcome.failures.is_empty() {
        let _ = writeln!(out, "Skipped files ({}):", outcome.failures.len());
        for failure in &outcome.failures {
            let _ = writeln!(out, "  {}", failure.file);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Binding, LoadFailure, NumericTable};
    use std::path::PathBuf;

    fn bind(outcome: &mut LoadOutcome, identifier: &str, rows: Vec<Vec<f64>>) {
        outcome.registry.bind(Binding {
            identifier: identifier.to_string(),
            file_name: format!("{}.csv", identifier),
            source: PathBuf::from(format!("{}.csv", identifier)),
            table: NumericTable::from_rows(rows),
            encoding: "utf-8".to_string(),
            checksum: "0".repeat(16),
        });
    }

    #[test]
    fn test_summary_lists_letter_identifiers_with_shapes() {
        let mut outcome = LoadOutcome::default();
        bind(&mut outcome, "trial_01", vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        bind(&mut outcome, "b", vec![vec![1.0, f64::NAN]]);
        bind(&mut outcome, "2024_run", vec![vec![1.0]]);
        outcome.failures.push(LoadFailure { file: "bad.csv".into(), reason: "x".into() });

        let text = render_summary(&outcome);
        assert_eq!(
            text,
            "Loaded tables (2):\n\
             \x20 b         1x2  (1 missing)\n\
             \x20 trial_01  2x3\n\
             \x20 (1 more bound under identifiers not starting with a letter)\n\
             Skipped files (1):\n\
             \x20 bad.csv\n"
        );
    }

    #[test]
    fn test_summary_of_empty_outcome() {
        assert_eq!(render_summary(&LoadOutcome::default()), "Loaded tables (0):\n");
    }
}
