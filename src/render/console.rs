//! Human-readable progress lines.

use crate::error::LoaderError;
use crate::pipeline::Progress;
use crate::scan::CsvEntry;
use crate::utils::display_path;
use std::io::Write;
use std::path::Path;

/// Writes pipeline progress to `out` (stdout for the CLI).
///
/// Write errors are ignored: progress is best-effort and must not change
/// the outcome of a run.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn listing_started(&mut self, root: &Path) {
        let _ = writeln!(self.out, "Files in {}:", display_path(root));
    }

    fn directory_entry(&mut self, name: &str) {
        let _ = writeln!(self.out, "  {}", name);
    }

    fn csv_files_found(&mut self, files: &[CsvEntry]) {
        let _ = writeln!(self.out, "Found {} CSV file(s):", files.len());
        for file in files {
            let _ = writeln!(self.out, "  {}", file.file_name);
        }
    }

    fn file_loaded(&mut self, file_name: &str, identifier: &str) {
        let _ = writeln!(self.out, "{} loaded as {}", file_name, identifier);
    }

    fn file_skipped(&mut self, file_name: &str, error: &LoaderError) {
        let _ = writeln!(self.out, "{} skipped: {}", file_name, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_progress_lines() {
        let mut console = ConsoleProgress::new(Vec::new());
        console.listing_started(Path::new("data"));
        console.directory_entry("a.csv");
        console.csv_files_found(&[CsvEntry {
            file_name: "a.csv".to_string(),
            path: PathBuf::from("data/a.csv"),
        }]);
        console.file_loaded("a.csv", "a");
        let error =
            LoaderError::FileLoadFailure { path: PathBuf::from("data/b.csv"), reason: "bad".into() };
        console.file_skipped("b.csv", &error);

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            text,
            "Files in data:\n  a.csv\nFound 1 CSV file(s):\n  a.csv\na.csv loaded as a\n\
             b.csv skipped: failed to load data/b.csv: bad\n"
        );
    }
}
