//! Single-directory scanner: validation, full listing and pattern matching.

use crate::domain::{EntryOrder, DEFAULT_PATTERN};
use crate::error::{LoaderError, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory entry whose name matched the file pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEntry {
    /// File name as it appears in the directory.
    pub file_name: String,
    pub path: PathBuf,
}

/// Scanner over the immediate (non-recursive) contents of one directory.
pub struct DirectoryScanner {
    root_path: PathBuf,
    pattern: String,
    order: EntryOrder,
}

impl DirectoryScanner {
    /// Create a scanner matching `*.csv` in name order.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path, pattern: DEFAULT_PATTERN.to_string(), order: EntryOrder::default() }
    }

    /// Set the glob matched against each file name
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the processing order
    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Fail with `DirectoryNotFound` unless the root exists and is a directory.
    pub fn validate(&self) -> Result<()> {
        if self.root_path.is_dir() {
            Ok(())
        } else {
            Err(LoaderError::DirectoryNotFound { path: self.root_path.clone() })
        }
    }

    /// Names of every non-directory entry, produced lazily as the directory
    /// is read.
    pub fn entries(&self) -> Result<impl Iterator<Item = Result<String>> + '_> {
        self.validate()?;
        Ok(self.walk().map(|entry| entry.map(|(name, _)| name)))
    }

    /// Entries whose file name matches the pattern, in the configured order.
    ///
    /// Fails with `NoCsvFilesFound` when nothing matches.
    pub fn csv_files(&self) -> Result<Vec<CsvEntry>> {
        self.validate()?;
        let matcher = self.build_matcher()?;

        let mut files = Vec::new();
        for entry in self.walk() {
            let (file_name, path) = entry?;
            if matcher.is_match(Path::new(&file_name)) {
                files.push(CsvEntry { file_name, path });
            }
        }

        if files.is_empty() {
            return Err(LoaderError::NoCsvFilesFound {
                path: self.root_path.clone(),
                pattern: self.pattern.clone(),
            });
        }

        tracing::debug!(
            "{} file(s) matched '{}' in {}",
            files.len(),
            self.pattern,
            self.root_path.display()
        );
        Ok(files)
    }

    fn build_matcher(&self) -> Result<GlobMatcher> {
        let glob = GlobBuilder::new(&self.pattern).literal_separator(true).build().map_err(
            |source| LoaderError::InvalidPattern { pattern: self.pattern.clone(), source },
        )?;
        Ok(glob.compile_matcher())
    }

    /// Depth-1 walk yielding `(file_name, path)` for non-directory entries.
    fn walk(&self) -> impl Iterator<Item = Result<(String, PathBuf)>> + '_ {
        let mut walker = WalkDir::new(&self.root_path).min_depth(1).max_depth(1);
        if self.order == EntryOrder::Name {
            walker = walker.sort_by_file_name();
        }

        walker.into_iter().filter_map(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    return Some(Err(LoaderError::DirectoryRead {
                        path: self.root_path.clone(),
                        source: std::io::Error::from(e),
                    }))
                }
            };

            // Follows symlinks, so a link to a directory counts as a directory
            if entry.path().is_dir() {
                return None;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            Some(Ok((name, entry.into_path())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let scanner = DirectoryScanner::new(missing.clone());
        match scanner.validate() {
            Err(LoaderError::DirectoryNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected DirectoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.csv");
        fs::write(&file, "1,2\n").unwrap();

        let scanner = DirectoryScanner::new(file);
        assert!(matches!(scanner.validate(), Err(LoaderError::DirectoryNotFound { .. })));
        assert!(matches!(scanner.csv_files(), Err(LoaderError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_entries_skip_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.txt"), "x").unwrap();
        fs::write(root.join("a.csv"), "1").unwrap();
        fs::create_dir(root.join("nested.csv")).unwrap();
        fs::write(root.join("nested.csv").join("inner.csv"), "1").unwrap();

        let scanner = DirectoryScanner::new(root.to_path_buf());
        let names: Vec<String> = scanner.entries().unwrap().map(|n| n.unwrap()).collect();
        assert_eq!(names, vec!["a.csv".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn test_csv_files_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("zeta.csv"), "1").unwrap();
        fs::write(root.join("alpha.csv"), "1").unwrap();
        fs::write(root.join("notes.txt"), "x").unwrap();
        fs::write(root.join("upper.CSV"), "1").unwrap();

        let scanner = DirectoryScanner::new(root.to_path_buf());
        let files = scanner.csv_files().unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        // Pattern matching is case-sensitive
        assert_eq!(names, vec!["alpha.csv", "zeta.csv"]);
        assert_eq!(files[0].path, root.join("alpha.csv"));
    }

    #[test]
    fn test_csv_files_does_not_recurse() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("deep.csv"), "1").unwrap();
        fs::write(root.join("readme.md"), "x").unwrap();

        let scanner = DirectoryScanner::new(root.to_path_buf());
        match scanner.csv_files() {
            Err(LoaderError::NoCsvFilesFound { pattern, .. }) => assert_eq!(pattern, "*.csv"),
            other => panic!("expected NoCsvFilesFound, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.tsv"), "1").unwrap();
        fs::write(root.join("b.csv"), "1").unwrap();

        let scanner = DirectoryScanner::new(root.to_path_buf()).pattern("*.tsv");
        let files = scanner.csv_files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "a.tsv");
    }

    #[test]
    fn test_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = DirectoryScanner::new(temp_dir.path().to_path_buf()).pattern("[*.csv");
        assert!(matches!(scanner.csv_files(), Err(LoaderError::InvalidPattern { .. })));
    }
}
