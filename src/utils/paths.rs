//! Path display helpers

use std::path::Path;

/// Path as shown in console output: forward slashes on every platform.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_normalizes_separators() {
        assert_eq!(display_path(Path::new("data/runs")), "data/runs");
        assert_eq!(display_path(Path::new(r"C:\data\runs")), "C:/data/runs");
    }
}
