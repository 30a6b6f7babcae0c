//! Identifier derivation from file names.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid identifier regex"));

/// File name without its final extension (`trial-01.csv` -> `trial-01`,
/// `a.b.csv` -> `a.b`, `.csv` -> ``).
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `_`, one for one.
///
/// Runs of punctuation are not collapsed and non-ASCII characters each
/// become a single `_`.
pub fn sanitize_identifier(name: &str) -> String {
    NON_ALPHANUMERIC.replace_all(name, "_").into_owned()
}

/// Identifier a file is bound under, or `None` when the base name is empty.
pub fn identifier_for(file_name: &str) -> Option<String> {
    let base = base_name(file_name);
    if base.is_empty() {
        None
    } else {
        Some(sanitize_identifier(base))
    }
}
