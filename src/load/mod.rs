//! Per-file loading: identifier derivation and numeric parsing

pub mod numeric;
pub mod sanitize;

pub use numeric::{load_numeric_table, parse_cell, parse_numeric, LoadedFile, ParseOptions};
pub use sanitize::{base_name, identifier_for, sanitize_identifier};
