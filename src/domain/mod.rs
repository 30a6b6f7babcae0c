//! Core data types shared across the crate.

pub mod config;
pub mod registry;
pub mod table;

pub use config::{
    delimiter_label, parse_delimiter, CellPolicy, Config, EntryOrder, FileErrorPolicy, HeaderMode,
    DEFAULT_PATTERN,
};
pub use registry::{
    starts_with_letter, Binding, LoadFailure, LoadOutcome, LoadStats, Registry,
};
pub use table::NumericTable;

/// Version of the JSON run manifest layout.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";
