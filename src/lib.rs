//! csv-registry: load a directory of numeric CSV files into named tables
//!
//! Every file matching a pattern (default `*.csv`) is parsed into a
//! [`NumericTable`] and bound in a [`Registry`] under an identifier derived
//! from its file name (`Run #7 (final).csv` -> `Run__7__final_`).

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Config, LoadOutcome, NumericTable, Registry};
pub use error::LoaderError;
pub use pipeline::{load_directory, Progress, Silent};
