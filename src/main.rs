//! csv-registry: load a directory of numeric CSV files into named tables

use anyhow::Result;

fn main() -> Result<()> {
    csv_registry::cli::run()
}
