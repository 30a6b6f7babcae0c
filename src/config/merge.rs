//! Apply command-line overrides on top of file configuration

use crate::domain::{CellPolicy, Config, EntryOrder, FileErrorPolicy, HeaderMode};

/// Settings given on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub pattern: Option<String>,
    pub delimiter: Option<u8>,
    pub order: Option<EntryOrder>,
    pub header: Option<HeaderMode>,
    pub cell_policy: Option<CellPolicy>,
    pub on_file_error: Option<FileErrorPolicy>,
    pub encoding: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(pattern) = cli.pattern {
        config.pattern = pattern;
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }
    if let Some(order) = cli.order {
        config.order = order;
    }
    if let Some(header) = cli.header {
        config.header = header;
    }
    if let Some(cell_policy) = cli.cell_policy {
        config.cell_policy = cell_policy;
    }
    if let Some(on_file_error) = cli.on_file_error {
        config.on_file_error = on_file_error;
    }
    if cli.encoding.is_some() {
        config.encoding = cli.encoding;
    }
    config
}
