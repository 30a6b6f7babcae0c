//! Loader configuration and its option enums.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PATTERN: &str = "*.csv";
pub const DEFAULT_DELIMITER: u8 = b',';

/// Order in which matched CSV files are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryOrder {
    /// Lexicographic by file name (deterministic across platforms).
    #[default]
    Name,
    /// Whatever order the filesystem returns.
    Listing,
}

/// How the first record of each file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderMode {
    /// First record is data like any other.
    #[default]
    Keep,
    /// First record is always column names.
    Skip,
    /// First record is column names only if none of its cells is numeric.
    Auto,
}

/// What happens to a cell that does not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellPolicy {
    /// Store the missing-value sentinel (`NaN`).
    #[default]
    Coerce,
    /// Fail the file.
    Strict,
}

/// What happens to the run when one file fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileErrorPolicy {
    /// Warn, leave the file out of the registry, continue.
    #[default]
    Skip,
    /// Fail the whole run.
    Abort,
}

macro_rules! impl_option_str {
    ($ty:ty, $what:literal, { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    other => Err(format!(
                        concat!("Invalid ", $what, " '{}' (expected one of: {})"),
                        other,
                        [$($name),+].join(", ")
                    )),
                }
            }
        }

        impl $ty {
            pub fn as_str(&self) -> &'static str {
                $(if *self == $variant { return $name; })+
                unreachable!()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_option_str!(EntryOrder, "order", {
    "name" => EntryOrder::Name,
    "listing" => EntryOrder::Listing,
});
impl_option_str!(HeaderMode, "header mode", {
    "keep" => HeaderMode::Keep,
    "skip" => HeaderMode::Skip,
    "auto" => HeaderMode::Auto,
});
impl_option_str!(CellPolicy, "cell policy", {
    "coerce" => CellPolicy::Coerce,
    "strict" => CellPolicy::Strict,
});
impl_option_str!(FileErrorPolicy, "file error policy", {
    "skip" => FileErrorPolicy::Skip,
    "abort" => FileErrorPolicy::Abort,
});

/// Effective settings for one loader run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob matched against each entry's file name.
    pub pattern: String,
    #[serde(serialize_with = "serialize_delimiter", deserialize_with = "deserialize_delimiter")]
    pub delimiter: u8,
    pub order: EntryOrder,
    pub header: HeaderMode,
    pub cell_policy: CellPolicy,
    pub on_file_error: FileErrorPolicy,
    /// Encoding label forced on every file; auto-detected when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            delimiter: DEFAULT_DELIMITER,
            order: EntryOrder::default(),
            header: HeaderMode::default(),
            cell_policy: CellPolicy::default(),
            on_file_error: FileErrorPolicy::default(),
            encoding: None,
        }
    }
}

/// Parse a delimiter given as a single ASCII character or a name
/// (`comma`, `tab`, `semicolon`, `space`, `pipe`).
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" => return Ok(b'\t'),
        "\t" | " " => return Ok(value.as_bytes()[0]),
        _ => {}
    }
    let trimmed = value.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "comma" => return Ok(b','),
        "tab" => return Ok(b'\t'),
        "semicolon" => return Ok(b';'),
        "space" => return Ok(b' '),
        "pipe" => return Ok(b'|'),
        _ => {}
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c as u8),
        _ => Err(format!("Invalid delimiter '{}' (expected a single ASCII character)", value)),
    }
}

/// Human-readable form of a delimiter byte.
pub fn delimiter_label(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "tab".to_string(),
        b' ' => "space".to_string(),
        other => (other as char).to_string(),
    }
}

fn serialize_delimiter<S: Serializer>(delimiter: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&delimiter_label(*delimiter))
}

fn deserialize_delimiter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_delimiter(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.pattern, "*.csv");
        assert_eq!(cfg.delimiter, b',');
        assert_eq!(cfg.order, EntryOrder::Name);
        assert_eq!(cfg.header, HeaderMode::Keep);
        assert_eq!(cfg.cell_policy, CellPolicy::Coerce);
        assert_eq!(cfg.on_file_error, FileErrorPolicy::Skip);
        assert_eq!(cfg.encoding, None);
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter(" "), Ok(b' '));
        assert_eq!(parse_delimiter("Semicolon"), Ok(b';'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("é").is_err());
        assert!(parse_delimiter("\"").is_err());
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("listing".parse::<EntryOrder>(), Ok(EntryOrder::Listing));
        assert_eq!(" AUTO ".parse::<HeaderMode>(), Ok(HeaderMode::Auto));
        assert_eq!("strict".parse::<CellPolicy>(), Ok(CellPolicy::Strict));
        assert_eq!("abort".parse::<FileErrorPolicy>(), Ok(FileErrorPolicy::Abort));

        let err = "sideways".parse::<EntryOrder>().unwrap_err();
        assert!(err.contains("Invalid order"), "got: {}", err);
        assert!(err.contains("name, listing"), "got: {}", err);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in [HeaderMode::Keep, HeaderMode::Skip, HeaderMode::Auto] {
            assert_eq!(mode.to_string().parse::<HeaderMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_config_serializes_delimiter_as_label() {
        let cfg = Config { delimiter: b'\t', ..Config::default() };
        let value = serde_json::to_value(&cfg).unwrap();
        assert_eq!(value["delimiter"], "tab");
        assert_eq!(value["order"], "name");
        assert_eq!(value["cell_policy"], "coerce");
    }
}
