//! Shared CLI utilities.

use std::str::FromStr;

/// Parse an optional option value, turning a parse failure into an error
/// that carries the option's own message (e.g. "Invalid order 'x' ...").
pub fn parse_option<T>(value: &Option<String>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value.as_deref().map(str::parse::<T>).transpose().map_err(anyhow::Error::msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryOrder;

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option::<EntryOrder>(&None).unwrap(), None);
        assert_eq!(
            parse_option::<EntryOrder>(&Some("listing".to_string())).unwrap(),
            Some(EntryOrder::Listing)
        );
        let err = parse_option::<EntryOrder>(&Some("random".to_string())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid order 'random'"));
    }
}
