//! Turning raw field and value tokens into a [`ParsedRow`].

use alloc::string::String;

use hashbrown::DefaultHashBuilder;

use super::ParsedRow;
use super::grammar::RawColumns;
use crate::quoting::{UnescapeError, unescape};

/// Text between the wrapping quotes of a quoted token.
///
/// A lone quote character strips to the empty string.
fn strip_quotes(token: &str) -> &str {
    token.get(1..token.len().saturating_sub(1)).unwrap_or_default()
}

fn column_name(token: &str) -> Result<String, UnescapeError> {
    if token.starts_with('"') {
        unescape(strip_quotes(token))
    } else {
        Ok(token.into())
    }
}

fn column_value(token: &str) -> Result<Option<String>, UnescapeError> {
    if token.eq_ignore_ascii_case("null") {
        Ok(None)
    } else if token.starts_with('\'') {
        unescape(strip_quotes(token)).map(Some)
    } else {
        Ok(Some(token.into()))
    }
}

/// Unquote every field and value and zip them into a row.
pub(crate) fn assemble(columns: &RawColumns<'_>) -> Result<ParsedRow, UnescapeError> {
    let mut row = ParsedRow::with_capacity_and_hasher(
        columns.fields.len(),
        DefaultHashBuilder::default(),
    );
    for (&field, &value) in columns.fields.iter().zip(&columns.values) {
        row.insert(column_name(field)?, column_value(value)?);
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("''"), "");
        assert_eq!(strip_quotes("'"), "");
    }

    #[test]
    fn test_column_name() {
        assert_eq!(column_name("plain").unwrap(), "plain");
        assert_eq!(column_name(r#""co\"l""#).unwrap(), "co\"l");
        assert_eq!(column_name("\"").unwrap(), "");
    }

    #[test]
    fn test_column_value() {
        assert_eq!(column_value("NULL").unwrap(), None);
        assert_eq!(column_value("'null'").unwrap().as_deref(), Some("null"));
        assert_eq!(column_value(r"'a\nb'").unwrap().as_deref(), Some("a\nb"));
        assert_eq!(column_value("'it''s'").unwrap().as_deref(), Some("it''s"));
        assert_eq!(column_value("7").unwrap().as_deref(), Some("7"));
        assert_eq!(column_value("nullx").unwrap().as_deref(), Some("nullx"));
    }

    #[test]
    fn test_assemble_repeated_field_keeps_first_position() {
        let columns = RawColumns {
            fields: vec!["a", "b", "a"],
            values: vec!["'1'", "'2'", "'3'"],
        };
        let row = assemble(&columns).unwrap();
        let pairs: Vec<(&str, Option<&str>)> = row
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
            .collect();
        assert_eq!(pairs, [("a", Some("3")), ("b", Some("2"))]);
    }

    #[test]
    fn test_assemble_propagates_unescape_errors() {
        let columns = RawColumns {
            fields: vec!["a"],
            values: vec![r"'\q'"],
        };
        assert_eq!(assemble(&columns), Err(UnescapeError::UnknownEscape('q')));
    }
}
