//! Quoting of literal values for SQL statements and COPY streams.

use alloc::string::String;
use core::hash::BuildHasher;

use indexmap::IndexMap;

/// Errors that can occur while filling in a statement template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// A placeholder names a parameter that was not supplied.
    #[error("No parameter named '{0}'")]
    UnknownParameter(String),
    /// A `%` is not followed by `%` or a `%(name)s` placeholder.
    #[error("Malformed placeholder at byte {0}")]
    MalformedPlaceholder(usize),
}

/// Quotes a value as a single-quoted SQL literal.
///
/// Single quotes and backslashes are doubled, which is the form expected
/// by servers running with `standard_conforming_strings = off`. `None` is
/// rendered as `null`.
#[must_use]
pub fn quote_literal(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "null".into();
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' => out.push_str(r"\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quotes a value for the text format of `COPY`.
///
/// `None` is rendered as `\N`.
#[must_use]
pub fn quote_copy(value: Option<&str>) -> String {
    let Some(value) = value else {
        return r"\N".into();
    };

    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\t' => out.push_str(r"\t"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Encodes binary data in the `bytea` escape format.
///
/// Backslashes are doubled and every byte outside printable ASCII,
/// including NUL, becomes a three digit octal escape.
#[must_use]
pub fn quote_bytea_raw(data: Option<&[u8]>) -> Option<String> {
    let data = data?;
    let mut out = String::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'\\' => out.push_str(r"\\"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => {
                out.push('\\');
                for shift in [6, 3, 0] {
                    out.push(char::from(b'0' + ((byte >> shift) & 0o7)));
                }
            }
        }
    }
    Some(out)
}

/// Quotes binary data as a `bytea` SQL literal.
#[must_use]
pub fn quote_bytea_literal(data: Option<&[u8]>) -> String {
    quote_literal(quote_bytea_raw(data).as_deref())
}

/// Quotes binary data as a `bytea` value for `COPY`.
#[must_use]
pub fn quote_bytea_copy(data: Option<&[u8]>) -> String {
    quote_copy(quote_bytea_raw(data).as_deref())
}

/// Fills in the `%(name)s` placeholders of a statement template.
///
/// Each placeholder is replaced by [`quote_literal`] of the parameter with
/// that name, and `%%` becomes a single `%`.
///
/// # Errors
///
/// Returns [`QuoteError::UnknownParameter`] when a placeholder has no
/// matching parameter and [`QuoteError::MalformedPlaceholder`] when a `%`
/// starts anything else.
///
/// # Example
///
/// ```
/// use logtriga_rs::{parse_fragment, Operation};
/// use logtriga_rs::quoting::quote_statement;
///
/// let row = parse_fragment(Operation::Delete, "id = '7'").unwrap();
/// let sql = quote_statement("delete from t where id = %(id)s", &row).unwrap();
/// assert_eq!(sql, "delete from t where id = '7'");
/// ```
pub fn quote_statement<S: BuildHasher>(
    sql: &str,
    params: &IndexMap<String, Option<String>, S>,
) -> Result<String, QuoteError> {
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;
    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let offset = sql.len() - rest.len() + idx;
        let tail = &rest[idx + 1..];

        if let Some(after) = tail.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let (name, after) = tail
            .strip_prefix('(')
            .and_then(|inner| inner.split_once(')'))
            .ok_or(QuoteError::MalformedPlaceholder(offset))?;
        let after = after
            .strip_prefix('s')
            .ok_or(QuoteError::MalformedPlaceholder(offset))?;
        let value = params
            .get(name)
            .ok_or_else(|| QuoteError::UnknownParameter(name.into()))?;
        out.push_str(&quote_literal(value.as_deref()));
        rest = after;
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParsedRow;

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal(None), "null");
        assert_eq!(quote_literal(Some("abc")), "'abc'");
        assert_eq!(quote_literal(Some("it's")), "'it''s'");
        assert_eq!(quote_literal(Some(r"a\b")), r"'a\\b'");
    }

    #[test]
    fn test_quote_copy() {
        assert_eq!(quote_copy(None), r"\N");
        assert_eq!(quote_copy(Some("a\tb\nc\rd\\")), r"a\tb\nc\rd\\");
    }

    #[test]
    fn test_quote_bytea() {
        assert_eq!(quote_bytea_raw(None), None);
        assert_eq!(quote_bytea_raw(Some(b"a\\b\0")).as_deref(), Some(r"a\\b\000"));
        assert_eq!(quote_bytea_raw(Some(&[0xff, b'x'])).as_deref(), Some(r"\377x"));
        assert_eq!(quote_bytea_literal(Some(b"\0")), r"'\\000'");
        assert_eq!(quote_bytea_copy(Some(b"\0")), r"\\000");
        assert_eq!(quote_bytea_literal(None), "null");
        assert_eq!(quote_bytea_copy(None), r"\N");
    }

    fn params() -> ParsedRow {
        let mut row = ParsedRow::default();
        row.insert("id".into(), Some("1".into()));
        row.insert("name".into(), Some("O'Neil".into()));
        row.insert("gone".into(), None);
        row
    }

    #[test]
    fn test_quote_statement() {
        let sql = quote_statement(
            "update t set name = %(name)s, x = %(gone)s where id = %(id)s and pct = 5%%",
            &params(),
        )
        .unwrap();
        assert_eq!(
            sql,
            "update t set name = 'O''Neil', x = null where id = '1' and pct = 5%"
        );
    }

    #[test]
    fn test_quote_statement_errors() {
        assert_eq!(
            quote_statement("select %(missing)s", &params()),
            Err(QuoteError::UnknownParameter("missing".into()))
        );
        assert_eq!(
            quote_statement("select %d", &params()),
            Err(QuoteError::MalformedPlaceholder(7))
        );
        assert_eq!(
            quote_statement("select %(id)d", &params()),
            Err(QuoteError::MalformedPlaceholder(7))
        );
        assert_eq!(
            quote_statement("100%", &params()),
            Err(QuoteError::MalformedPlaceholder(3))
        );
    }
}
