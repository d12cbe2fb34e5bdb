//! Integration tests for the quoting helpers and their interplay with the
//! fragment parser.

use logtriga_rs::quoting::{
    db_urldecode, db_urlencode, quote_copy, quote_fqident, quote_ident, quote_json,
    quote_literal, quote_statement, unescape, unescape_copy,
};
use logtriga_rs::{Operation, ParsedRow, parse_fragment};
use proptest::prelude::*;

#[test]
fn test_unescape_examples() {
    assert_eq!(unescape("a\\tb").unwrap(), "a\tb");
    assert_eq!(unescape("\\101").unwrap(), "A");
}

#[test]
fn test_unescape_copy_only_exact_null_marker() {
    assert_eq!(unescape_copy("\\N").unwrap(), None);
    assert!(!matches!(unescape_copy("x\\N"), Ok(None)));
    assert_eq!(unescape_copy("\\\\N").unwrap().as_deref(), Some("\\N"));
}

#[test]
fn test_quoted_literal_parses_back() {
    let value = "back\\slash and\nnewline";
    let fragment = format!("(v) values ({})", quote_literal(Some(value)));
    let row = parse_fragment(Operation::Insert, &fragment).unwrap();
    assert_eq!(row["v"].as_deref(), Some(value));
}

#[test]
fn test_quote_statement_from_parsed_row() {
    let row = parse_fragment(Operation::Update, "name = 'x' where id = '3'").unwrap();
    let sql = quote_statement("update t set name = %(name)s where id = %(id)s", &row).unwrap();
    assert_eq!(sql, "update t set name = 'x' where id = '3'");
}

#[test]
fn test_url_encoding_of_parsed_row() {
    let row = parse_fragment(Operation::Insert, "(a, \"b c\") values ('1&2', null)").unwrap();
    let encoded = db_urlencode(row.iter().map(|(k, v)| (k.as_str(), v.as_deref())));
    assert_eq!(encoded, "a=1%262&b+c");
    assert_eq!(db_urldecode(&encoded), row);
}

#[test]
fn test_identifier_helpers() {
    assert_eq!(quote_ident("id"), "id");
    assert_eq!(quote_ident("where"), "\"where\"");
    assert_eq!(quote_fqident("public.Table"), "public.\"Table\"");
    assert_eq!(quote_json(Some("a\"b")), "\"a\\\"b\"");
}

proptest! {
    #[test]
    fn prop_quote_copy_round_trips(text in any::<String>()) {
        let quoted = quote_copy(Some(&text));
        prop_assert_eq!(unescape_copy(&quoted).unwrap(), Some(text));
    }

    #[test]
    fn prop_quote_literal_interior_unescapes(text in "[^']*") {
        let quoted = quote_literal(Some(&text));
        let interior = &quoted[1..quoted.len() - 1];
        prop_assert_eq!(unescape(interior).unwrap(), text);
    }

    #[test]
    fn prop_url_encoding_round_trips(
        pairs in proptest::collection::vec(("[^&]{1,8}", proptest::option::of(".{0,8}")), 0..6)
    ) {
        let mut row = ParsedRow::default();
        for (key, value) in pairs {
            row.insert(key, value);
        }
        let encoded = db_urlencode(row.iter().map(|(k, v)| (k.as_str(), v.as_deref())));
        prop_assert_eq!(db_urldecode(&encoded), row);
    }

    #[test]
    fn prop_parsed_rows_have_matching_columns(fragment in ".{0,48}", tag in 0u8..3) {
        let op = match tag {
            0 => Operation::Insert,
            1 => Operation::Update,
            _ => Operation::Delete,
        };
        if let Ok(row) = parse_fragment(op, &fragment) {
            prop_assert!(!row.is_empty());
        }
    }

    #[test]
    fn prop_insert_of_quoted_columns(
        columns in proptest::collection::vec(("[a-z][a-z0-9_]{0,6}", proptest::option::of("[a-zA-Z0-9 ]{0,8}")), 1..5)
    ) {
        let mut expected = ParsedRow::default();
        for (name, value) in &columns {
            expected.insert(name.clone(), value.clone());
        }
        let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        let values: Vec<String> = columns
            .iter()
            .map(|(_, value)| quote_literal(value.as_deref()))
            .collect();
        let fragment = format!("({}) values ({})", names.join(", "), values.join(", "));
        prop_assert_eq!(parse_fragment(Operation::Insert, &fragment).unwrap(), expected);
    }
}
