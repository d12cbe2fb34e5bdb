//! Testing utilities shared by the fuzz targets.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`operation_from_byte`]: pick an [`Operation`] from arbitrary input
//! - [`test_parse_fragment`]: parse arbitrary bytes and check the row invariants
//! - [`test_quoting`]: run every quoting helper over arbitrary text

use alloc::string::String;

use crate::quoting::{
    db_urldecode, db_urlencode, quote_copy, quote_fqident, quote_json, quote_literal,
    unescape, unescape_copy,
};
use crate::{Error, Operation, ParsedRow, parse_fragment};

/// Map a byte to one of the three operations.
#[must_use]
pub fn operation_from_byte(byte: u8) -> Operation {
    match byte % 3 {
        0 => Operation::Insert,
        1 => Operation::Update,
        _ => Operation::Delete,
    }
}

/// Check the invariants every successfully parsed row must hold.
///
/// # Panics
///
/// Panics if the row is empty, or if it does not survive a round trip
/// through [`db_urlencode`] and [`db_urldecode`].
pub fn assert_row_invariants(row: &ParsedRow) {
    assert!(!row.is_empty(), "parsed an empty row");

    // Empty names are dropped by the URL encoding.
    if row.keys().all(|key| !key.is_empty()) {
        let encoded = db_urlencode(row.iter().map(|(k, v)| (k.as_str(), v.as_deref())));
        assert_eq!(&db_urldecode(&encoded), row, "url encoding round trip");
    }
}

/// Parse arbitrary bytes as a fragment.
///
/// The first byte selects the operation and the rest is read as lossy UTF-8.
/// Parsing may fail, but must never panic, and a parsed row must satisfy
/// [`assert_row_invariants`].
pub fn test_parse_fragment(data: &[u8]) {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let fragment = String::from_utf8_lossy(rest);

    match parse_fragment(operation_from_byte(first), &fragment) {
        Ok(row) => assert_row_invariants(&row),
        Err(Error::Syntax(_) | Error::Unescape(_)) => {}
    }
}

/// Run every quoting helper over arbitrary text.
///
/// # Panics
///
/// Panics if a value quoted with [`quote_copy`] does not unescape back to
/// itself.
pub fn test_quoting(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    let _ = quote_literal(Some(&*text));
    let _ = quote_json(Some(&*text));
    let _ = quote_fqident(&text);
    let _ = unescape(&text);

    let copied = quote_copy(Some(&*text));
    assert_eq!(
        unescape_copy(&copied).ok().flatten().as_deref(),
        Some(&*text),
        "copy quoting round trip"
    );
}
