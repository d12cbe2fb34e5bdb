//! URL-style encoding of key/value rows.
//!
//! A key without `=` stands for a NULL value, so `foo&bar=` decodes to
//! `foo` being NULL and `bar` being the empty string.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ParsedRow;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Form-style percent encoding: space becomes `+`, alphanumerics and `_.-`
/// are kept, every other byte becomes `%XX`.
fn quote_plus(text: &str, out: &mut String) {
    for &byte in text.as_bytes() {
        match byte {
            b' ' => out.push('+'),
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'.' | b'-' => out.push(char::from(byte)),
            _ => {
                out.push('%');
                out.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
                out.push(char::from(HEX_UPPER[usize::from(byte & 0xf)]));
            }
        }
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte)
        .to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
}

/// Inverse of [`quote_plus`]. Malformed escapes are kept literally.
fn unquote_plus(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let high = bytes.get(i + 1).copied().and_then(hex_value);
                let low = bytes.get(i + 2).copied().and_then(hex_value);
                if let (Some(high), Some(low)) = (high, low) {
                    out.push((high << 4) | low);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Encodes key/value pairs as `&`-separated `key=value` elements.
///
/// A `None` value is written as the bare key without `=`.
#[must_use]
pub fn db_urlencode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut out = String::new();
    for (idx, (key, value)) in pairs.into_iter().enumerate() {
        if idx > 0 {
            out.push('&');
        }
        quote_plus(key, &mut out);
        if let Some(value) = value {
            out.push('=');
            quote_plus(value, &mut out);
        }
    }
    out
}

/// Decodes the output of [`db_urlencode`].
///
/// Empty elements are skipped, a key without `=` decodes to `None`, and a
/// repeated key keeps its first position but takes the last value.
#[must_use]
pub fn db_urldecode(query: &str) -> ParsedRow {
    let mut row = ParsedRow::default();
    for element in query.split('&').filter(|element| !element.is_empty()) {
        match element.split_once('=') {
            Some((key, value)) => row.insert(unquote_plus(key), Some(unquote_plus(value))),
            None => row.insert(unquote_plus(element), None),
        };
    }
    row
}
