//! Removal of C-style backslash escapes.

use alloc::string::String;
use alloc::vec::Vec;

/// Errors that can occur while removing backslash escapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnescapeError {
    /// A backslash is followed by a character with no defined meaning.
    #[error("Unknown escape sequence '\\{0}'")]
    UnknownEscape(char),
    /// A three digit octal escape names a value above `\377`.
    #[error("Octal escape value {0:#o} does not fit in a byte")]
    OctalOutOfRange(u16),
}

/// Single-character escapes and the byte each one stands for.
const ESCAPES: [(char, u8); 8] = [
    ('t', b'\t'),
    ('n', b'\n'),
    ('r', b'\r'),
    ('a', 0x07),
    ('b', 0x08),
    ('\'', b'\''),
    ('"', b'"'),
    ('\\', b'\\'),
];

fn simple_escape(c: char) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|(escape, _)| *escape == c)
        .map(|&(_, byte)| byte)
}

/// Returns the value of the three octal digits at the start of `s`, if any.
fn octal_prefix(s: &str) -> Option<u16> {
    let digits = s.as_bytes().get(..3)?;
    if !digits.iter().all(|b| (b'0'..=b'7').contains(b)) {
        return None;
    }
    Some(
        digits
            .iter()
            .fold(0u16, |acc, &b| acc * 8 + u16::from(b - b'0')),
    )
}

/// Removes C-style escapes from `text`.
///
/// A backslash followed by three octal digits becomes the byte with that
/// value, and a backslash followed by one of `t n r a b ' " \` becomes the
/// matching character. A backslash at the end of the text or in front of a
/// line feed is kept as is.
///
/// A run of octal escapes may spell a multi-byte UTF-8 character. An escaped
/// byte that does not belong to a valid UTF-8 sequence stands for the
/// character of the same code point, so `\351` alone decodes to `é`.
///
/// # Errors
///
/// Fails on a backslash followed by any other character and on an octal
/// value above `\377`.
///
/// # Example
///
/// ```
/// use logtriga_rs::quoting::unescape;
///
/// assert_eq!(unescape(r"a\tb").unwrap(), "a\tb");
/// assert_eq!(unescape(r"\101").unwrap(), "A");
/// ```
pub fn unescape(text: &str) -> Result<String, UnescapeError> {
    if !text.contains('\\') {
        return Ok(text.into());
    }

    let mut out: Vec<u8> = Vec::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('\\') {
        out.extend_from_slice(&rest.as_bytes()[..idx]);
        let tail = &rest[idx + 1..];

        if let Some(code) = octal_prefix(tail) {
            let byte = u8::try_from(code).map_err(|_| UnescapeError::OctalOutOfRange(code))?;
            out.push(byte);
            rest = &tail[3..];
            continue;
        }

        match tail.chars().next() {
            None | Some('\n') => {
                out.push(b'\\');
                rest = tail;
            }
            Some(c) => {
                out.push(simple_escape(c).ok_or(UnescapeError::UnknownEscape(c))?);
                rest = &tail[c.len_utf8()..];
            }
        }
    }
    out.extend_from_slice(rest.as_bytes());

    Ok(decode_bytes(&out))
}

/// Decode UTF-8, reading each byte outside a valid sequence as U+0000..=U+00FF.
fn decode_bytes(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
        decoded.extend(chunk.invalid().iter().copied().map(char::from));
    }
    decoded
}

/// Removes C-style escapes like [`unescape`], and decodes the COPY null
/// marker `\N` to `None`.
///
/// Only an input that is exactly `\N` is treated as null.
///
/// # Errors
///
/// Same as [`unescape`].
pub fn unescape_copy(text: &str) -> Result<Option<String>, UnescapeError> {
    if text == r"\N" {
        return Ok(None);
    }
    unescape(text).map(Some)
}
