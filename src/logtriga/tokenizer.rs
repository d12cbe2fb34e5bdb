//! Lazy tokenizer for logtriga fragments.

use core::iter::FusedIterator;

/// Whitespace skipped between tokens.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_ident_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether a backslash at `idx` forms an escaped pair with the next byte.
///
/// A backslash never escapes a line feed.
fn escapes_next(bytes: &[u8], idx: usize) -> bool {
    !matches!(bytes.get(idx + 1).copied(), None | Some(b'\n'))
}

/// Splits a fragment into tokens.
///
/// Each token is one of:
/// - an identifier: an ASCII letter followed by letters, digits or `_`
/// - a double-quoted identifier, which may contain backslash escapes
/// - a single-quoted literal, which may contain backslash escapes and `''`
/// - any other single non-whitespace character
///
/// Tokens borrow from the input and keep their original case and quotes.
/// The iterator returns `None` once only whitespace is left, which is the
/// end-of-stream signal the grammar drivers branch on.
///
/// # Example
///
/// ```
/// use logtriga_rs::Tokenizer;
///
/// let tokens: Vec<&str> = Tokenizer::new(r#"("a", b) values ('x''y', null)"#).collect();
/// assert_eq!(
///     tokens,
///     ["(", "\"a\"", ",", "b", ")", "values", "(", "'x''y'", ",", "null", ")"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer for the given fragment.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn identifier_end(bytes: &[u8], start: usize) -> usize {
        start
            + 1
            + bytes[start + 1..]
                .iter()
                .take_while(|&&b| is_ident_cont(b))
                .count()
    }

    /// End of a double-quoted identifier starting at `start`, or `None`
    /// when it is not terminated.
    fn quoted_ident_end(bytes: &[u8], start: usize) -> Option<usize> {
        let mut i = start + 1;
        loop {
            match *bytes.get(i)? {
                b'"' => return Some(i + 1),
                b'\\' if escapes_next(bytes, i) => i += 2,
                b'\\' => return None,
                _ => i += 1,
            }
        }
    }

    /// End of a single-quoted literal starting at `start`, or `None` when it
    /// is not terminated.
    ///
    /// `''` is read as an escaped quote. If the literal then runs off the
    /// end, the first quote of the last such pair is taken as the closing
    /// quote instead.
    fn quoted_literal_end(bytes: &[u8], start: usize) -> Option<usize> {
        let mut last_pair = None;
        let mut i = start + 1;
        loop {
            match bytes.get(i).copied() {
                Some(b'\'') if bytes.get(i + 1) == Some(&b'\'') => {
                    last_pair = Some(i + 1);
                    i += 2;
                }
                Some(b'\'') => return Some(i + 1),
                Some(b'\\') if escapes_next(bytes, i) => i += 2,
                Some(b'\\') | None => return last_pair,
                Some(_) => i += 1,
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.input.as_bytes();
        let start = self.pos
            + bytes[self.pos..]
                .iter()
                .take_while(|&&b| is_space(b))
                .count();

        let first = self.input[start..].chars().next()?;
        let end = match first {
            c if c.is_ascii_alphabetic() => Self::identifier_end(bytes, start),
            '"' => Self::quoted_ident_end(bytes, start).unwrap_or(start + 1),
            '\'' => Self::quoted_literal_end(bytes, start).unwrap_or(start + 1),
            c => start + c.len_utf8(),
        };

        self.pos = end;
        Some(&self.input[start..end])
    }
}

impl FusedIterator for Tokenizer<'_> {}
