//! Submodule defining the errors used across the crate.

use crate::quoting::UnescapeError;

/// The single syntax error raised by the logtriga fragment parser.
///
/// Every structural problem in a fragment collapses into this one type: a
/// misplaced punctuation token, a missing keyword, an early end of input or a
/// field/value count mismatch. The [`Display`](core::fmt::Display) text
/// describes what the parser was expecting and is not meant to be matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("syntax error: {message}")]
pub struct SyntaxError {
    message: &'static str,
}

impl SyntaxError {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Errors returned by the fragment parsing entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The fragment does not follow the grammar of its operation.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A quoted field or value holds an escape sequence that cannot be decoded.
    #[error(transparent)]
    Unescape(#[from] UnescapeError),
}
