//! Parser for the partial SQL written by logtriga triggers.
//!
//! A logtriga trigger records each row change as an operation letter and a
//! fragment of SQL without the statement keyword or table name:
//! - `I`: `(col1, col2) values ('data', null)`
//! - `U`: `col1 = 'data1', col2 = null where pk1 = 'pk1' and pk2 = 'pk2'`
//! - `D`: `pk1 = 'pk1' and pk2 = 'pk2'`
//!
//! [`parse_fragment`] turns such a fragment back into an ordered row of
//! column names and values.
//!
//! The parser expects strings quoted with `standard_conforming_strings =
//! off` and does not support dollar quoting, expressions, `IS (NOT) NULL`
//! conditions or updates of primary key columns.

mod assemble;
mod grammar;
mod tokenizer;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

use crate::errors::{Error, SyntaxError};
pub use tokenizer::Tokenizer;

/// Ordered row of column names to values, where `None` is SQL `NULL`.
///
/// Columns keep the order in which they appear in the fragment.
pub type ParsedRow = IndexMap<String, Option<String>, DefaultHashBuilder>;

/// The kind of change recorded by the trigger.
///
/// Selects the grammar used to read the fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Row inserted.
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    Insert,
    /// Row updated.
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    Update,
    /// Row deleted.
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Delete,
}

impl Operation {
    /// The single-letter tag used by the trigger for this operation.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Insert => 'I',
            Self::Update => 'U',
            Self::Delete => 'D',
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = SyntaxError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag {
            'I' => Ok(Self::Insert),
            'U' => Ok(Self::Update),
            'D' => Ok(Self::Delete),
            _ => Err(SyntaxError::new("unknown operation tag")),
        }
    }
}

impl FromStr for Operation {
    type Err = SyntaxError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut chars = tag.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(SyntaxError::new("unknown operation tag")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Parse a logtriga fragment into a row.
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the fragment does not follow the grammar
/// of `op`, and [`Error::Unescape`] when a quoted name or value holds an
/// escape sequence that cannot be decoded. No partial row is returned.
///
/// # Example
///
/// ```
/// use logtriga_rs::{parse_fragment, Operation};
///
/// let row = parse_fragment(Operation::Update, "col1 = 'x', col2 = null where pk = '1'").unwrap();
/// assert_eq!(row["col1"].as_deref(), Some("x"));
/// assert_eq!(row["col2"], None);
/// assert_eq!(row["pk"].as_deref(), Some("1"));
/// ```
pub fn parse_fragment(op: Operation, fragment: &str) -> Result<ParsedRow, Error> {
    let columns = grammar::split_columns(op, fragment).inspect_err(|err| {
        tracing::debug!(%op, %err, "rejected logtriga fragment");
    })?;
    let row = assemble::assemble(&columns).inspect_err(|err| {
        tracing::debug!(%op, %err, "undecodable logtriga fragment");
    })?;
    tracing::debug!(%op, columns = row.len(), "parsed logtriga fragment");
    Ok(row)
}

/// Parse a logtriga fragment given the trigger's operation tag (`"I"`,
/// `"U"` or `"D"`).
///
/// # Errors
///
/// An unknown tag is a syntax error; otherwise see [`parse_fragment`].
pub fn parse_logtriga_sql(tag: &str, fragment: &str) -> Result<ParsedRow, Error> {
    parse_fragment(tag.parse()?, fragment)
}
