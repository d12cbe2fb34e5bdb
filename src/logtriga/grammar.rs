//! Grammar drivers for the three fragment shapes.
//!
//! Each driver pulls tokens from a [`Tokenizer`] and collects the raw field
//! and value tokens in order. Running out of tokens is how a well formed
//! fragment ends, so every driver accepts end-of-stream at exactly one
//! point and treats it as a syntax error anywhere else.

use alloc::vec::Vec;

use super::{Operation, Tokenizer};
use crate::errors::SyntaxError;

const VALUES: &str = "values";
const WHERE: &str = "where";
const AND: &str = "and";

/// Raw field and value tokens collected by a driver, still quoted.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RawColumns<'a> {
    pub(crate) fields: Vec<&'a str>,
    pub(crate) values: Vec<&'a str>,
}

struct Driver<'a> {
    tokens: Tokenizer<'a>,
    columns: RawColumns<'a>,
}

impl<'a> Driver<'a> {
    fn new(fragment: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(fragment),
            columns: RawColumns::default(),
        }
    }

    /// Next token, where running out of input is an error.
    fn expect_token(&mut self, expected: &'static str) -> Result<&'a str, SyntaxError> {
        self.tokens.next().ok_or(SyntaxError::new(expected))
    }

    /// Consume a token that must be exactly `punct`.
    fn expect(&mut self, punct: &str, expected: &'static str) -> Result<(), SyntaxError> {
        if self.expect_token(expected)? == punct {
            Ok(())
        } else {
            Err(SyntaxError::new(expected))
        }
    }

    /// Consume a token that must be the keyword `keyword`, in any case.
    fn expect_keyword(&mut self, keyword: &str, expected: &'static str) -> Result<(), SyntaxError> {
        if self.expect_token(expected)?.eq_ignore_ascii_case(keyword) {
            Ok(())
        } else {
            Err(SyntaxError::new(expected))
        }
    }

    fn push_field(&mut self, field: &'a str) {
        tracing::trace!(field, "column");
        self.columns.fields.push(field);
    }

    fn push_value(&mut self, value: &'a str) {
        tracing::trace!(value, "value");
        self.columns.values.push(value);
    }

    /// `field = value`, with the field token already consumed.
    fn assignment_after(&mut self, field: &'a str) -> Result<(), SyntaxError> {
        self.push_field(field);
        self.expect("=", "expected '=' after a column name")?;
        let value = self.expect_token("expected a value after '='")?;
        self.push_value(value);
        Ok(())
    }

    /// `field = value`.
    fn assignment(&mut self) -> Result<(), SyntaxError> {
        let field = self.expect_token("expected a column name")?;
        self.assignment_after(field)
    }

    /// `(col1, col2) values ('data', null)`
    fn insert(&mut self) -> Result<(), SyntaxError> {
        self.expect("(", "expected '(' before the column list")?;
        loop {
            let field = self.expect_token("expected a column name")?;
            self.push_field(field);
            match self.expect_token("expected ',' or ')' after a column name")? {
                "," => {}
                ")" => break,
                _ => return Err(SyntaxError::new("expected ',' or ')' after a column name")),
            }
        }

        self.expect_keyword(VALUES, "expected 'values' after the column list")?;
        self.expect("(", "expected '(' before the value list")?;
        loop {
            match self.expect_token("expected ')' to close the value list")? {
                ")" => break,
                "," => {}
                value => self.push_value(value),
            }
        }

        match self.tokens.next() {
            None => Ok(()),
            Some(_) => Err(SyntaxError::new("expected end of input after the value list")),
        }
    }

    /// `col1 = 'data1', col2 = null where pk1 = 'pk1' and pk2 = 'pk2'`
    fn update(&mut self) -> Result<(), SyntaxError> {
        loop {
            self.assignment()?;
            let token = self.expect_token("expected ',' or 'where' after an assignment")?;
            if token == "," {
                continue;
            }
            if token.eq_ignore_ascii_case(WHERE) {
                break;
            }
            return Err(SyntaxError::new("expected ',' or 'where' after an assignment"));
        }

        loop {
            self.assignment()?;
            match self.tokens.next() {
                None => return Ok(()),
                Some(token) if token.eq_ignore_ascii_case(AND) => {}
                Some(_) => return Err(SyntaxError::new("expected 'and' between key conditions")),
            }
        }
    }

    /// `pk1 = 'pk1' and pk2 = 'pk2'`
    fn delete(&mut self) -> Result<(), SyntaxError> {
        loop {
            let Some(token) = self.tokens.next() else {
                return Ok(());
            };
            if token.eq_ignore_ascii_case(AND) {
                continue;
            }
            self.assignment_after(token)?;
        }
    }
}

/// Run the driver for `op` over `fragment`.
///
/// On success the field and value lists are non-empty and of equal length.
pub(crate) fn split_columns(op: Operation, fragment: &str) -> Result<RawColumns<'_>, SyntaxError> {
    let mut driver = Driver::new(fragment);
    match op {
        Operation::Insert => driver.insert()?,
        Operation::Update => driver.update()?,
        Operation::Delete => driver.delete()?,
    }

    let RawColumns { fields, values } = driver.columns;
    if fields.is_empty() || fields.len() != values.len() {
        return Err(SyntaxError::new("column and value counts differ"));
    }
    Ok(RawColumns { fields, values })
}
