//! String quoting and unquoting helpers.
//!
//! These are the stateless primitives the logtriga parser relies on to
//! decode quoted identifiers and literals, together with their encoding
//! counterparts:
//! - backslash escape removal ([`unescape`], [`unescape_copy`])
//! - SQL literal and `COPY` quoting, including `bytea`
//! - identifier quoting against the reserved keyword table
//! - JSON string quoting
//! - URL-style encoding of rows with NULL support

mod escape;
mod ident;
mod json;
mod literal;
mod urlencode;

pub use escape::{UnescapeError, unescape, unescape_copy};
pub use ident::{is_reserved_keyword, quote_fqident, quote_ident};
pub use json::quote_json;
pub use literal::{
    QuoteError, quote_bytea_copy, quote_bytea_literal, quote_bytea_raw, quote_copy, quote_literal,
    quote_statement,
};
pub use urlencode::{db_urldecode, db_urlencode};
