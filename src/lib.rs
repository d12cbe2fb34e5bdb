#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod errors;
pub mod logtriga;
pub mod quoting;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
pub use logtriga::{Operation, ParsedRow, Tokenizer, parse_fragment, parse_logtriga_sql};
pub use quoting::{unescape, unescape_copy};

// Re-export errors
pub use errors::{Error, SyntaxError};
pub use quoting::{QuoteError, UnescapeError};
