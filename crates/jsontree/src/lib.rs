//! A streaming JSON tokenizer and an iterative tree parser.
//!
//! The [`Tokenizer`] pulls bytes from any [`std::io::Read`] through a
//! fixed-size buffer and yields one [`Token`] per call, so documents never
//! have to be held in memory as a whole. The [`Parser`] drives a tokenizer
//! and builds an [`Element`] tree with an explicit container stack; nesting
//! depth is bounded by memory, not by the call stack.
//!
//! The top level of a document must be an object, an array, or nothing at
//! all (which parses as `null`). Bare scalar documents are rejected unless
//! [`ParserOptions::allow_scalar_root`] is set.
//!
//! ```rust
//! use jsontree::Lookup;
//!
//! let root = jsontree::from_str(r#"{"store": {"books": [{"title": "Dune"}]}}"#).unwrap();
//! assert_eq!(root.string(["store", "books", "0", "title"]), "Dune");
//! assert_eq!(root.get(["store", "books"]).size(), 1);
//!
//! let err = jsontree::from_str("{\n\"a\": tru}").unwrap_err();
//! assert_eq!(err.to_string(), "lex error: invalid true value in line 2");
//! ```

mod element;
mod error;
mod options;
mod parser;
mod stack;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests;

use std::io;

pub use element::{Array, Element, ElementKind, Lookup, Map};
pub use error::{
    ErrorSource, Expected, IndexError, LexError, NavigationError, ParseError, SyntaxError,
};
pub use options::{DEFAULT_BUFFER_SIZE, DEFAULT_SCRATCH_CAPACITY, ParserOptions, TokenizerOptions};
pub use parser::Parser;
pub use stack::{ContainerStack, Frame};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Parses a document from a byte slice with default options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn from_slice(bytes: &[u8]) -> Result<Element, ParseError> {
    Tokenizer::from_slice(bytes).parse()
}

/// Parses a document from a string with default options.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn from_str(text: &str) -> Result<Element, ParseError> {
    Tokenizer::from_text(text).parse()
}

/// Parses a document from a reader with default options.
///
/// The reader is consumed through the tokenizer's read buffer; wrapping it
/// in a [`std::io::BufReader`] is not needed.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn from_reader<R: io::Read>(reader: R) -> Result<Element, ParseError> {
    Tokenizer::new(reader).parse()
}
