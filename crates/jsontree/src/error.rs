use core::fmt;
use std::io;

use thiserror::Error;

use crate::{element::ElementKind, token::TokenKind};

/// Error returned when a document cannot be tokenized or parsed.
///
/// Every parse error is fatal to the current document: no partial tree is
/// returned. The line number is the tokenizer's line counter at the moment
/// the error was detected (1-based, advanced on each newline seen between
/// tokens).
#[derive(Error, Debug)]
#[error("{source} in line {line}")]
pub struct ParseError {
    pub(crate) source: ErrorSource,
    pub(crate) line: usize,
}

impl ParseError {
    pub(crate) fn new(source: impl Into<ErrorSource>, line: usize) -> Self {
        Self {
            source: source.into(),
            line,
        }
    }

    /// The line on which the error was detected.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The category and payload of the error.
    #[must_use]
    pub fn kind(&self) -> &ErrorSource {
        &self.source
    }

    /// Consumes the error, returning its category and payload.
    #[must_use]
    pub fn into_kind(self) -> ErrorSource {
        self.source
    }

    /// Returns `true` if the byte source failed.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self.source, ErrorSource::Source(_))
    }

    /// Returns `true` if the input contained a malformed token.
    #[must_use]
    pub fn is_lex(&self) -> bool {
        matches!(self.source, ErrorSource::Lex(_))
    }

    /// Returns `true` if the tokens did not form a valid document.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.source, ErrorSource::Syntax(_))
    }
}

/// The category of a [`ParseError`].
#[derive(Error, Debug)]
pub enum ErrorSource {
    /// The byte source returned an error.
    #[error("read error: {0}")]
    Source(#[from] io::Error),
    /// A token was malformed.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// A well-formed token appeared where the grammar does not allow it.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Malformed input at the token level.
///
/// Malformed escapes inside strings are not lex errors; they decode to
/// U+FFFD instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// The byte cannot start any token.
    #[error("invalid character '{}'", .0.escape_ascii())]
    InvalidCharacter(u8),
    /// A `true`, `false` or `null` literal was misspelled.
    #[error("invalid {0} value")]
    InvalidLiteral(&'static str),
    /// A number violated the JSON numeric grammar.
    #[error("invalid number, {0}")]
    InvalidNumber(&'static str),
    /// The source ended in the middle of a token.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// A token of the wrong kind for the current parser state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    /// What the parser was waiting for.
    pub expected: Expected,
    /// The kind of token it read instead.
    pub found: TokenKind,
}

/// The tokens a parser state accepts, used to describe a [`SyntaxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The first token of a document.
    RootValue,
    /// The first token of a document when scalar roots are allowed.
    AnyRootValue,
    /// A member name or the end of an empty object.
    ObjectKeyOrClose,
    /// A member name after a comma.
    ObjectKey,
    /// The colon between a member name and its value.
    Colon,
    /// A member value or an array element after a comma.
    Value,
    /// The first element of an array or the end of an empty array.
    ValueOrArrayClose,
    /// The separator or terminator after an object member.
    CommaOrObjectClose,
    /// The separator or terminator after an array element.
    CommaOrArrayClose,
    /// Nothing: the top-level value is complete.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::RootValue => "'[', '{' or end of input",
            Expected::AnyRootValue => "value or end of input",
            Expected::ObjectKeyOrClose => "string key or '}'",
            Expected::ObjectKey => "string key",
            Expected::Colon => "':'",
            Expected::Value => "value",
            Expected::ValueOrArrayClose => "value or ']'",
            Expected::CommaOrObjectClose => "',' or '}'",
            Expected::CommaOrArrayClose => "',' or ']'",
            Expected::EndOfInput => "end of input after top-level value",
        })
    }
}

/// Failure of [`Element::try_at`](crate::Element::try_at).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The receiver is not an array.
    #[error("element {kind} does not support indexed access")]
    NotArray {
        /// Kind of the receiver.
        kind: ElementKind,
    },
    /// The index is not below the array length.
    #[error("index {index} is out of range [0:{len}]")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the array.
        len: usize,
    },
}

/// Failure of a path lookup such as
/// [`Element::try_get`](crate::Element::try_get).
///
/// `position` is the zero-based index of the offending path segment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// An object has no member with the segment's name.
    #[error("could not find path element #{position} with name {name}")]
    MissingMember {
        /// Offending segment position.
        position: usize,
        /// The member name that was looked up.
        name: String,
    },
    /// An array was addressed with a segment that is not an index.
    #[error("path element #{position} '{segment}' is not a valid array index")]
    InvalidIndex {
        /// Offending segment position.
        position: usize,
        /// The segment text.
        segment: String,
    },
    /// An array was addressed past its end.
    #[error("path element #{position} with index {index} is out of range [0:{len}]")]
    IndexOutOfRange {
        /// Offending segment position.
        position: usize,
        /// The parsed index.
        index: usize,
        /// Length of the array.
        len: usize,
    },
    /// A scalar was asked for a child.
    #[error("path element #{position} of type {kind} does not support navigation")]
    NotContainer {
        /// Offending segment position.
        position: usize,
        /// Kind of the scalar that was reached.
        kind: ElementKind,
    },
    /// The path resolved, but to an element of the wrong kind.
    #[error("expected {expected} element, found {found}")]
    KindMismatch {
        /// The kind the accessor reads.
        expected: ElementKind,
        /// The kind that was found.
        found: ElementKind,
    },
}
