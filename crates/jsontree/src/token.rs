//! Lexical units produced by the [`Tokenizer`](crate::Tokenizer).

use core::fmt;
use std::borrow::Cow;

use crate::error::ParseError;

/// The kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string; the text is decoded.
    String,
    /// A number; the text is the literal as written.
    Number,
    /// `true` or `false`.
    Bool,
    /// `null`.
    Null,
    /// The source is exhausted.
    Done,
    /// The input is malformed at this point.
    Invalid,
    /// The source failed or ended in the middle of a token.
    Error,
}

impl TokenKind {
    /// Returns `true` for tokens that are complete values on their own.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Bool | Self::Null)
    }

    /// Returns `true` for `Invalid` and `Error` tokens.
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Invalid | Self::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::ArrayOpen => "'['",
            TokenKind::ArrayClose => "']'",
            TokenKind::ObjectOpen => "'{'",
            TokenKind::ObjectClose => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Bool => "boolean",
            TokenKind::Null => "null",
            TokenKind::Done => "end of input",
            TokenKind::Invalid => "invalid token",
            TokenKind::Error => "read error",
        })
    }
}

/// One lexical unit.
///
/// A token borrows the tokenizer that produced it: its text may point into
/// the read buffer or the scratch buffer, both of which are overwritten by
/// the next call to [`Tokenizer::next_token`](crate::Tokenizer::next_token).
/// Call [`Cow::into_owned`] on [`text`](Self::text) to keep it.
#[derive(Debug)]
pub struct Token<'a> {
    /// What the token is.
    pub kind: TokenKind,
    /// Decoded text of a string, literal text of a number, `"true"` or
    /// `"false"` for booleans, the character of a punctuation token, and
    /// empty otherwise.
    pub text: Cow<'a, str>,
    /// The value of a `Bool` token; `false` for every other kind.
    pub value: bool,
    /// Position of this call in the tokenizer's call sequence, starting at 1.
    pub sequence: u64,
    /// The failure, present iff `kind` is `Invalid` or `Error`.
    pub error: Option<ParseError>,
}

impl Token<'_> {
    /// The value of a `Bool` token.
    #[must_use]
    pub fn boolean(&self) -> bool {
        self.value
    }

    /// The token text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the source is exhausted.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.kind == TokenKind::Done
    }
}
