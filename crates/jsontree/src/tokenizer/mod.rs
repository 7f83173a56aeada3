//! Pull tokenizer over an [`io::Read`] byte source.
//!
//! Overview
//! - The tokenizer owns a fixed-size read buffer. `[begin, end)` is the
//!   unread window of the most recent read. When the window runs dry in the
//!   middle of a token, the part of the token already scanned is appended to
//!   the scratch buffer before the next read overwrites the buffer, and
//!   scanning resumes at offset 0.
//! - `mark` is the buffer offset where the pending, not yet copied part of
//!   the current token starts. It is `None` between tokens and while an
//!   escape sequence is being decoded (escape bytes are never copied
//!   verbatim).
//! - Strings without escapes that fit in one window are returned as a slice
//!   of the read buffer. Everything else is assembled in the scratch buffer.
//!
//! Invariants
//! - `mark <= begin <= end <= buffer.len()` whenever `mark` is set.
//! - The scratch buffer only holds text of the token being scanned; it is
//!   truncated at the start of every string and number.

mod class;
mod escape_buffer;


use std::{borrow::Cow, io};

use bstr::ByteSlice;
use log::trace;

use self::{
    class::{Class, classify},
    escape_buffer::{
        HexStep, UnicodeEscapeBuffer, combine_surrogates, is_low_surrogate, is_surrogate,
    },
};
use crate::{
    Element, ParseError, Parser, ParserOptions, TokenizerOptions,
    error::{ErrorSource, LexError},
    token::{Token, TokenKind},
};

const REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

/// Why a token could not be produced.
#[derive(Debug)]
enum Fault {
    /// The byte source failed.
    Source(io::Error),
    /// The byte source ended while the token still needed bytes.
    Truncated,
    /// The input is not a valid token.
    Malformed(LexError),
}

/// Where the text of a scanned token lives.
#[derive(Debug, Clone, Copy)]
enum Span {
    Static(&'static str),
    Window(usize, usize),
    Scratch,
}

#[derive(Debug, Clone, Copy)]
struct Lexeme {
    kind: TokenKind,
    span: Span,
    value: bool,
}

impl Lexeme {
    fn fixed(kind: TokenKind, text: &'static str) -> Self {
        Self {
            kind,
            span: Span::Static(text),
            value: false,
        }
    }

    fn text(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            value: false,
        }
    }

    fn boolean(value: bool) -> Self {
        Self {
            kind: TokenKind::Bool,
            span: Span::Static(if value { "true" } else { "false" }),
            value,
        }
    }
}

/// A streaming JSON tokenizer.
///
/// The tokenizer pulls bytes from its source on demand and yields one
/// [`Token`] per call to [`next_token`](Self::next_token). It can be bound to
/// a new source with [`read`](Self::read) or [`rebind`](Self::rebind), which
/// reuses its buffers.
///
/// # Examples
///
/// ```rust
/// use jsontree::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::from_text(r#"{"a": [true]}"#);
/// let mut kinds = Vec::new();
/// loop {
///     let token = tokenizer.next_token();
///     if token.is_done() {
///         break;
///     }
///     kinds.push(token.kind);
/// }
/// assert_eq!(kinds, [
///     TokenKind::ObjectOpen,
///     TokenKind::String,
///     TokenKind::Colon,
///     TokenKind::ArrayOpen,
///     TokenKind::Bool,
///     TokenKind::ArrayClose,
///     TokenKind::ObjectClose,
/// ]);
/// ```
pub struct Tokenizer<R> {
    source: R,
    buffer: Box<[u8]>,
    begin: usize,
    end: usize,
    /// Set once the source has reported end of input.
    exhausted: bool,

    scratch: Vec<u8>,
    mark: Option<usize>,
    escape: UnicodeEscapeBuffer,

    line: usize,
    sequence: u64,
}

impl<'a> Tokenizer<&'a [u8]> {
    /// Creates a tokenizer over an in-memory byte slice.
    #[must_use]
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }

    /// Creates a tokenizer over an in-memory string.
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: io::Read> Tokenizer<R> {
    /// Creates a tokenizer with default options.
    pub fn new(source: R) -> Self {
        Self::with_options(source, TokenizerOptions::default())
    }

    /// Creates a tokenizer with the given options.
    pub fn with_options(source: R, options: TokenizerOptions) -> Self {
        Self {
            source,
            buffer: vec![0; options.buffer_size.max(1)].into_boxed_slice(),
            begin: 0,
            end: 0,
            exhausted: false,
            scratch: Vec::with_capacity(options.scratch_capacity),
            mark: None,
            escape: UnicodeEscapeBuffer::new(),
            line: 1,
            sequence: 0,
        }
    }

    /// Binds the tokenizer to a new source of the same type, discarding any
    /// unread input. Buffers are kept; positions and counters are reset.
    pub fn read(&mut self, source: R) -> &mut Self {
        self.source = source;
        self.reset();
        self
    }

    /// Moves the tokenizer's buffers over to a new source of any type.
    pub fn rebind<S: io::Read>(self, source: S) -> Tokenizer<S> {
        let mut tokenizer = Tokenizer {
            source,
            buffer: self.buffer,
            begin: 0,
            end: 0,
            exhausted: false,
            scratch: self.scratch,
            mark: None,
            escape: self.escape,
            line: 1,
            sequence: 0,
        };
        tokenizer.reset();
        tokenizer
    }

    /// Parses one document from the source with default parser options.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the source fails or does not contain
    /// exactly one well-formed document.
    pub fn parse(&mut self) -> Result<Element, ParseError> {
        Parser::new(self).parse()
    }

    /// Parses one document from the source with the given parser options.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with(&mut self, options: ParserOptions) -> Result<Element, ParseError> {
        Parser::with_options(self, options).parse()
    }

    /// Current line, starting at 1. Only newlines between tokens are
    /// counted.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Number of calls to [`next_token`](Self::next_token) since the last
    /// (re)binding.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Capacity of the read buffer.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// A reference to the byte source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwraps the byte source. Unread buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn reset(&mut self) {
        self.begin = 0;
        self.end = 0;
        self.exhausted = false;
        self.scratch.clear();
        self.mark = None;
        self.escape.reset();
        self.line = 1;
        self.sequence = 0;
    }

    /// Reads the next token.
    ///
    /// After the source is exhausted every call returns a `Done` token. A
    /// failed call returns an `Invalid` (malformed input) or `Error` (source
    /// failure or truncation) token carrying the error.
    pub fn next_token(&mut self) -> Token<'_> {
        self.sequence += 1;
        match self.scan() {
            Ok(lexeme) => Token {
                kind: lexeme.kind,
                text: self.materialize(lexeme.span),
                value: lexeme.value,
                sequence: self.sequence,
                error: None,
            },
            Err(fault) => {
                let (kind, source) = match fault {
                    Fault::Source(err) => (TokenKind::Error, ErrorSource::Source(err)),
                    Fault::Truncated => (
                        TokenKind::Error,
                        ErrorSource::Lex(LexError::UnexpectedEndOfInput),
                    ),
                    Fault::Malformed(err) => (TokenKind::Invalid, ErrorSource::Lex(err)),
                };
                Token {
                    kind,
                    text: Cow::Borrowed(""),
                    value: false,
                    sequence: self.sequence,
                    error: Some(ParseError::new(source, self.line)),
                }
            }
        }
    }

    fn materialize(&self, span: Span) -> Cow<'_, str> {
        match span {
            Span::Static(text) => Cow::Borrowed(text),
            Span::Window(start, end) => self.buffer[start..end].to_str_lossy(),
            Span::Scratch => self.scratch.to_str_lossy(),
        }
    }

    fn scan(&mut self) -> Result<Lexeme, Fault> {
        self.mark = None;
        let Some(byte) = self.skip_whitespace()? else {
            return Ok(Lexeme::fixed(TokenKind::Done, ""));
        };
        match classify(byte) {
            Class::ArrayOpen => Ok(self.punctuation(TokenKind::ArrayOpen, "[")),
            Class::ArrayClose => Ok(self.punctuation(TokenKind::ArrayClose, "]")),
            Class::ObjectOpen => Ok(self.punctuation(TokenKind::ObjectOpen, "{")),
            Class::ObjectClose => Ok(self.punctuation(TokenKind::ObjectClose, "}")),
            Class::Colon => Ok(self.punctuation(TokenKind::Colon, ":")),
            Class::Comma => Ok(self.punctuation(TokenKind::Comma, ",")),
            Class::Quote => self.lex_string(),
            Class::Number => self.lex_number(),
            Class::True => {
                self.lex_literal(b"rue", "true")?;
                Ok(Lexeme::boolean(true))
            }
            Class::False => {
                self.lex_literal(b"alse", "false")?;
                Ok(Lexeme::boolean(false))
            }
            Class::Null => {
                self.lex_literal(b"ull", "null")?;
                Ok(Lexeme::fixed(TokenKind::Null, ""))
            }
            Class::Invalid | Class::Whitespace => {
                Err(Fault::Malformed(LexError::InvalidCharacter(byte)))
            }
        }
    }

    /// Reads the next chunk from the source into the buffer.
    ///
    /// The pending part of the current token (from `mark` to the end of the
    /// window) is saved to the scratch buffer first. Returns `false` at end
    /// of input. Interrupted reads are retried.
    fn refill(&mut self) -> Result<bool, Fault> {
        if let Some(mark) = self.mark {
            self.scratch.extend_from_slice(&self.buffer[mark..self.end]);
            self.mark = Some(0);
        }
        self.begin = 0;
        self.end = 0;
        if self.exhausted {
            return Ok(false);
        }
        loop {
            match self.source.read(&mut self.buffer) {
                Ok(0) => {
                    trace!("byte source exhausted");
                    self.exhausted = true;
                    return Ok(false);
                }
                Ok(n) => {
                    trace!("refilled read buffer with {n} bytes");
                    self.end = n;
                    return Ok(true);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(Fault::Source(err)),
            }
        }
    }

    /// Returns the byte under the cursor without consuming it, refilling if
    /// needed. `None` means end of input.
    #[inline]
    fn peek(&mut self) -> Result<Option<u8>, Fault> {
        if self.begin == self.end && !self.refill()? {
            return Ok(None);
        }
        Ok(Some(self.buffer[self.begin]))
    }

    /// Like [`peek`](Self::peek), but end of input is a truncated token.
    #[inline]
    fn require(&mut self) -> Result<u8, Fault> {
        self.peek()?.ok_or(Fault::Truncated)
    }

    #[inline]
    fn take(&mut self) -> Result<u8, Fault> {
        let byte = self.require()?;
        self.begin += 1;
        Ok(byte)
    }

    fn skip_whitespace(&mut self) -> Result<Option<u8>, Fault> {
        loop {
            while self.begin < self.end {
                let byte = self.buffer[self.begin];
                if classify(byte) != Class::Whitespace {
                    return Ok(Some(byte));
                }
                if byte == b'\n' {
                    self.line += 1;
                }
                self.begin += 1;
            }
            if !self.refill()? {
                return Ok(None);
            }
        }
    }

    fn punctuation(&mut self, kind: TokenKind, text: &'static str) -> Lexeme {
        self.begin += 1;
        Lexeme::fixed(kind, text)
    }

    /// Ends the capture started at `mark`, returning where the text is.
    fn capture(&mut self) -> Span {
        let mark = self.mark.take().unwrap_or(self.begin);
        if self.scratch.is_empty() {
            Span::Window(mark, self.begin)
        } else {
            self.scratch.extend_from_slice(&self.buffer[mark..self.begin]);
            Span::Scratch
        }
    }

    /// Matches the bytes of a literal after its first character.
    fn lex_literal(&mut self, rest: &[u8], literal: &'static str) -> Result<(), Fault> {
        self.begin += 1;
        for &expected in rest {
            match self.peek()? {
                Some(byte) if byte == expected => self.begin += 1,
                Some(_) => return Err(Fault::Malformed(LexError::InvalidLiteral(literal))),
                None => return Err(Fault::Truncated),
            }
        }
        Ok(())
    }

    // --- Numbers ----------------------------------------------------------

    fn lex_number(&mut self) -> Result<Lexeme, Fault> {
        self.scratch.clear();
        self.mark = Some(self.begin);

        if self.peek()? == Some(b'-') {
            self.begin += 1;
        }
        match self.peek()? {
            Some(b'0') => {
                self.begin += 1;
                if matches!(self.peek()?, Some(byte) if byte.is_ascii_digit()) {
                    return Err(invalid_number("leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => self.skip_digits()?,
            Some(_) => return Err(invalid_number("expected digit after '-'")),
            None => return Err(Fault::Truncated),
        }

        if self.peek()? == Some(b'.') {
            self.begin += 1;
            self.expect_digits("expected digit after '.'")?;
        }

        if matches!(self.peek()?, Some(b'e' | b'E')) {
            self.begin += 1;
            if matches!(self.peek()?, Some(b'+' | b'-')) {
                self.begin += 1;
            }
            self.expect_digits("expected digit in exponent")?;
        }

        let span = self.capture();
        Ok(Lexeme::text(TokenKind::Number, span))
    }

    fn expect_digits(&mut self, message: &'static str) -> Result<(), Fault> {
        match self.peek()? {
            Some(byte) if byte.is_ascii_digit() => self.skip_digits(),
            Some(_) => Err(invalid_number(message)),
            None => Err(Fault::Truncated),
        }
    }

    fn skip_digits(&mut self) -> Result<(), Fault> {
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_digit() {
                break;
            }
            self.begin += 1;
        }
        Ok(())
    }

    // --- Strings ----------------------------------------------------------

    fn lex_string(&mut self) -> Result<Lexeme, Fault> {
        // opening quote
        self.begin += 1;
        self.scratch.clear();
        self.mark = Some(self.begin);

        loop {
            if self.begin == self.end && !self.refill()? {
                return Err(Fault::Truncated);
            }
            let window = &self.buffer[self.begin..self.end];
            let Some(offset) = window.find_byteset(b"\"\\") else {
                self.begin = self.end;
                continue;
            };
            self.begin += offset;

            if self.buffer[self.begin] == b'"' {
                let span = self.capture();
                self.begin += 1;
                return Ok(Lexeme::text(TokenKind::String, span));
            }

            // Slow path: keep the raw run, then decode one escape.
            if let Some(mark) = self.mark.take() {
                self.scratch.extend_from_slice(&self.buffer[mark..self.begin]);
            }
            self.begin += 1;
            self.decode_escape()?;
            self.mark = Some(self.begin);
        }
    }

    /// Decodes the escape whose backslash was just consumed.
    fn decode_escape(&mut self) -> Result<(), Fault> {
        let mut escape = self.take()?;
        loop {
            let decoded = match escape {
                b'"' => b'"',
                b'\\' => b'\\',
                b'/' => b'/',
                b'b' => 0x08,
                b'f' => 0x0C,
                b'n' => b'\n',
                b'r' => b'\r',
                b't' => b'\t',
                b'u' => match self.decode_unicode()? {
                    Some(next) => {
                        escape = next;
                        continue;
                    }
                    None => return Ok(()),
                },
                _ => {
                    self.scratch.extend_from_slice(REPLACEMENT);
                    return Ok(());
                }
            };
            self.scratch.push(decoded);
            return Ok(());
        }
    }

    /// Decodes a `\u` escape whose `u` was just consumed, pairing surrogates.
    ///
    /// Returns `Some(byte)` when a high surrogate was followed by a backslash
    /// and a byte other than `u`; that byte (already consumed) starts the
    /// next escape.
    fn decode_unicode(&mut self) -> Result<Option<u8>, Fault> {
        let Some(mut unit) = self.read_hex_unit()? else {
            self.scratch.extend_from_slice(REPLACEMENT);
            return Ok(None);
        };
        loop {
            if !is_surrogate(unit) {
                self.push_code_point(unit);
                return Ok(None);
            }
            if is_low_surrogate(unit) {
                self.scratch.extend_from_slice(REPLACEMENT);
                return Ok(None);
            }

            // High surrogate: the low half must follow as another `\u`.
            if self.require()? != b'\\' {
                self.scratch.extend_from_slice(REPLACEMENT);
                return Ok(None);
            }
            self.begin += 1;
            let next = self.take()?;
            if next != b'u' {
                self.scratch.extend_from_slice(REPLACEMENT);
                return Ok(Some(next));
            }
            let Some(low) = self.read_hex_unit()? else {
                self.scratch.extend_from_slice(REPLACEMENT);
                return Ok(None);
            };
            if is_low_surrogate(low) {
                self.push_code_point(combine_surrogates(unit, low));
                return Ok(None);
            }
            // Not a low surrogate: the high one is lost and `low` is
            // decoded on its own, possibly pairing with what follows.
            self.scratch.extend_from_slice(REPLACEMENT);
            unit = low;
        }
    }

    /// Reads four hex digits. A non-hex byte is left unconsumed and yields
    /// `None`.
    fn read_hex_unit(&mut self) -> Result<Option<u32>, Fault> {
        self.escape.reset();
        loop {
            let byte = self.require()?;
            match self.escape.feed(byte) {
                HexStep::Pending => self.begin += 1,
                HexStep::Unit(unit) => {
                    self.begin += 1;
                    return Ok(Some(unit));
                }
                HexStep::NotHex => return Ok(None),
            }
        }
    }

    fn push_code_point(&mut self, code_point: u32) {
        let ch = char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
        let mut utf8 = [0u8; 4];
        self.scratch.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }
}

fn invalid_number(message: &'static str) -> Fault {
    Fault::Malformed(LexError::InvalidNumber(message))
}
