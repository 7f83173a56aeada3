//! Document builder.
//!
//! The [`Parser`] pulls tokens from a [`Tokenizer`] and assembles one
//! [`Element`] tree. It is an explicit state machine over a
//! [`ContainerStack`]: nesting depth costs heap frames, never call stack.

use std::io;

use log::{debug, trace};

use crate::{
    Element, ElementKind, ParseError, ParserOptions, Tokenizer,
    error::{Expected, SyntaxError},
    stack::{ContainerStack, Frame},
    token::TokenKind,
};

/// What the parser accepts next while a container is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Right after `{`.
    ObjectKeyOrClose,
    /// After a comma in an object.
    ObjectKey,
    /// After a member name.
    Colon,
    /// After a colon, or after a comma in an array.
    Value,
    /// Right after `[`.
    ValueOrClose,
    /// After a member value.
    AfterMember,
    /// After an array element.
    AfterElement,
}

impl State {
    fn expected(self) -> Expected {
        match self {
            State::ObjectKeyOrClose => Expected::ObjectKeyOrClose,
            State::ObjectKey => Expected::ObjectKey,
            State::Colon => Expected::Colon,
            State::Value => Expected::Value,
            State::ValueOrClose => Expected::ValueOrArrayClose,
            State::AfterMember => Expected::CommaOrObjectClose,
            State::AfterElement => Expected::CommaOrArrayClose,
        }
    }
}

/// Outcome of attaching a finished element.
enum Step {
    Continue(State),
    Root(Element),
}

/// An owned copy of a token, detached from the tokenizer's buffers.
struct Lexed {
    kind: TokenKind,
    scalar: Option<Element>,
}

/// Builds a document tree from a token stream.
///
/// A parser borrows its tokenizer for as long as it lives. Each call to
/// [`parse`](Self::parse) consumes exactly one document plus the end of
/// input that must follow it.
///
/// # Examples
///
/// ```rust
/// use jsontree::{Parser, ParserOptions, Tokenizer};
///
/// let mut tokenizer = Tokenizer::from_text("\"just a string\"");
/// assert!(Parser::new(&mut tokenizer).parse().is_err());
///
/// let mut tokenizer = Tokenizer::from_text("\"just a string\"");
/// let options = ParserOptions {
///     allow_scalar_root: true,
///     ..Default::default()
/// };
/// let root = Parser::with_options(&mut tokenizer, options).parse().unwrap();
/// assert_eq!(root.value(), "just a string");
/// ```
pub struct Parser<'t, R> {
    tokenizer: &'t mut Tokenizer<R>,
    options: ParserOptions,
    stack: ContainerStack,
}

impl<'t, R: io::Read> Parser<'t, R> {
    /// Creates a parser with default options.
    pub fn new(tokenizer: &'t mut Tokenizer<R>) -> Self {
        Self::with_options(tokenizer, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    pub fn with_options(tokenizer: &'t mut Tokenizer<R>, options: ParserOptions) -> Self {
        Self {
            tokenizer,
            options,
            stack: ContainerStack::with_capacity(options.stack_capacity),
        }
    }

    /// Parses one document.
    ///
    /// Empty or whitespace-only input yields a `null` root.
    ///
    /// # Errors
    ///
    /// Returns the first read, lex or syntax error. No partial tree is
    /// returned; the tokenizer is left wherever the error was detected.
    pub fn parse(&mut self) -> Result<Element, ParseError> {
        self.stack.clear();
        let result = self.build();
        if let Err(err) = &result {
            debug!("parse aborted at depth {}: {err}", self.stack.len());
            self.stack.clear();
        }
        result
    }

    fn build(&mut self) -> Result<Element, ParseError> {
        let first = self.next()?;
        let mut state = match (first.kind, first.scalar) {
            (TokenKind::ObjectOpen, _) => self.open(Frame::object(None), State::ObjectKeyOrClose),
            (TokenKind::ArrayOpen, _) => self.open(Frame::array(None), State::ValueOrClose),
            (TokenKind::Done, _) => return Ok(Element::null()),
            (_, Some(root)) if self.options.allow_scalar_root => {
                self.expect_done()?;
                return Ok(root);
            }
            (found, _) => {
                let expected = if self.options.allow_scalar_root {
                    Expected::AnyRootValue
                } else {
                    Expected::RootValue
                };
                return Err(self.unexpected(expected, found));
            }
        };

        let mut pending_key: Option<String> = None;
        loop {
            let token = self.next()?;
            let step = match (state, token.kind, token.scalar) {
                (State::ObjectKeyOrClose | State::ObjectKey, TokenKind::String, Some(key)) => {
                    pending_key = key.into_string();
                    Step::Continue(State::Colon)
                }
                (State::Colon, TokenKind::Colon, _) => Step::Continue(State::Value),
                (State::AfterMember, TokenKind::Comma, _) => Step::Continue(State::ObjectKey),
                (State::AfterElement, TokenKind::Comma, _) => Step::Continue(State::Value),
                (State::Value | State::ValueOrClose, TokenKind::ObjectOpen, _) => {
                    let frame = Frame::object(pending_key.take());
                    Step::Continue(self.open(frame, State::ObjectKeyOrClose))
                }
                (State::Value | State::ValueOrClose, TokenKind::ArrayOpen, _) => {
                    let frame = Frame::array(pending_key.take());
                    Step::Continue(self.open(frame, State::ValueOrClose))
                }
                (State::Value | State::ValueOrClose, _, Some(element)) => {
                    self.attach(pending_key.take(), element)
                }
                (
                    State::ObjectKeyOrClose | State::AfterMember,
                    TokenKind::ObjectClose,
                    _,
                )
                | (State::ValueOrClose | State::AfterElement, TokenKind::ArrayClose, _) => {
                    self.close()
                }
                (state, found, _) => return Err(self.unexpected(state.expected(), found)),
            };
            state = match step {
                Step::Continue(next) => next,
                Step::Root(root) => {
                    self.expect_done()?;
                    return Ok(root);
                }
            };
        }
    }

    /// Reads one token and detaches it from the tokenizer.
    fn next(&mut self) -> Result<Lexed, ParseError> {
        let token = self.tokenizer.next_token();
        if let Some(error) = token.error {
            return Err(error);
        }
        let scalar = match token.kind {
            TokenKind::String => Some(Element::string_value(token.text.into_owned())),
            TokenKind::Number => Some(Element::number(token.text.into_owned())),
            TokenKind::Bool => Some(Element::boolean_value(token.value)),
            TokenKind::Null => Some(Element::null()),
            _ => None,
        };
        Ok(Lexed {
            kind: token.kind,
            scalar,
        })
    }

    fn expect_done(&mut self) -> Result<(), ParseError> {
        let token = self.next()?;
        if token.kind == TokenKind::Done {
            Ok(())
        } else {
            Err(self.unexpected(Expected::EndOfInput, token.kind))
        }
    }

    fn open(&mut self, frame: Frame, state: State) -> State {
        trace!("open {} at depth {}", frame.kind(), self.stack.len() + 1);
        self.stack.push(frame);
        state
    }

    fn close(&mut self) -> Step {
        // Close tokens are only accepted in states that have an open frame.
        let Some(frame) = self.stack.pop() else {
            return Step::Root(Element::null());
        };
        trace!(
            "close {} of {} children under {:?} at depth {}",
            frame.kind(),
            frame.len(),
            frame.key(),
            self.stack.len() + 1
        );
        let (key, element) = frame.into_element();
        self.attach(key, element)
    }

    fn attach(&mut self, key: Option<String>, element: Element) -> Step {
        if let Some(root) = self.stack.attach(key, element) {
            return Step::Root(root);
        }
        match self.stack.peek().map(Frame::kind) {
            Some(ElementKind::Object) => Step::Continue(State::AfterMember),
            _ => Step::Continue(State::AfterElement),
        }
    }

    fn unexpected(&self, expected: Expected, found: TokenKind) -> ParseError {
        ParseError::new(SyntaxError { expected, found }, self.tokenizer.line())
    }
}
