use std::{fmt, iter::FusedIterator};

use logos::Logos;
use tracing::trace;

/// Raw lexemes recognized by the generated automaton.
///
/// This is the `logos` view of the input: it knows nothing about positions,
/// end of input or error recovery. [`Lexer`] wraps it and turns each lexeme
/// into a positioned [`Token`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// Decimal digit run, such as `42` or `007`.
    #[regex(r"[0-9]+")]
    Number,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl RawToken {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Number => TokenKind::Number,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Plus => TokenKind::Add,
            Self::Minus => TokenKind::Sub,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Div,
        }
    }
}

/// Classifies a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal.
    Number,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// End of input. Always the last token of a successful scan.
    End,
    /// Unrecognized input. The token text holds the diagnostic message and no
    /// token follows it.
    Error,
}

impl TokenKind {
    /// Binding strength used by the shunting-yard conversion.
    ///
    /// `*` and `/` bind tighter than `+` and `-`. Everything that is not a
    /// binary operator gets `-1`, so it never wins a comparison against an
    /// operator and a `(` on the operator stack is never popped by one.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Mul.precedence() > TokenKind::Add.precedence());
    /// assert_eq!(TokenKind::Sub.precedence(), TokenKind::Add.precedence());
    /// assert_eq!(TokenKind::LParen.precedence(), -1);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> i8 {
        match self {
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
            Self::Number | Self::LParen | Self::RParen | Self::End | Self::Error => -1,
        }
    }

    /// Returns `true` for `+`, `-`, `*` and `/`.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::End => "End",
            Self::Error => "Error",
        };
        f.write_str(name)
    }
}

/// A lexical token.
///
/// Tokens are produced in input order and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The matched source text, or the diagnostic message for
    /// [`TokenKind::Error`].
    pub text:     String,
    /// Byte offset at which the token was emitted: the end of the matched
    /// region, or the start of the offending character for an error.
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @{}", self.kind, self.text, self.position)
    }
}

/// Streaming tokenizer.
///
/// Pulls lexemes from the generated automaton one at a time. The stream ends
/// with exactly one [`TokenKind::End`] token, or stops right after exactly one
/// [`TokenKind::Error`] token. Once either has been yielded the iterator only
/// returns `None`.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("1 + 2").map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Add, TokenKind::Number, TokenKind::End]);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`. No work happens until the first call to
    /// `next`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: RawToken::lexer(source),
               finished: false }
    }

    fn unexpected_symbol(&self) -> Token {
        let position = self.inner.span().start;
        let symbol = self.source
                         .get(position..)
                         .and_then(|rest| rest.chars().next())
                         .unwrap_or(char::REPLACEMENT_CHARACTER);

        Token::new(TokenKind::Error,
                   format!("invalid symbol {symbol:?} at position {position}"),
                   position)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = match self.inner.next() {
            Some(Ok(raw)) => Token::new(raw.kind(), self.inner.slice(), self.inner.span().end),
            Some(Err(())) => {
                self.finished = true;
                self.unexpected_symbol()
            },
            None => {
                self.finished = true;
                Token::new(TokenKind::End, "", self.source.len())
            },
        };

        trace!(%token, "lexed");
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `source` eagerly.
///
/// The returned vector always ends with the terminating
/// [`TokenKind::End`] or [`TokenKind::Error`] token.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
