/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// abstract syntax tree. A lexing failure is reported through this type as
/// well, since the parser is the stage that observes the lexer's error token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree:
/// division by zero, overflow and literals that do not fit an `i64`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the full lex, parse and evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
