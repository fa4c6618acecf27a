use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every positioned variant carries the byte offset of the token that
/// triggered it.
pub enum ParseError {
    /// The lexer met a character outside the grammar and stopped.
    #[error("lexing error at {position}: {message}")]
    Lex {
        /// Human-readable description produced by the lexer.
        message:  String,
        /// Offset of the offending character.
        position: usize,
    },
    /// A `)` had no matching `(`.
    #[error("parse error at {position}: missing '('")]
    MissingLeftParen {
        /// Offset of the unmatched `)`.
        position: usize,
    },
    /// A `(` was never closed.
    #[error("parse error at {position}: missing ')'")]
    MissingRightParen {
        /// Offset of the unmatched `(`.
        position: usize,
    },
    /// An operator had fewer than two operands available.
    #[error("parse error at {position}: missing operand")]
    MissingOperand {
        /// Offset of the operator.
        position: usize,
    },
    /// A token that is not a binary operator showed up where one was required.
    #[error("parse error at {position}: unexpected token {token}")]
    UnexpectedToken {
        /// Rendering of the token.
        token:    String,
        /// Offset of the token.
        position: usize,
    },
    /// The input contained no operand at all.
    #[error("parse error: expression without root")]
    EmptyExpression,
    /// More than one operand was left once every operator had been applied.
    #[error("parse error at {position}: operand without operator")]
    TrailingOperand {
        /// Offset of the first operand that could not be attached to the root.
        position: usize,
    },
}

impl ParseError {
    /// Returns the offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex { position, .. }
            | Self::MissingLeftParen { position }
            | Self::MissingRightParen { position }
            | Self::MissingOperand { position }
            | Self::UnexpectedToken { position, .. }
            | Self::TrailingOperand { position } => Some(*position),
            Self::EmptyExpression => None,
        }
    }
}
