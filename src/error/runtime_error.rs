use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("evaluation error at {position}: division by zero")]
    DivisionByZero {
        /// Offset of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed `i64`.
    #[error("evaluation error at {position}: integer overflow while computing result")]
    Overflow {
        /// Offset of the operator whose result overflowed.
        position: usize,
    },
    /// A literal value was too large to be represented as `i64`.
    #[error("evaluation error at {position}: literal {text} is too large")]
    LiteralTooLarge {
        /// Digits of the literal.
        text:     String,
        /// Offset of the literal.
        position: usize,
    },
    /// A leaf held text that is not a base-10 integer.
    #[error("evaluation error at {position}: {text:?} is not an integer literal")]
    InvalidLiteral {
        /// Text held by the leaf.
        text:     String,
        /// Offset of the literal.
        position: usize,
    },
}
