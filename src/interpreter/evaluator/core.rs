use std::num::IntErrorKind;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a tree and returns its integer value.
///
/// The walk is post-order: for an operator node the left subtree is
/// evaluated, then the right subtree, then the operator is applied to the two
/// results in that order. Every node is visited once.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `DivisionByZero` when a divisor evaluates to zero.
/// - `Overflow` when an intermediate result does not fit in `i64`.
/// - `LiteralTooLarge` or `InvalidLiteral` when a leaf is not a valid `i64`.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::eval,
/// };
///
/// let tree = Expr::binary(Expr::literal("8", 1), BinaryOperator::Sub, Expr::literal("3", 3), 2);
/// assert_eq!(eval(&tree).unwrap(), 5);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<i64> {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal { text, position } => eval_literal(text, *position),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => eval_binary_op(left, *op, right, *position),
    })
}

fn eval_binary_op(left: &Expr,
                  op: BinaryOperator,
                  right: &Expr,
                  position: usize)
                  -> EvalResult<i64> {
    let lhs = eval(left)?;
    let rhs = eval(right)?;
    let value = op.apply(lhs, rhs, position)?;

    trace!(%op, lhs, rhs, value, position, "applied operator");
    Ok(value)
}

/// Decodes a leaf's decimal digits.
///
/// # Errors
/// `LiteralTooLarge` if the digits exceed `i64::MAX`, `InvalidLiteral` if the
/// text is not a base-10 integer at all.
pub fn eval_literal(text: &str, position: usize) -> EvalResult<i64> {
    text.parse::<i64>().map_err(|e| match e.kind() {
                           IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                               RuntimeError::LiteralTooLarge { text: text.to_string(),
                                                               position }
                           },
                           _ => RuntimeError::InvalidLiteral { text: text.to_string(),
                                                               position },
                       })
}
