use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        parser::{postfix::to_postfix, tree::build_tree},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// The lexer is pulled lazily by the postfix conversion, so a lexing error
/// stops the scan as soon as it is seen. The postfix sequence is then folded
/// into a tree.
///
/// Grammar:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := NUMBER | "(" expr ")"
/// ```
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// Returns a [`ParseError`] for invalid symbols, unbalanced parentheses,
/// operators lacking operands, and input without any operand.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::{BinaryOperator, Expr},
///     error::ParseError,
///     interpreter::parser::parse,
/// };
///
/// let tree = parse("8 - 3").unwrap();
/// assert!(matches!(tree, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
///
/// assert_eq!(parse("(())"), Err(ParseError::EmptyExpression));
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let postfix = to_postfix(Lexer::new(source))?;
    debug!(tokens = postfix.len(), "converted to postfix");

    let tree = build_tree(postfix)?;
    debug!(%tree, "built syntax tree");

    Ok(tree)
}
