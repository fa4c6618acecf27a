use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds an abstract syntax tree from a postfix sequence.
///
/// Numbers become leaves on an operand stack. Each operator pops its right
/// operand, then its left operand, and pushes the combined node back. Exactly
/// one node has to remain at the end; it is the root.
///
/// # Parameters
/// - `postfix`: Numbers and operators in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::parser::to_postfix).
///
/// # Returns
/// The root of the tree.
///
/// # Errors
/// - `MissingOperand` if an operator finds fewer than two operands.
/// - `UnexpectedToken` if the sequence holds anything but numbers and
///   operators.
/// - `EmptyExpression` if no operand was produced at all.
/// - `TrailingOperand` if operands are left over without an operator.
///
/// # Example
/// ```
/// use intcalc::interpreter::{
///     lexer::{Token, TokenKind},
///     parser::build_tree,
/// };
///
/// let postfix = vec![Token::new(TokenKind::Number, "7", 1),
///                    Token::new(TokenKind::Number, "2", 3),
///                    Token::new(TokenKind::Sub, "-", 2)];
/// assert_eq!(build_tree(postfix).unwrap().to_string(), "(7 - 2)");
/// ```
pub fn build_tree<I>(postfix: I) -> ParseResult<Expr>
    where I: IntoIterator<Item = Token>
{
    let mut operands: Vec<Expr> = Vec::new();

    for token in postfix {
        if token.kind == TokenKind::Number {
            operands.push(Expr::literal(token.text, token.position));
            continue;
        }

        let op = token_to_binary_operator(&token)?;
        // the right operand was pushed last
        let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
            return Err(ParseError::MissingOperand { position: token.position });
        };

        trace!(%op, position = token.position, "reduce");
        operands.push(Expr::binary(left, op, right, token.position));
    }

    let mut remaining = operands.into_iter();
    match (remaining.next(), remaining.next()) {
        (Some(root), None) => Ok(root),
        (None, _) => Err(ParseError::EmptyExpression),
        (Some(_), Some(extra)) => {
            Err(ParseError::TrailingOperand { position: extra.position() })
        },
    }
}

/// Maps an operator token to its tree operator.
///
/// # Errors
/// Returns `UnexpectedToken` for anything that is not `+`, `-`, `*` or `/`.
/// A well-formed postfix sequence never contains such a token.
pub fn token_to_binary_operator(token: &Token) -> ParseResult<BinaryOperator> {
    match token.kind {
        TokenKind::Add => Ok(BinaryOperator::Add),
        TokenKind::Sub => Ok(BinaryOperator::Sub),
        TokenKind::Mul => Ok(BinaryOperator::Mul),
        TokenKind::Div => Ok(BinaryOperator::Div),
        TokenKind::Number
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::End
        | TokenKind::Error => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                                                 position: token.position, }),
    }
}
