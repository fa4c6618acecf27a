use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Converts an infix token stream into postfix order.
///
/// Tokens are consumed one at a time, so the stream may be a live
/// [`Lexer`](crate::interpreter::lexer::Lexer). Equal precedence pops, which
/// makes every operator left-associative: `8 - 3 - 2` becomes `8 3 - 2 -`.
///
/// Operands and operators have to alternate, so input outside the infix
/// grammar (`1 2 +`, `+1 2`, `(1)()`) is rejected here. The returned sequence
/// holds only numbers and operators.
///
/// # Parameters
/// - `tokens`: Tokens in input order, normally terminated by an end token.
///
/// # Returns
/// The tokens rearranged into postfix order.
///
/// # Errors
/// - `Lex` if the stream contains an error token.
/// - `MissingLeftParen` for a `)` with no open group.
/// - `MissingRightParen` for a `(` still open at the end.
/// - `MissingOperand` for an operator or `)` where an operand belongs.
/// - `TrailingOperand` for a number or `(` directly after an operand.
/// - `EmptyExpression` for groups that never contain an operand.
///
/// # Example
/// ```
/// use intcalc::interpreter::{lexer::Lexer, parser::to_postfix};
///
/// let postfix = to_postfix(Lexer::new("1 + 2 * 3")).unwrap();
/// let texts: Vec<&str> = postfix.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["1", "2", "3", "*", "+"]);
/// ```
pub fn to_postfix<I>(tokens: I) -> ParseResult<Vec<Token>>
    where I: IntoIterator<Item = Token>
{
    let mut operators: Vec<Token> = Vec::new();
    let mut output = Vec::new();
    // true at the start, after `(` and after an operator
    let mut expect_operand = true;

    for token in tokens {
        match token.kind {
            TokenKind::End => break,
            TokenKind::Error => {
                return Err(ParseError::Lex { message:  token.text,
                                             position: token.position, });
            },
            TokenKind::Number | TokenKind::LParen if !expect_operand => {
                return Err(ParseError::TrailingOperand { position: token.position });
            },
            TokenKind::Number => {
                output.push(token);
                expect_operand = false;
            },
            TokenKind::LParen => operators.push(token),
            TokenKind::RParen => {
                if expect_operand {
                    return Err(missing_operand_before_close(&operators, &output, token.position));
                }
                close_group(&mut operators, &mut output, token.position)?;
            },
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div => {
                if expect_operand {
                    return Err(ParseError::MissingOperand { position: token.position });
                }
                let precedence = token.kind.precedence();
                while operators.last()
                               .is_some_and(|top| top.kind.precedence() >= precedence)
                {
                    output.extend(operators.pop());
                }
                trace!(operator = %token.text, position = token.position, "push operator");
                operators.push(token);
                expect_operand = true;
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::LParen {
            return Err(ParseError::MissingRightParen { position: top.position });
        }
        output.push(top);
    }

    Ok(output)
}

/// Classifies a `)` that arrives where an operand was expected.
///
/// With nothing but open groups seen so far (`()`, `(())`) the expression has
/// no root. A `)` with no open group at all is unbalanced. Anything else, such
/// as `(1-)` or `1+()`, lacks an operand.
fn missing_operand_before_close(operators: &[Token],
                                output: &[Token],
                                position: usize)
                                -> ParseError {
    if operators.is_empty() {
        ParseError::MissingLeftParen { position }
    } else if output.is_empty() && operators.iter().all(|t| t.kind == TokenKind::LParen) {
        ParseError::EmptyExpression
    } else {
        ParseError::MissingOperand { position }
    }
}

/// Moves operators to the output until the innermost `(` is found, then
/// drops it.
fn close_group(operators: &mut Vec<Token>,
               output: &mut Vec<Token>,
               position: usize)
               -> ParseResult<()> {
    while let Some(top) = operators.pop() {
        if top.kind == TokenKind::LParen {
            return Ok(());
        }
        output.push(top);
    }

    Err(ParseError::MissingLeftParen { position })
}
