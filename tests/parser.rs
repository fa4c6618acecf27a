use intcalc::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind, tokenize},
        parser::{build_tree, parse, to_postfix},
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn postfix_texts(src: &str) -> Vec<String> {
    to_postfix(Lexer::new(src)).unwrap().into_iter().map(|t| t.text).collect()
}

#[rstest]
#[case("1+2*3", "1 2 3 * +")]
#[case("1*2+3", "1 2 * 3 +")]
#[case("8-3-2", "8 3 - 2 -")]
#[case("8/2*4", "8 2 / 4 *")]
#[case("(1+2)*3", "1 2 + 3 *")]
#[case("2*(3+4)", "2 3 4 + *")]
#[case("((7))", "7")]
fn shunting_yard_order(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(postfix_texts(src).join(" "), expected);
}

#[test]
fn postfix_works_on_a_materialized_token_list() {
    let postfix = to_postfix(tokenize("4/2")).unwrap();
    let kinds: Vec<TokenKind> = postfix.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::Div]);
}

#[test]
fn lex_error_aborts_postfix_conversion() {
    assert_eq!(to_postfix(Lexer::new("1+W+3")),
               Err(ParseError::Lex { message:  "invalid symbol 'W' at position 2".to_string(),
                                     position: 2, }));
}

#[test]
fn unmatched_parentheses() {
    assert_eq!(parse("(1+2"), Err(ParseError::MissingRightParen { position: 1 }));
    assert_eq!(parse("1+2)"), Err(ParseError::MissingLeftParen { position: 4 }));
    assert_eq!(parse(")("), Err(ParseError::MissingLeftParen { position: 1 }));
    assert_eq!(parse("((1)"), Err(ParseError::MissingRightParen { position: 1 }));
}

#[rstest]
#[case("+")]
#[case("1+")]
#[case("*2")]
#[case("1+*2")]
#[case("(1-)")]
#[case("+1 2")]
#[case("1+()")]
#[case("2*(+3)")]
fn operators_without_operands(#[case] src: &str) {
    assert!(matches!(parse(src), Err(ParseError::MissingOperand { .. })),
            "{src:?} parsed as {:?}",
            parse(src));
}

#[rstest]
#[case("")]
#[case(" \n ")]
#[case("()")]
#[case("(())")]
fn expressions_without_root(#[case] src: &str) {
    assert_eq!(parse(src), Err(ParseError::EmptyExpression));
}

#[rstest]
#[case("1 23", 4)]
#[case("1 2 +", 3)]
#[case("(1)(2)", 4)]
#[case("(1)()", 4)]
#[case("2(3)", 2)]
#[case("(4)5", 4)]
fn operands_without_operator(#[case] src: &str, #[case] position: usize) {
    assert_eq!(parse(src), Err(ParseError::TrailingOperand { position }));
}

#[test]
fn operator_before_any_operand_is_reported_at_once() {
    assert_eq!(parse("+1 2"), Err(ParseError::MissingOperand { position: 1 }));
    assert_eq!(to_postfix(Lexer::new("* 3 W")),
               Err(ParseError::MissingOperand { position: 1 }));
}

#[test]
fn misplaced_close_is_unbalanced() {
    assert_eq!(parse(")"), Err(ParseError::MissingLeftParen { position: 1 }));
}

#[test]
fn single_number_is_a_leaf() {
    assert_eq!(parse("42"), Ok(Expr::literal("42", 2)));
}

#[test]
fn operand_order_is_preserved() {
    assert_eq!(parse("7-2"),
               Ok(Expr::binary(Expr::literal("7", 1), BinaryOperator::Sub, Expr::literal("2", 3), 2)));
}

#[test]
fn tree_rendering_reflects_precedence() {
    assert_eq!(parse("1+2*3").unwrap().to_string(), "(1 + (2 * 3))");
    assert_eq!(parse("8-3-2").unwrap().to_string(), "((8 - 3) - 2)");
    assert_eq!(parse("(1+2)*3").unwrap().to_string(), "((1 + 2) * 3)");
}

#[test]
fn pre_order_visits_root_first() {
    let tree = parse("1*2+3").unwrap();
    let rendered: Vec<String> = tree.pre_order()
                                    .into_iter()
                                    .map(|node| match node {
                                        Expr::Literal { text, .. } => text.clone(),
                                        Expr::BinaryOp { op, .. } => op.to_string(),
                                    })
                                    .collect();
    assert_eq!(rendered, vec!["+", "*", "1", "2", "3"]);
}

#[test]
fn non_operator_in_postfix_is_reported() {
    let postfix = vec![Token::new(TokenKind::Number, "1", 1),
                       Token::new(TokenKind::Number, "2", 3),
                       Token::new(TokenKind::LParen, "(", 4)];
    assert!(matches!(build_tree(postfix),
                     Err(ParseError::UnexpectedToken { position: 4, .. })));
}

#[test]
fn error_token_in_postfix_is_reported() {
    let postfix = vec![Token::new(TokenKind::Error, "boom", 0)];
    assert!(matches!(build_tree(postfix), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn deep_nesting_parses_iteratively() {
    let depth = 50_000;
    let src = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&src), Ok(Expr::literal("7", depth + 1)));
}
