use intcalc::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{evaluator::eval, parser::parse},
};
use rstest::rstest;

fn leaf(text: &str) -> Expr {
    Expr::literal(text, 0)
}

#[test]
fn leaf_evaluates_to_its_value() {
    assert_eq!(eval(&leaf("1")), Ok(1));
    assert_eq!(eval(&leaf("000")), Ok(0));
}

#[test]
fn children_are_evaluated_left_then_right() {
    let tree = Expr::binary(leaf("10"), BinaryOperator::Div, leaf("3"), 1);
    assert_eq!(eval(&tree), Ok(3));

    let swapped = Expr::binary(leaf("3"), BinaryOperator::Div, leaf("10"), 1);
    assert_eq!(eval(&swapped), Ok(0));
}

#[rstest]
#[case(BinaryOperator::Add, 7, 2, 9)]
#[case(BinaryOperator::Sub, 7, 2, 5)]
#[case(BinaryOperator::Mul, 7, 2, 14)]
#[case(BinaryOperator::Div, 7, 2, 3)]
#[case(BinaryOperator::Div, -7, 2, -3)]
#[case(BinaryOperator::Div, 7, -2, -3)]
fn operators_apply(#[case] op: BinaryOperator,
                   #[case] left: i64,
                   #[case] right: i64,
                   #[case] expected: i64) {
    assert_eq!(op.apply(left, right, 0), Ok(expected));
}

#[test]
fn division_by_zero_is_reported_at_operator() {
    let tree = parse("6 / (2 - 2)").unwrap();
    assert_eq!(eval(&tree), Err(RuntimeError::DivisionByZero { position: 3 }));
}

#[rstest]
#[case(BinaryOperator::Add, i64::MAX, 1)]
#[case(BinaryOperator::Sub, i64::MIN, 1)]
#[case(BinaryOperator::Mul, i64::MAX, 2)]
#[case(BinaryOperator::Div, i64::MIN, -1)]
fn overflow_is_reported(#[case] op: BinaryOperator, #[case] left: i64, #[case] right: i64) {
    assert_eq!(op.apply(left, right, 5), Err(RuntimeError::Overflow { position: 5 }));
}

#[test]
fn min_divided_by_minus_one_through_the_pipeline() {
    let tree = parse("(0 - 9223372036854775807 - 1) / (0 - 1)").unwrap();
    assert!(matches!(eval(&tree), Err(RuntimeError::Overflow { .. })));
}

#[test]
fn malformed_leaf_is_an_error() {
    assert_eq!(eval(&Expr::literal("12a", 4)),
               Err(RuntimeError::InvalidLiteral { text:     "12a".to_string(),
                                                  position: 4, }));
    assert_eq!(eval(&Expr::literal("", 0)),
               Err(RuntimeError::InvalidLiteral { text:     String::new(),
                                                  position: 0, }));
}

#[test]
fn oversized_leaf_is_an_error() {
    assert!(matches!(eval(&leaf("9223372036854775808")),
                     Err(RuntimeError::LiteralTooLarge { .. })));
}

#[test]
fn error_in_left_subtree_short_circuits() {
    let tree = Expr::binary(Expr::binary(leaf("1"), BinaryOperator::Div, leaf("0"), 1),
                            BinaryOperator::Add,
                            leaf("oops"),
                            2);
    assert_eq!(eval(&tree), Err(RuntimeError::DivisionByZero { position: 1 }));
}

#[test]
fn deep_left_leaning_tree() {
    let src = vec!["1"; 2_000].join("+");
    let tree = parse(&src).unwrap();
    assert_eq!(eval(&tree), Ok(2_000));
}

#[test]
fn million_term_sum_evaluates_and_drops() {
    let terms = 1_000_000;
    let src = vec!["1"; terms].join("+");
    let tree = parse(&src).unwrap();
    assert_eq!(eval(&tree), Ok(i64::try_from(terms).unwrap()));
    drop(tree);
}

#[test]
fn deep_right_leaning_tree_drops() {
    let depth = 200_000;
    let src = format!("{}1{}", "1-(".repeat(depth), ")".repeat(depth));
    let tree = parse(&src).unwrap();
    assert_eq!(eval(&tree), Ok(if depth % 2 == 0 { 1 } else { 0 }));
}
