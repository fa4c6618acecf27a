/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree in post-order, decoding literals at the
/// leaves and applying the arithmetic operator at every inner node.
///
/// # Responsibilities
/// - Evaluates operands left before right.
/// - Reports division by zero and overflow instead of panicking.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// corresponding to a number, an operator or a parenthesis, followed by a
/// single end-of-input token. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, text and source position.
/// - Skips whitespace.
/// - Stops at the first unrecognized character with a single error token.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// Parsing happens in two iterative stages: a shunting-yard pass that
/// reorders the token stream into postfix, and a stack fold that turns the
/// postfix sequence into a tree.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Detects unbalanced parentheses, missing operands and empty input.
/// - Surfaces lexing errors with their position.
pub mod parser;
