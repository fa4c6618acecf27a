//! # intcalc
//!
//! intcalc evaluates integer arithmetic expressions such as `2 * (3 + 4)`.
//! Source text goes through three stages: a lexer producing tokens, a
//! shunting-yard parser producing an abstract syntax tree, and a post-order
//! evaluator producing an `i64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::eval, parser::parse};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` enum that
/// represent an expression as a tree. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines leaf and operator nodes with exclusively owned children.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees for debugging.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, each carrying the source position it refers
/// to.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module ties together the lexer, the parser and the evaluator.
pub mod interpreter;
/// General utilities shared by the stages.
pub mod util;

pub use error::Error;

/// Evaluates an arithmetic expression.
///
/// Lexing, parsing and evaluation run in sequence; the first failure stops
/// the pipeline and is returned. Calls share no state, so the same input
/// always produces the same outcome.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed input and [`Error::Runtime`] for
/// division by zero or overflow.
///
/// # Examples
/// ```
/// use intcalc::evaluate;
///
/// assert_eq!(evaluate("3 * (1 - 2)").unwrap(), -3);
/// assert_eq!(evaluate("8 - 3 - 2").unwrap(), 3);
///
/// // Malformed input and arithmetic faults are errors, never panics.
/// assert!(evaluate("(1 + 2").is_err());
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let tree = parse(source)?;
    let value = eval(&tree)?;

    debug!(value, "evaluated expression");
    Ok(value)
}
