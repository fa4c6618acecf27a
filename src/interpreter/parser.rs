/// Core parsing entry points.
///
/// Composes the lexer with the two parser stages and defines the shared
/// `ParseResult` alias.
pub mod core;

/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm: operands go straight to the
/// output, operators wait on a stack until an operator of lower precedence or
/// a closing parenthesis releases them.
pub mod postfix;

/// Postfix to tree conversion.
///
/// Builds the abstract syntax tree from a postfix sequence using a stack of
/// operands.
pub mod tree;

pub use self::{
    core::{ParseResult, parse},
    postfix::to_postfix,
    tree::build_tree,
};
