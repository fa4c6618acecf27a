/// Core evaluation logic.
///
/// Contains the post-order tree walk, literal decoding and the result alias
/// shared by the evaluator.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators with overflow and division by
/// zero checks.
pub mod binary;

pub use self::core::{EvalResult, eval};
