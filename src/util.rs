/// Stack growth for recursive tree walks.
///
/// Parsing is iterative, but evaluation and rendering recurse once per tree
/// level. Deeply parenthesized input produces equally deep trees, so those
/// walks go through [`stack::ensure_sufficient_stack`] to avoid overflowing
/// the thread stack.
pub mod stack;
