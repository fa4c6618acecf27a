use std::{fmt, mem};

use crate::util::stack::ensure_sufficient_stack;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree node.
///
/// Every node owns its children exclusively; the tree has no sharing and no
/// cycles. A `BinaryOp` always has both operands, so a tree with a missing
/// operand cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, kept as its decimal digits.
    Literal {
        /// The digits as written in the source.
        text:     String,
        /// Offset of the literal's token.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand, evaluated first.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator's token.
        position: usize,
    },
}

impl Expr {
    /// Creates a leaf.
    #[must_use]
    pub fn literal(text: impl Into<String>, position: usize) -> Self {
        Self::Literal { text: text.into(),
                        position }
    }

    /// Creates an operator node owning `left` and `right`.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Offset of the token this node was built from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Collects the nodes in pre-order: a node, then its left subtree, then its
    /// right subtree.
    ///
    /// Uses an explicit stack, so arbitrarily deep trees are fine.
    ///
    /// # Example
    /// ```
    /// use intcalc::{ast::Expr, interpreter::parser::parse};
    ///
    /// let tree = parse("1 + 2 * 3").unwrap();
    /// let leaves: Vec<&str> = tree.pre_order()
    ///                             .into_iter()
    ///                             .filter_map(|node| match node {
    ///                                 Expr::Literal { text, .. } => Some(text.as_str()),
    ///                                 Expr::BinaryOp { .. } => None,
    ///                             })
    ///                             .collect();
    /// assert_eq!(leaves, ["1", "2", "3"]);
    /// ```
    #[must_use]
    pub fn pre_order(&self) -> Vec<&Self> {
        let mut nodes = Vec::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            nodes.push(node);
            if let Self::BinaryOp { left, right, .. } = node {
                // right first so left comes off the stack first
                pending.push(right);
                pending.push(left);
            }
        }

        nodes
    }
}

/// Tears the tree down with an explicit worklist.
///
/// The derived drop glue would recurse once per level, and a long chain such
/// as `1+1+...+1` is as deep as it has terms.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
            // `node` is now a leaf or holds two placeholder leaves
        }
    }
}

/// Moves both children of an operator node onto `pending`, leaving empty
/// literals behind. `String::new` does not allocate.
fn detach_children(node: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::BinaryOp { left, right, .. } = node {
        pending.push(mem::replace(&mut **left, Expr::literal(String::new(), 0)));
        pending.push(mem::replace(&mut **right, Expr::literal(String::new(), 0)));
    }
}

/// Renders the tree as fully parenthesized infix, e.g. `(1 + (2 * 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Literal { text, .. } => f.write_str(text),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        })
    }
}
