use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers every construct the grammar can produce: numeric literals,
/// negated literals, binary operations, and single-argument function calls.
/// Parenthesized groups are not retained as nodes; grouping only affects the
/// shape of the tree.
///
/// The tree is exclusively owned. Every child lives inside exactly one
/// parent, and the root is handed to the caller on success. Later stages
/// (simplification, differentiation, integration, solving) traverse the tree
/// read-only or build new trees from it.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A numeric literal, such as `4` or `2.5`.
    Number(f64),
    /// Negation of a numeric literal, such as `-4`.
    ///
    /// The operand is always an [`Expr::Number`]. The grammar does not allow
    /// negating a compound expression.
    UnaryNegate {
        /// The negated literal.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call of a recognized function, such as `sin(2)`.
    ///
    /// Absolute-value bars desugar to this variant: `|2 - 5|` produces the
    /// same node as `abs(2 - 5)`.
    FunctionCall {
        /// Name of the function being called.
        name:     String,
        /// The single argument expression.
        argument: Box<Self>,
    },
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Equality is structural. Numeric leaves compare through [`OrderedFloat`],
/// so `Expr` can implement [`Eq`] and [`Hash`] and later stages can compare
/// or deduplicate subtrees.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::UnaryNegate { operand: a }, Self::UnaryNegate { operand: b }) => a == b,
            (Self::BinaryOp { left: a_left,
                              op: a_op,
                              right: a_right, },
             Self::BinaryOp { left: b_left,
                              op: b_op,
                              right: b_right, }) => {
                a_op == b_op && a_left == b_left && a_right == b_right
            },
            (Self::FunctionCall { name: a_name,
                                  argument: a_argument, },
             Self::FunctionCall { name: b_name,
                                  argument: b_argument, }) => {
                a_name == b_name && a_argument == b_argument
            },
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Number(value) => OrderedFloat(*value).hash(state),
            Self::UnaryNegate { operand } => operand.hash(state),
            Self::BinaryOp { left, op, right } => {
                left.hash(state);
                op.hash(state);
                right.hash(state);
            },
            Self::FunctionCall { name, argument } => {
                name.hash(state);
                argument.hash(state);
            },
        }
    }
}

/// Renders the tree as a fully parenthesized expression string.
///
/// The output re-parses to a structurally equal tree, which makes it usable
/// both for display and as a stable textual form of the AST.
///
/// ## Example
/// ```
/// use eqnp::parse_expression;
///
/// let expr = parse_expression("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::UnaryNegate { operand } => write!(f, "-{operand}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, argument } => write!(f, "{name}({argument})"),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover the arithmetic the grammar understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
