use crate::error::Diagnostic;

/// Represents an arithmetic operator.
///
/// All four operators share the same (absent) precedence; the order in which
/// they apply is decided purely by the right-to-left scan of the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A node of the tree built for a successfully parsed line.
///
/// A `BinaryExpression` exclusively owns both of its operands, so a tree is
/// acyclic and never shared between lines. Nodes are not mutated after the
/// parser builds them.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The line holds no expression.
    Void,
    /// A numeric literal.
    Number {
        /// The literal exactly as written in the source.
        literal: String,
        /// The numeric value of the literal.
        value:   f64,
    },
    /// An operator applied to two operands.
    BinaryExpression {
        /// The operator.
        op:    Operator,
        /// Left operand; the accumulator folded from the right of the line.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates a number node from its literal text and value.
    #[must_use]
    pub fn number(literal: &str, value: f64) -> Self {
        Self::Number { literal: literal.to_string(),
                       value }
    }

    /// Creates a binary expression node owning both operands.
    ///
    /// ## Example
    /// ```
    /// use linecalc::{Node, Operator};
    ///
    /// let node = Node::binary(Operator::Sub, Node::number("4", 4.0), Node::number("2", 2.0));
    ///
    /// assert_eq!(node.to_string(), "- 4 2");
    /// ```
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::BinaryExpression { op,
                                 left: Box::new(left),
                                 right: Box::new(right) }
    }

    /// Name of the variant, used when a node shows up where it must not.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Void => "VOID",
            Self::Number { .. } => "NUMBER",
            Self::BinaryExpression { .. } => "BINARY_EXPRESSION",
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Void => write!(f, "VOID"),
            Self::Number { literal, .. } => write!(f, "{literal}"),
            Self::BinaryExpression { .. } => {
                let mut rights = Vec::new();
                let mut node = self;
                while let Self::BinaryExpression { op, left, right } = node {
                    write!(f, "{op} ")?;
                    rights.push(right);
                    node = left;
                }
                write!(f, "{node}")?;
                for right in rights.iter().rev() {
                    write!(f, " {right}")?;
                }
                Ok(())
            },
        }
    }
}

// The parser nests every operator into the left operand, so the left spine is
// as long as the line. Unlink it in a loop instead of recursing.
impl Drop for Node {
    fn drop(&mut self) {
        let Self::BinaryExpression { left, .. } = self else {
            return;
        };
        let mut next = std::mem::replace(left.as_mut(), Self::Void);
        while let Self::BinaryExpression { left, .. } = &mut next {
            let inner = std::mem::replace(left.as_mut(), Self::Void);
            next = inner;
        }
    }
}

/// The outcome of parsing one line.
///
/// Exactly one of a node (`VOID`, a number or a binary expression) or a
/// diagnostic. Both sides answer the same questions, their value and their
/// printable form, so later stages never need to branch on success.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// The line parsed into a tree.
    Node(Node),
    /// The line failed to compile.
    Diagnostic(Diagnostic),
}

impl ParseResult {
    /// Returns `true` if the line failed to compile.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Diagnostic(_))
    }
}

impl From<Node> for ParseResult {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Diagnostic> for ParseResult {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::Diagnostic(diagnostic)
    }
}

impl From<Result<Node, Diagnostic>> for ParseResult {
    fn from(result: Result<Node, Diagnostic>) -> Self {
        result.map_or_else(Self::Diagnostic, Self::Node)
    }
}

impl std::fmt::Display for ParseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
            Self::Diagnostic(diagnostic) => write!(f, "{diagnostic}"),
        }
    }
}
