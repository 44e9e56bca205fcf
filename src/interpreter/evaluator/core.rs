use crate::{
    ast::{Node, ParseResult},
    interpreter::value::Value,
};

impl Node {
    /// Evaluates the tree to a number.
    ///
    /// Nothing is cached: every call walks the whole tree again. The left
    /// spine, which grows with every operator on a line, is walked in a loop;
    /// only right operands are evaluated recursively.
    ///
    /// # Returns
    /// `None` for `VOID`. A `VOID` operand is a broken tree: it fails a debug
    /// assertion and evaluates to `None` in release builds.
    ///
    /// # Example
    /// ```
    /// use linecalc::{Node, Operator};
    ///
    /// let node = Node::binary(Operator::Div, Node::number("4", 4.0), Node::number("2", 2.0));
    ///
    /// assert_eq!(node.eval(), Some(2.0));
    /// assert_eq!(Node::Void.eval(), None);
    /// ```
    #[must_use]
    pub fn eval(&self) -> Option<f64> {
        let mut spine = Vec::new();
        let mut node = self;
        while let Self::BinaryExpression { op, left, right } = node {
            spine.push((*op, right));
            node = left;
        }

        let Self::Number { value, .. } = node else {
            debug_assert!(spine.is_empty(), "`{}` applied to a VOID operand", spine[0].0);
            return None;
        };

        let mut acc = *value;
        for (op, right) in spine.iter().rev() {
            let operand = right.eval();
            debug_assert!(operand.is_some(), "`{op}` applied to a VOID operand");
            acc = op.apply(acc, operand?);
        }
        Some(acc)
    }
}

impl ParseResult {
    /// Produces the runtime value of a line.
    ///
    /// A diagnostic evaluates to its formatted message, so this never fails.
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::Node(node) => node.eval().map_or(Value::Void, Value::from),
            Self::Diagnostic(diagnostic) => Value::Message(diagnostic.to_string()),
        }
    }
}

/// Evaluates every compiled line, keeping line order.
///
/// # Example
/// ```
/// use linecalc::{Value, compile, execute};
///
/// let values = execute(&compile("2 / 2\n\n1 + 1"));
///
/// assert_eq!(values, [Value::from(1.0), Value::Void, Value::from(2.0)]);
/// ```
#[must_use]
pub fn execute(results: &[ParseResult]) -> Vec<Value> {
    results.iter().map(ParseResult::value).collect()
}
