use ordered_float::OrderedFloat;

/// Represents the runtime value of a line.
///
/// Numbers are wrapped in `OrderedFloat`, so values are `Eq` and a NaN result
/// compares equal to itself when runs are compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The line held no expression. Distinct from `0`.
    Void,
    /// The result of a number or an expression.
    Number(OrderedFloat<f64>),
    /// The formatted message of a diagnostic.
    Message(String),
}

impl Value {
    /// Returns the number, if the value is one.
    ///
    /// # Example
    /// ```
    /// use linecalc::Value;
    ///
    /// assert_eq!(Value::from(2.5).as_number(), Some(2.5));
    /// assert_eq!(Value::Void.as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(OrderedFloat(n)) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(OrderedFloat(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Void => write!(f, "VOID"),
            Self::Number(n) => write!(f, "{}", n.0),
            Self::Message(message) => write!(f, "{message}"),
        }
    }
}
