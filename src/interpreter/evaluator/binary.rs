use crate::ast::Operator;

impl Operator {
    /// Applies the operator to two evaluated operands.
    ///
    /// Arithmetic follows native `f64` semantics, so dividing by zero yields an
    /// infinity or NaN rather than an error.
    ///
    /// # Example
    /// ```
    /// use linecalc::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(2.0, 10.0), -8.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub const fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}
