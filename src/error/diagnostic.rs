/// Expected a numeral.
pub const EXPECTED_NUMBER: &str = "a number literal";
/// Expected one of `+`, `-`, `*` or `/`.
pub const EXPECTED_OPERATION: &str = "an operation token";
/// Expected the accumulator to be a number or an expression.
pub const EXPECTED_NUMBER_OR_OPERATION: &str = "a number or an operation";
/// Expected exactly one fragment left after the scan.
pub const EXPECTED_SINGLE: &str = "a single token";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// The reasons a line can fail to compile.
pub enum DiagnosticKind {
    /// The line ran out of tokens while an operator still needed its numeral.
    IncompleteExpression,
    /// A token was neither the numeral nor the operator required next.
    InvalidToken,
    /// The accumulator on top of the stack was not a number or an expression.
    InvalidStack,
    /// More than one fragment was left once every token was consumed.
    MultipleExpressions,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::IncompleteExpression => "Incomplete expression",
            Self::InvalidToken => "Invalid token",
            Self::InvalidStack => "Invalid stack",
            Self::MultipleExpressions => "Multiple expressions",
        };
        write!(f, "{description}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A compilation failure scoped to a single line.
///
/// Its value and its printable form are both the formatted message.
pub struct Diagnostic {
    /// What went wrong.
    pub kind:     DiagnosticKind,
    /// Description of what the parser expected at this point.
    pub expected: &'static str,
    /// The offending token, empty when the line ran out of tokens.
    pub token:    String,
    /// The 1-based source line where the error occurred.
    pub line:     usize,
}

impl Diagnostic {
    /// Creates a diagnostic.
    ///
    /// ## Example
    /// ```
    /// use linecalc::{Diagnostic, DiagnosticKind};
    ///
    /// let diagnostic = Diagnostic::new(DiagnosticKind::InvalidToken, "a number literal", "x", 3);
    ///
    /// assert_eq!(diagnostic.to_string(),
    ///            "[COMPILATION ERROR]: Invalid token => expected a number literal, got 'x' on line 3");
    /// ```
    #[must_use]
    pub fn new(kind: DiagnosticKind,
               expected: &'static str,
               token: impl Into<String>,
               line: usize)
               -> Self {
        Self { kind,
               expected,
               token: token.into(),
               line }
    }

    /// A token that had to be a numeral was something else.
    #[must_use]
    pub fn expected_number(token: &str, line: usize) -> Self {
        Self::new(DiagnosticKind::InvalidToken, EXPECTED_NUMBER, token, line)
    }

    /// A token that had to be an operator was something else.
    #[must_use]
    pub fn expected_operation(token: &str, line: usize) -> Self {
        Self::new(DiagnosticKind::InvalidToken, EXPECTED_OPERATION, token, line)
    }

    /// An operator was the leftmost token of the line.
    #[must_use]
    pub fn incomplete(line: usize) -> Self {
        Self::new(DiagnosticKind::IncompleteExpression, EXPECTED_NUMBER, "", line)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "[COMPILATION ERROR]: {} => expected {}, got '{}' on line {}",
               self.kind, self.expected, self.token, self.line)
    }
}
