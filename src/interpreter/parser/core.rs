use log::warn;

use crate::{
    ast::{Node, ParseResult},
    error::{
        Diagnostic, DiagnosticKind,
        diagnostic::{EXPECTED_NUMBER_OR_OPERATION, EXPECTED_SINGLE},
    },
    interpreter::{
        lexer::Token,
        parser::utils::{dump_stack, expect_number, expect_operator, is_blank},
    },
};

/// Parses one line into exactly one `ParseResult`.
///
/// This is the entry point of the parser. Tokens are consumed from the
/// rightmost one toward the start of the line:
///
/// ```text
///     line  := (numeral operator)* numeral
///     value := ((numeral_n op_n-1 numeral_n-1) op_n-2 ...) op_1 numeral_1
/// ```
///
/// The first token taken must be a numeral; it becomes the accumulator. Every
/// further step takes an operator and the numeral to its left, and replaces
/// the accumulator with `accumulator operator numeral`. There is no operator
/// precedence.
///
/// # Parameters
/// - `tokens`: The tokens of the line, in source order.
/// - `line`: The 1-based line number, reported by diagnostics.
///
/// # Returns
/// `VOID` for a blank line, the folded tree, or the first diagnostic found.
///
/// # Example
/// ```
/// use linecalc::{
///     Diagnostic,
///     ParseResult,
///     interpreter::{lexer::tokenize, parser::core::parse_line},
/// };
///
/// let result = parse_line(tokenize("10 - 2 / 4"), 1);
/// assert_eq!(result.to_string(), "- / 4 2 10");
///
/// let result = parse_line(tokenize("+ 1"), 7);
/// assert_eq!(result, ParseResult::Diagnostic(Diagnostic::incomplete(7)));
/// ```
#[must_use]
pub fn parse_line(tokens: Vec<Token<'_>>, line: usize) -> ParseResult {
    if is_blank(&tokens) {
        return ParseResult::Node(Node::Void);
    }

    reduce(tokens, line).into()
}

/// Folds the tokens with an explicit stack of fragments.
///
/// # Errors
/// - `InvalidToken` if a numeral or operator was required but not found.
/// - `IncompleteExpression` if an operator has no numeral to its left.
/// - `InvalidStack` if the accumulator is `VOID`.
/// - `MultipleExpressions` if more than one fragment is left at the end.
fn reduce(mut tokens: Vec<Token<'_>>, line: usize) -> Result<Node, Diagnostic> {
    let mut stack: Vec<ParseResult> = Vec::new();

    while let Some(token) = tokens.pop() {
        let fragment = match stack.pop() {
            None => expect_number(&token, line)?,
            Some(ParseResult::Diagnostic(diagnostic)) => return Err(diagnostic),
            Some(ParseResult::Node(acc @ Node::Void)) => return Err(invalid_stack(&acc, line)),
            Some(ParseResult::Node(acc)) => {
                let op = expect_operator(&token, line)?;
                let operand = tokens.pop().ok_or_else(|| Diagnostic::incomplete(line))?;
                let right = expect_number(&operand, line)?;

                Node::binary(op, acc, right)
            },
        };
        stack.push(ParseResult::Node(fragment));
    }

    if stack.len() > 1 {
        return Err(Diagnostic::new(DiagnosticKind::MultipleExpressions,
                                   EXPECTED_SINGLE,
                                   dump_stack(&stack),
                                   line));
    }

    match stack.pop() {
        Some(ParseResult::Node(node)) => Ok(node),
        Some(ParseResult::Diagnostic(diagnostic)) => Err(diagnostic),
        None => Ok(Node::Void),
    }
}

/// Reports an accumulator that cannot take part in an operation.
///
/// The scan never pushes `VOID`, so reaching this is a parser bug.
fn invalid_stack(acc: &Node, line: usize) -> Diagnostic {
    debug_assert!(!matches!(acc, Node::Void),
                  "`{}` on the parser stack at line {line}",
                  acc.tag());
    warn!("invalid parser stack on line {line}: found {}", acc.tag());

    Diagnostic::new(DiagnosticKind::InvalidStack,
                    EXPECTED_NUMBER_OR_OPERATION,
                    acc.tag(),
                    line)
}
