use crate::{
    ast::{Node, Operator, ParseResult},
    error::Diagnostic,
    interpreter::lexer::Token,
};

/// Requires a token to be a numeral and turns it into a number node.
///
/// # Errors
/// Returns an `InvalidToken` diagnostic expecting "a number literal" if the
/// token is not a numeral.
pub(in crate::interpreter::parser) fn expect_number(token: &Token<'_>,
                                                    line: usize)
                                                    -> Result<Node, Diagnostic> {
    token.numeral()
         .map(|value| Node::number(token.text, value))
         .ok_or_else(|| Diagnostic::expected_number(token.text, line))
}

/// Requires a token to be one of `+`, `-`, `*` or `/`.
///
/// # Errors
/// Returns an `InvalidToken` diagnostic expecting "an operation token" if the
/// token is not an operator.
pub(in crate::interpreter::parser) fn expect_operator(token: &Token<'_>,
                                                      line: usize)
                                                      -> Result<Operator, Diagnostic> {
    token.operator()
         .ok_or_else(|| Diagnostic::expected_operation(token.text, line))
}

/// Returns `true` if the tokens hold no expression.
///
/// Covers both an empty sequence and a single empty token.
pub(in crate::interpreter::parser) fn is_blank(tokens: &[Token<'_>]) -> bool {
    matches!(tokens, [] | [Token { text: "", .. }])
}

/// Renders the fragments left on the stack, bottom first.
pub(in crate::interpreter::parser) fn dump_stack(stack: &[ParseResult]) -> String {
    let fragments = stack.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("[{}]", fragments.join(", "))
}
