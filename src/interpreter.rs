/// The evaluator module turns parse results into runtime values.
///
/// Evaluation is total: numbers and expressions produce numbers, `VOID`
/// produces the `VOID` sentinel and a diagnostic produces its own message.
///
/// # Responsibilities
/// - Applies arithmetic operators to evaluated operands.
/// - Recomputes a tree every time its value is requested.
/// - Maps a whole document's results to values, keeping line order.
pub mod evaluator;
/// The lexer module splits a line into classified tokens.
///
/// A line is broken on runs of whitespace, and every piece is classified as a
/// numeral, an operator or an invalid token.
///
/// # Responsibilities
/// - Recognizes numerals without sign or leading zeros and with at most one
///   fractional part.
/// - Recognizes the `+`, `-`, `*` and `/` operators.
/// - Keeps the source text of each token for printing and diagnostics.
pub mod lexer;
/// The parser module folds a line's tokens into a single result.
///
/// Tokens are consumed from the end of the line toward its start with an
/// explicit stack, and the first problem found becomes the line's diagnostic.
///
/// # Responsibilities
/// - Builds number and binary expression nodes.
/// - Reports invalid tokens, incomplete expressions and stack faults with the
///   line number.
pub mod parser;
/// The value module defines what a line evaluates to.
pub mod value;
