//! # linecalc
//!
//! linecalc is a line-oriented arithmetic expression compiler written in Rust.
//! Every line of a document is tokenized, parsed and evaluated on its own. A
//! line either yields a number, the `VOID` sentinel when it is blank, or a
//! compilation diagnostic that travels through the pipeline as plain data.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{lexer::tokenize, parser::core::parse_line};
pub use crate::{
    ast::{Node, Operator, ParseResult},
    error::{Diagnostic, DiagnosticKind, DriverError},
    interpreter::{evaluator::core::execute, value::Value},
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Node` tree produced for a successfully parsed
/// line and the `ParseResult` sum type that pairs it with diagnostics.
///
/// # Responsibilities
/// - Defines the `VOID`, number and binary expression node variants.
/// - Owns operand subtrees so that every tree is acyclic and immutable.
/// - Renders nodes in their printable prefix form.
pub mod ast;
/// Provides diagnostics and driver errors.
///
/// Diagnostics describe why a single line failed to compile. They are values,
/// not errors to propagate: a diagnostic stands in for the line's result and
/// evaluates to its own formatted message. Driver errors cover everything
/// outside the pipeline, such as reading the input document.
///
/// # Responsibilities
/// - Defines the four diagnostic kinds and their human readable descriptions.
/// - Formats the `[COMPILATION ERROR]` message with the offending token and
///   line number.
/// - Reports I/O failures of the command line driver.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluating lines.
///
/// # Responsibilities
/// - Splits a line into classified tokens.
/// - Folds tokens from right to left into a single `ParseResult`.
/// - Evaluates results into runtime values.
pub mod interpreter;
/// Writes compiled documents to an output sink.
///
/// Used by the command line driver to print either the value or the printable
/// tree of every line, optionally numbered.
pub mod output;

/// Compiles a document into one `ParseResult` per line.
///
/// The document is split on `'\n'` and each line is parsed independently with
/// its 1-based line number. Blank lines yield `VOID`; the output keeps the
/// order of the input lines.
///
/// # Examples
/// ```
/// use linecalc::{Node, ParseResult, compile};
///
/// let results = compile("1 + 2\n\n+");
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].to_string(), "+ 2 1");
/// assert_eq!(results[1], ParseResult::Node(Node::Void));
/// assert!(results[2].is_diagnostic());
/// ```
#[must_use]
pub fn compile(document: &str) -> Vec<ParseResult> {
    document.split('\n')
            .enumerate()
            .map(|(index, line)| {
                let line_number = index + 1;
                let result = parse_line(tokenize(line), line_number);
                debug!("line {line_number}: {result}");
                result
            })
            .collect()
}

/// Compiles and evaluates a document, returning one value per line.
///
/// # Examples
/// ```
/// use linecalc::{Value, run};
///
/// let values = run("1 + 2 * 3\n\n10 - 2 / 4\n1 +");
///
/// assert_eq!(values[0], Value::from(7.0));
/// assert_eq!(values[1], Value::Void);
/// assert_eq!(values[2], Value::from(-8.0));
/// assert_eq!(values[3].to_string(),
///            "[COMPILATION ERROR]: Invalid token => expected a number literal, got '+' on line 4");
/// ```
#[must_use]
pub fn run(document: &str) -> Vec<Value> {
    execute(&compile(document))
}
