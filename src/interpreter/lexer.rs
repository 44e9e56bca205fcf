use log::trace;
use logos::Logos;

use crate::ast::Operator;

/// Represents the meaning of a token.
///
/// The lexer is run over a single whitespace-delimited token; a token only
/// has a lexeme when the first match covers all of its text.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Numeral literals such as `0`, `42` or `2.5`. No sign, no leading zero
    /// on multi-digit integers and at most one fractional part.
    #[regex(r"([1-9][0-9]*|[0-9])(\.[0-9]+)?", parse_numeral)]
    Numeral(f64),
    /// `+`, `-`, `*` or `/`
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
}

/// A whitespace-delimited piece of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// The token exactly as written.
    pub text:   &'a str,
    /// What the token means, or `None` if it is neither a numeral nor an
    /// operator.
    pub lexeme: Option<Lexeme>,
}

impl<'a> Token<'a> {
    /// Classifies a single token.
    ///
    /// ## Example
    /// ```
    /// use linecalc::{Operator, interpreter::lexer::{Lexeme, Token}};
    ///
    /// assert_eq!(Token::new("2.5").lexeme, Some(Lexeme::Numeral(2.5)));
    /// assert_eq!(Token::new("/").lexeme, Some(Lexeme::Operator(Operator::Div)));
    /// assert_eq!(Token::new("007").lexeme, None);
    /// assert_eq!(Token::new("1.").lexeme, None);
    /// ```
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text,
               lexeme: classify(text) }
    }

    /// Returns the numeric value if the token is a numeral.
    #[must_use]
    pub const fn numeral(&self) -> Option<f64> {
        match self.lexeme {
            Some(Lexeme::Numeral(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the operator if the token is one.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self.lexeme {
            Some(Lexeme::Operator(op)) => Some(op),
            _ => None,
        }
    }
}

/// Splits a line into tokens on runs of whitespace.
///
/// A blank or whitespace-only line produces no tokens.
///
/// ## Example
/// ```
/// use linecalc::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("  1 +\t2 ");
/// let texts: Vec<&str> = tokens.iter().map(|token| token.text).collect();
///
/// assert_eq!(texts, ["1", "+", "2"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    line.split_whitespace()
        .map(|text| {
            let token = Token::new(text);
            trace!("token {:?} => {:?}", token.text, token.lexeme);
            token
        })
        .collect()
}

/// Classifies a token, requiring the first lexeme to span the whole text.
fn classify(text: &str) -> Option<Lexeme> {
    let mut lexer = Lexeme::lexer(text);
    match lexer.next() {
        Some(Ok(lexeme)) if lexer.span().end == text.len() => Some(lexeme),
        _ => None,
    }
}

/// Parses a numeral from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The numeric value of the literal.
/// - `None`: If the slice cannot be represented as a float.
fn parse_numeral(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
