//! # calcengine
//!
//! calcengine is a small arithmetic expression engine written in Rust.
//! It lexes, parses, and evaluates calculator expressions such as
//! `5 + 7 - 45` or `(2 + 3) ** 2 √ 2`, returning a single `f64`.

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

use tracing::debug;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{evaluator::core::evaluate_ast, lexer::Lexer, parser::core::Parser},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The tree is built by
/// the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per syntactic construct.
/// - Renders a tree back into canonical expression text.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure aborts the current evaluation. The three phase-specific
/// error enums are wrapped by [`error::Error`] so they can be propagated with
/// `?` through the whole pipeline.
pub mod error;
/// Orchestrates the three phases of evaluation.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Literal parsing and result formatting shared by the evaluator and the
/// command-line front end.
pub mod util;

/// Parses an expression into its syntax tree without evaluating it.
///
/// # Errors
/// Returns a lexing error for unrecognized characters and a parse error for
/// malformed expressions, including empty input.
///
/// # Examples
/// ```
/// let tree = calcengine::parse("(1 + 2) * 3").unwrap();
/// assert_eq!(tree.to_string(), "(1 + 2) * 3");
/// ```
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(Lexer::new(source)).parse()
}

/// Evaluates an arithmetic expression and returns its value.
///
/// This builds a lexer over `source`, a parser over that lexer, parses one
/// expression and walks the resulting tree. Every call is independent; no
/// state is carried between evaluations.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails. Empty and
/// whitespace-only input is an error rather than zero.
///
/// # Examples
/// ```
/// use calcengine::evaluate;
///
/// assert_eq!(evaluate("5 + 7 - 45").unwrap(), -33.0);
/// assert_eq!(evaluate("2 * 3 ** 2").unwrap(), 18.0);
///
/// // Nothing to evaluate.
/// assert!(evaluate("   ").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let result = parse(source).and_then(|tree| evaluate_ast(&tree).map_err(Error::from));

    match &result {
        Ok(value) => debug!(source, value, "evaluated expression"),
        Err(e) => debug!(source, error = %e, "evaluation failed"),
    }

    result
}
