/// Lexing errors.
///
/// Raised while turning the input string into tokens: characters that are not
/// part of the grammar, or operator prefixes that do not complete.
pub mod lex_error;
/// Parsing errors.
///
/// Raised while building the syntax tree: missing operands, unbalanced
/// parentheses, or tokens that cannot start an operand.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while walking the syntax tree: literals that fail to parse as a
/// number, or operators with no meaning in their position.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
use thiserror::Error;

/// Any failure raised while evaluating an expression.
///
/// Each phase reports its own error type; this enum wraps them so a single
/// `?` carries a failure from the lexer through the parser up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input contained text the lexer could not tokenize.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The syntax tree could not be reduced to a number.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
