use thiserror::Error;

use crate::interpreter::lexer::Operator;

/// Represents all errors that can occur while evaluating a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A number literal's text is not a valid floating-point number.
    #[error("Invalid number literal \"{literal}\".")]
    InvalidNumber {
        /// The literal text.
        literal: String,
    },
    /// A prefix operation used an operator other than `+` or `-`.
    #[error("Unrecognized unary operator \"{operator}\".")]
    UnrecognizedUnaryOperator {
        /// The operator found.
        operator: Operator,
    },
}
