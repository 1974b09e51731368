use thiserror::Error;

/// Represents all errors that can occur while parsing tokens into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended where an operand was expected.
    #[error("Unexpected end of expression.")]
    UnexpectedEndOfInput,
    /// A parenthesized expression was not followed by `)`.
    #[error("Expected \")\", got {found}.")]
    ExpectedClosingParen {
        /// The token found instead.
        found: String,
    },
    /// Found a token that cannot start an operand.
    #[error("Unexpected token {token}: expected a number, a variable, or parentheses.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
}
