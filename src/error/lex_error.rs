use thiserror::Error;

/// Represents all errors that can occur while tokenizing input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that starts no token.
    #[error("Unrecognized token \"{character}\" at position {position}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Character index into the input.
        position:  usize,
    },
    /// Found the first character of an operator that no complete operator
    /// matched.
    #[error("Incomplete operator at position {position}.")]
    IncompleteOperator {
        /// Character index into the input.
        position: usize,
    },
}
