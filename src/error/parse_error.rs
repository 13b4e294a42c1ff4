use thiserror::Error;

/// Raised when the lexer meets text that starts no token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at offset {position}: Unexpected character(s) '{text}'.")]
pub struct LexError {
    /// The offending text.
    pub text:     String,
    /// Byte offset of the offending text.
    pub position: usize,
}

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token the grammar does not allow here.
    #[error("Error at offset {position}: Expected {expected}, found '{found}'.")]
    UnexpectedToken {
        /// Description of what the grammar needed.
        expected: String,
        /// Literal text of the token that was found.
        found:    String,
        /// Byte offset of the found token.
        position: usize,
    },
    /// Reached the end of input while the grammar still needed tokens.
    #[error("Error at offset {position}: Expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar needed.
        expected: String,
        /// Byte offset just past the last token.
        position: usize,
    },
    /// A literal token whose text cannot be turned into a value.
    #[error("Error at offset {position}: Invalid literal {literal}.")]
    InvalidLiteral {
        /// The literal text.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset at which parsing stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::InvalidLiteral { position, .. } => *position,
        }
    }

    /// What the grammar expected at [`ParseError::position`].
    #[must_use]
    pub fn expected(&self) -> &str {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected, .. } => {
                expected
            },
            Self::InvalidLiteral { .. } => "a valid literal",
        }
    }
}
