#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning a line.
pub enum LexError {
    /// Found a character that cannot start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The 1-based column of the character within its line.
        column:    usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal does not fit in a 64 bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        column,
                                        line, } => write!(f,
                                                          "Error on line {line}: Illegal character '{character}' at column {column}."),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
