#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a line.
pub enum ParseError {
    /// Found a token that cannot start a factor.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the line while a factor was still required.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    MissingClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::MissingClosingParen { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Syntax error: unexpected token '{token}'.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Syntax error: unexpected end of input.")
            },

            Self::MissingClosingParen { line } => {
                write!(f, "Error on line {line}: Syntax error: missing ')'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
