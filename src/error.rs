use std::fmt;

/// Lexing errors.
///
/// Raised by the scanner when a line contains a character outside the
/// language or an integer literal that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a syntax tree from
/// tokens: unexpected tokens, unbalanced parentheses, premature end of input
/// and leftover tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, access to undefined variables or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error returned by a run.
///
/// Wraps the error of whichever stage failed first. The `Display` output is
/// the human readable message a front end shows to its user.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The scanner rejected the line.
    Lex(LexError),
    /// The parser rejected the tokens of the line.
    Parse(ParseError),
    /// Evaluating the syntax tree failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the 1-based source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
