use std::fmt;

use logos::Logos;

use crate::{error::LexError, interpreter::value::Value};

/// Represents a lexical token in a single line of source input.
///
/// The set of tokens is closed: numeric literals, the four arithmetic
/// operators, parentheses, identifiers, `=` and the `print` keyword.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Float literal tokens, such as `3.14` or `7.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Spaces, tabs, carriage returns and newlines.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(r) => write!(f, "FLOAT:{}", Value::Real(*r)),
            Self::Integer(n) => write!(f, "INT:{n}"),
            Self::Print => write!(f, "PRINT"),
            Self::Identifier(name) => write!(f, "IDENTIFIER:{name}"),
            Self::Plus => write!(f, "PLUS"),
            Self::Minus => write!(f, "MINUS"),
            Self::Star => write!(f, "MUL"),
            Self::Slash => write!(f, "DIV"),
            Self::LParen => write!(f, "LPAREN"),
            Self::RParen => write!(f, "RPAREN"),
            Self::Equals => write!(f, "EQ"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Scans one line of source text into tokens.
///
/// Every token is paired with `line`, the 1-based line number the text came
/// from, so later stages can report where they failed. Scanning stops at the
/// first character that cannot start a token; no partial token list is
/// returned in that case.
///
/// # Errors
/// - `LexError::UnexpectedCharacter` for any character outside the language.
/// - `LexError::LiteralTooLarge` for integer literals that do not fit in
///   `i64`.
///
/// # Example
/// ```
/// use minicalc::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("x = 2.5 * 4", 1).unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Float(2.5),
///                 Token::Star,
///                 Token::Integer(4)]);
/// ```
pub fn scan(text: &str, line: usize) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, line));
        } else {
            return Err(lex_error(text, &lexer, line));
        }
    }

    Ok(tokens)
}

/// Classifies the input the lexer just rejected.
///
/// Rejected input that starts with a digit is an integer literal whose
/// callback refused it; anything else is a stray character.
fn lex_error(text: &str, lexer: &logos::Lexer<Token>, line: usize) -> LexError {
    let offset = lexer.span().start;
    let rest = &text[offset..];

    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return LexError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                           line };
    }

    let character = rest.chars().next().unwrap_or_default();
    let column = text[..offset].chars().count() + 1;

    LexError::UnexpectedCharacter { character,
                                    column,
                                    line }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
