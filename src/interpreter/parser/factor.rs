use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::{ParseResult, parse_expression}},
};

/// Parses a factor, the atomic level of the grammar.
///
/// Grammar:
/// ```text
///     factor := INT | FLOAT
///             | "(" expr ")"
///             | IDENTIFIER
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `line`: Line number of the tokens, reported if the line ends early.
///
/// # Returns
/// The parsed factor [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends where a factor is required.
/// - `UnexpectedToken` if the next token cannot start a factor.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((tok, tok_line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };

    match tok {
        Token::Integer(n) => Ok(Expr::Literal { value: (*n).into(),
                                                line:  *tok_line, }),
        Token::Float(r) => Ok(Expr::Literal { value: (*r).into(),
                                              line:  *tok_line, }),
        Token::Identifier(name) => Ok(Expr::VariableAccess { name: name.clone(),
                                                             line: *tok_line, }),
        Token::LParen => parse_grouping(tokens, *tok_line),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line:  *tok_line, }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The inside is a full `expr`, so `(x = 1)` and `(print 1)` are accepted.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `line`: Line number of the `(` token.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, line)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::MissingClosingParen { line }),
    }
}
