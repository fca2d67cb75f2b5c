use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::{parse_additive_tail, parse_term}},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the tokens of one line into a syntax tree.
///
/// An empty token sequence is a no-op line and yields `Ok(None)`. Otherwise
/// exactly one expression is parsed from the front of the line. Tokens after
/// that expression are not looked at, so `1 2` parses as `1`.
///
/// # Errors
/// Returns a `ParseError` if the tokens do not start with an expression.
///
/// # Example
/// ```
/// use minicalc::interpreter::{lexer::scan, parser::parse};
///
/// let tokens = scan("print 1 + 2 * 3", 1).unwrap();
/// let tree = parse(&tokens).unwrap().unwrap();
///
/// assert_eq!(tree.to_string(), "(print (INT:1 PLUS (INT:2 MUL INT:3)))");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Option<Expr>> {
    let Some((_, line)) = tokens.first() else {
        return Ok(None);
    };

    let mut iter = tokens.iter().peekable();
    parse_expression(&mut iter, *line).map(Some)
}

/// Parses a full expression.
///
/// Grammar:
/// ```text
///     expr := "print" expr
///           | IDENTIFIER "=" expr
///           | IDENTIFIER (("+" | "-") term)*
///           | term (("+" | "-") term)*
/// ```
/// A leading identifier is first tried as an assignment target. Without a
/// following `=` it becomes a variable access that only `+` and `-` continue;
/// in `x * 2` the `* 2` is left unparsed.
///
/// Assignment recurses into `expr`, which makes `a = b = 1` right
/// associative.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line number of the tokens, reported if the line ends early.
///
/// # Returns
/// The parsed expression node.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, print_line)) => {
            tokens.next();
            let value = parse_expression(tokens, line)?;
            Ok(Expr::Print { value: Box::new(value),
                             line:  *print_line, })
        },
        Some((Token::Identifier(_), _)) => parse_identifier_expression(tokens, line),
        _ => {
            let left = parse_term(tokens, line)?;
            parse_additive_tail(tokens, left, line)
        },
    }
}

/// Parses an expression that starts with an identifier.
///
/// The lookahead for `=` runs on a clone of the iterator, so only the
/// identifier itself is consumed when it is not an assignment target.
///
/// # Returns
/// - `Expr::VariableAssign` for `IDENTIFIER "=" expr`.
/// - Otherwise an `Expr::VariableAccess`, possibly extended by `+`/`-`.
fn parse_identifier_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), name_line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };

    if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        let value = parse_expression(tokens, line)?;
        return Ok(Expr::VariableAssign { name:  name.clone(),
                                         value: Box::new(value),
                                         line:  *name_line, });
    }

    let access = Expr::VariableAccess { name: name.clone(),
                                        line: *name_line, };
    parse_additive_tail(tokens, access, line)
}
