use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{lexer::Token, parser::{core::ParseResult, factor::parse_factor}},
};

/// Continues an additive chain from an already parsed left operand.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// parses as `(a - b) - c`.
///
/// The rule is: `additive := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `left`: The first term of the chain.
/// - `line`: Line number of the tokens, reported if the line ends early.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or `left` unchanged if no operator follows.
pub(crate) fn parse_additive_tail<'a, I>(tokens: &mut Peekable<I>,
                                         mut left: Expr,
                                         line: usize)
                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((token, op_line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        let right = parse_term(tokens, line)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: *op_line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Line number of the tokens, reported if the line ends early.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub(crate) fn parse_term<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens, line)?;
    while let Some((token, op_line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        tokens.next();
        let right = parse_factor(tokens, line)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: *op_line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Returns
/// `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, otherwise `None`.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
