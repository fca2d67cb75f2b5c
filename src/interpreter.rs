/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator traverses a tree, performs arithmetic, manages the variable
/// store and produces the value of the line.
///
/// # Responsibilities
/// - Evaluates every node variant with an exhaustive match.
/// - Promotes integers to reals in mixed arithmetic.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes a line of source code.
///
/// The lexer reads raw source text and produces the tokens of the language:
/// numbers, identifiers, operators, parentheses, `=` and `print`. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens tagged with their line.
/// - Distinguishes integer and float literals.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the syntax tree of a line from its tokens.
///
/// # Responsibilities
/// - Converts tokens into a single [`crate::ast::Expr`] per line.
/// - Enforces operator precedence and associativity.
/// - Reports grammar violations with their line number.
pub mod parser;
/// The line runner drives the other stages over a whole source text.
///
/// # Responsibilities
/// - Splits source text into lines and skips blank ones.
/// - Runs scan, parse and evaluate per line against one variable store.
/// - Aggregates printed values into the final [`runner::Outcome`].
pub mod runner;
/// The value module defines the runtime numeric type.
///
/// # Responsibilities
/// - Defines the `Value` enum with its integer and real variants.
/// - Converts literals into values and integers into reals.
/// - Formats values for display.
pub mod value;
