/// Entry points for parsing a line and the `expr` production.
///
/// Handles `print` statements, assignments and the additive chain. Parsing
/// stops after the first expression of a line.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative `term` and additive levels of the
/// grammar.
pub mod binary;

/// Factor parsing.
///
/// Parses literals, variable accesses and parenthesized expressions, the
/// highest precedence level of the grammar.
pub mod factor;

pub use self::core::{ParseResult, parse};
