//! # minicalc
//!
//! minicalc is a tiny line-oriented calculator language written in Rust.
//! Each line is scanned, parsed and evaluated on its own, while variables
//! persist from one line to the next. Lines starting with `print` produce
//! output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of one line as a tree. The tree is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of node variants.
/// - Attaches source lines to nodes for error reporting.
/// - Renders trees in a compact debug notation.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Wraps them in one crate-level [`error::Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation, and drives them line by line.
pub mod interpreter;

pub use crate::{
    error::Error,
    interpreter::{runner::Outcome, value::Value},
};

/// Runs a whole program and returns its aggregated result.
///
/// Every non-blank line is scanned, parsed and evaluated in order against one
/// variable store that lives for this call only.
///
/// - If exactly one line was a `print` statement, its value is returned as
///   [`Outcome::Single`].
/// - If several lines printed, all printed values are returned in order as
///   [`Outcome::Sequence`].
/// - Without any `print`, the value of the last line is returned, or
///   [`Outcome::Empty`] if there was no line to evaluate.
///
/// # Errors
/// Returns the first error of any line. Processing stops there and no
/// partial results are returned.
///
/// # Examples
/// ```
/// use minicalc::{Outcome, Value, run};
///
/// assert_eq!(run("x = 5\nx + 1").unwrap(), Outcome::Single(Value::Integer(6)));
/// assert_eq!(run("print 1\nprint 2").unwrap().to_string(), "[1, 2]");
/// assert_eq!(run("\n   \n").unwrap(), Outcome::Empty);
///
/// // 'y' was never assigned.
/// assert!(run("y").is_err());
/// ```
pub fn run(source: &str) -> Result<Outcome, Error> {
    interpreter::runner::run_source(source)
}
