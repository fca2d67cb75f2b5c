use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::Error,
    interpreter::{
        evaluator::{VariableStore, evaluate},
        lexer::scan,
        parser::parse,
        value::Value,
    },
};

/// The aggregated result of one run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No line produced a value.
    Empty,
    /// Exactly one `print`, or no `print` at all and the value of the last
    /// line that produced one.
    Single(Value),
    /// The values of all `print` statements in source order, when there was
    /// more than one.
    Sequence(Vec<Value>),
}

impl Outcome {
    /// Returns all values carried by the outcome, in order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Empty => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// Returns `true` for `Outcome::Empty`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Single(value) => write!(f, "{value}"),
            Self::Sequence(values) => {
                write!(f, "[")?;

                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}

/// The value one executed line produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineValue {
    /// The value of the line's syntax tree.
    pub value:   Value,
    /// Whether the line's outermost node was a `print` statement.
    pub printed: bool,
}

/// Runs lines one after another against a single variable store.
///
/// The runner remembers the values of top-level `print` statements and the
/// value of the most recent line that was not a `print`. A `print` nested
/// inside an expression, as in `(print 1) + 2`, does not count as output.
#[derive(Debug, Default)]
pub struct LineRunner {
    store:      VariableStore,
    outputs:    Vec<Value>,
    last_value: Option<Value>,
}

impl LineRunner {
    /// Creates a runner with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variable store shared by all lines executed so far.
    #[must_use]
    pub const fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Scans, parses and evaluates one line.
    ///
    /// `text` must not contain a newline. Surrounding whitespace is ignored,
    /// and a line without tokens is a no-op that returns `Ok(None)`.
    ///
    /// # Errors
    /// Returns the first lexing, parsing or evaluation error of the line.
    /// The runner's outputs are left untouched in that case, but assignments
    /// evaluated before the failure stay in the store.
    pub fn execute_line(&mut self, text: &str, line: usize) -> Result<Option<LineValue>, Error> {
        let tokens = scan(text.trim(), line)?;
        trace!(line, tokens = ?tokens.iter().map(|(tok, _)| tok.to_string()).collect::<Vec<_>>(), "scanned");

        let Some(tree) = parse(&tokens)? else {
            return Ok(None);
        };
        trace!(line, tree = %tree, "parsed");

        let value = evaluate(&tree, &mut self.store)?;
        let printed = tree.is_print();
        debug!(line, %value, printed, "evaluated");

        if printed {
            self.outputs.push(value);
        } else {
            self.last_value = Some(value);
        }

        Ok(Some(LineValue { value, printed }))
    }

    /// Consumes the runner and aggregates everything it executed.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{runner::{LineRunner, Outcome}, value::Value};
    ///
    /// let mut runner = LineRunner::new();
    /// runner.execute_line("x = 2", 1).unwrap();
    /// runner.execute_line("print 3 * x", 2).unwrap();
    ///
    /// assert_eq!(runner.finish(), Outcome::Single(Value::Integer(6)));
    /// ```
    #[must_use]
    pub fn finish(self) -> Outcome {
        match self.outputs.len() {
            0 => self.last_value.map_or(Outcome::Empty, Outcome::Single),
            1 => Outcome::Single(self.outputs[0]),
            _ => Outcome::Sequence(self.outputs),
        }
    }
}

/// Splits source text into numbered, trimmed, non-blank lines.
///
/// Line numbers are 1-based and count blank lines too, so they match what an
/// editor shows.
///
/// # Example
/// ```
/// use minicalc::interpreter::runner::source_lines;
///
/// let lines: Vec<_> = source_lines("x = 1\n\n  print x  \n").collect();
/// assert_eq!(lines, vec![(1, "x = 1"), (3, "print x")]);
/// ```
pub fn source_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.split('\n')
          .enumerate()
          .map(|(index, text)| (index + 1, text.trim()))
          .filter(|(_, text)| !text.is_empty())
}

/// Runs every line of `source` and aggregates the results.
///
/// See [`crate::run`].
///
/// # Errors
/// Returns the error of the first failing line; nothing else is returned in
/// that case.
pub fn run_source(source: &str) -> Result<Outcome, Error> {
    let mut runner = LineRunner::new();

    for (line, text) in source_lines(source) {
        debug!(line, text, "running line");
        runner.execute_line(text, line)?;
    }

    Ok(runner.finish())
}
