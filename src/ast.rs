use std::fmt;

use crate::interpreter::value::Value;

/// Represents a numeric literal as written in the source.
///
/// The integer/real distinction of the literal is kept all the way into
/// evaluation; `5` and `5.0` are different literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "INT:{n}"),
            Self::Real(r) => write!(f, "FLOAT:{}", Value::Real(*r)),
        }
    }
}

/// An abstract syntax tree node for one line of source.
///
/// The variant set is closed. Leaves are always `Literal` or
/// `VariableAccess`; every other node owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VariableAccess {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment of a value to a variable, e.g. `x = 1 + 2`.
    VariableAssign {
        /// Name of the variable being assigned.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `print` statement.
    Print {
        /// The expression whose value is printed.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Returns the source line this node was parsed from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::VariableAccess { line, .. }
            | Self::VariableAssign { line, .. }
            | Self::Print { line, .. } => *line,
        }
    }

    /// Returns `true` if this node is a `print` statement.
    #[must_use]
    pub const fn is_print(&self) -> bool {
        matches!(self, Self::Print { .. })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {} {right})", op.token_name()),
            Self::VariableAccess { name, .. } => write!(f, "(var {name})"),
            Self::VariableAssign { name, value, .. } => write!(f, "({name} = {value})"),
            Self::Print { value, .. } => write!(f, "(print {value})"),
        }
    }
}

/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Name of the token the operator was parsed from, as used in tree dumps.
    #[must_use]
    pub const fn token_name(self) -> &'static str {
        match self {
            Self::Add => "PLUS",
            Self::Sub => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
        }
    }
}
