use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers stay integers for `+`, `-` and `*`; the result is checked
/// for overflow. As soon as one operand is real, the other one is promoted
/// and the operation is carried out in `f64`. Division is true division and
/// always yields a real, even for two integers.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is exactly zero.
/// - `Overflow` if integer addition, subtraction or multiplication overflows.
///
/// # Example
/// ```
/// use minicalc::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::arithmetic::eval_arithmetic, value::Value},
/// };
///
/// let sum = eval_arithmetic(BinaryOperator::Add, Value::Integer(5), Value::Real(5.0), 1);
/// assert_eq!(sum.unwrap(), Value::Real(10.0));
///
/// let quotient = eval_arithmetic(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 1);
/// assert_eq!(quotient.unwrap(), Value::Real(3.5));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Integer, Real};

    match (op, left, right) {
        (Div, _, right) if right.is_zero() => Err(RuntimeError::DivisionByZero { line }),
        (Div, left, right) => Ok(Real(left.as_real() / right.as_real())),
        (Add, Integer(a), Integer(b)) => checked(a.checked_add(b), line),
        (Sub, Integer(a), Integer(b)) => checked(a.checked_sub(b), line),
        (Mul, Integer(a), Integer(b)) => checked(a.checked_mul(b), line),
        (Add, left, right) => Ok(Real(left.as_real() + right.as_real())),
        (Sub, left, right) => Ok(Real(left.as_real() - right.as_real())),
        (Mul, left, right) => Ok(Real(left.as_real() * right.as_real())),
    }
}

/// Wraps the result of a checked integer operation.
fn checked(result: Option<i64>, line: usize) -> EvalResult<Value> {
    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { line })
}
