use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{arithmetic::eval_arithmetic, store::VariableStore},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a syntax tree and returns the resulting value.
///
/// The evaluator dispatches on the node variant:
/// - literals evaluate to themselves, keeping their integer/real kind,
/// - binary operations evaluate the left operand, then the right one, then
///   apply the operator,
/// - variable accesses read `store`,
/// - assignments evaluate their value, bind it in `store` and return it,
/// - `print` statements return the value of their operand. Producing output
///   is left to the caller.
///
/// # Errors
/// - `UndefinedVariable` when reading a name that was never assigned.
/// - `DivisionByZero` when the right operand of `/` is zero.
/// - `Overflow` when integer arithmetic leaves the `i64` range.
///
/// # Example
/// ```
/// use minicalc::interpreter::{
///     evaluator::{VariableStore, evaluate},
///     lexer::scan,
///     parser::parse,
///     value::Value,
/// };
///
/// let mut store = VariableStore::new();
/// let tree = parse(&scan("x = 5 + 5.0", 1).unwrap()).unwrap().unwrap();
///
/// assert_eq!(evaluate(&tree, &mut store).unwrap(), Value::Real(10.0));
/// assert_eq!(store.get("x"), Some(Value::Real(10.0)));
/// ```
pub fn evaluate(expr: &Expr, store: &mut VariableStore) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok((*value).into()),
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = evaluate(left, store)?;
            let right = evaluate(right, store)?;
            eval_arithmetic(*op, left, right, *line)
        },
        Expr::VariableAccess { name, line } => eval_variable(name, *line, store),
        Expr::VariableAssign { name, value, .. } => {
            let value = evaluate(value, store)?;
            store.assign(name, value);
            Ok(value)
        },
        Expr::Print { value, .. } => evaluate(value, store),
    }
}

/// Reads a variable from the store.
///
/// # Errors
/// Returns `RuntimeError::UndefinedVariable` if `name` was never assigned.
fn eval_variable(name: &str, line: usize, store: &VariableStore) -> EvalResult<Value> {
    store.get(name)
         .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line })
}
