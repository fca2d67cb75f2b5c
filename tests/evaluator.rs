use minicalc::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{EvalResult, VariableStore, arithmetic::eval_arithmetic, evaluate},
        lexer::scan,
        parser::parse,
        runner::{LineRunner, LineValue, Outcome},
        value::Value,
    },
};

fn eval_line(src: &str, store: &mut VariableStore) -> EvalResult<Value> {
    let tokens = scan(src, 1).unwrap_or_else(|e| panic!("Failed to scan {src:?}: {e}"));
    let tree = parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
                             .unwrap_or_else(|| panic!("{src:?} produced no tree"));
    evaluate(&tree, store)
}

#[test]
fn literals_are_not_widened() {
    let mut store = VariableStore::new();
    assert_eq!(eval_line("5", &mut store), Ok(Value::Integer(5)));
    assert_eq!(eval_line("5.0", &mut store), Ok(Value::Real(5.0)));
}

#[test]
fn assignment_writes_the_store() {
    let mut store = VariableStore::new();
    assert_eq!(eval_line("x = 2 * 3", &mut store), Ok(Value::Integer(6)));
    assert_eq!(store.get("x"), Some(Value::Integer(6)));

    assert_eq!(eval_line("x = 9 / x", &mut store), Ok(Value::Real(1.5)));
    assert_eq!(store.get("x"), Some(Value::Real(1.5)));
    assert_eq!(store.len(), 1);
}

#[test]
fn operands_evaluate_left_to_right() {
    let mut store = VariableStore::new();
    assert_eq!(eval_line("(x = 1) + (x = x + 1)", &mut store), Ok(Value::Integer(3)));
    assert_eq!(store.get("x"), Some(Value::Integer(2)));
}

#[test]
fn print_returns_its_operand() {
    let mut store = VariableStore::new();
    assert_eq!(eval_line("print 2 + 2", &mut store), Ok(Value::Integer(4)));
}

#[test]
fn undefined_variable() {
    let mut store = VariableStore::new();
    assert_eq!(eval_line("1 + missing", &mut store),
               Err(RuntimeError::UndefinedVariable { name: "missing".to_string(),
                                                     line: 1, }));
    assert!(store.is_empty());
}

#[test]
fn division_by_zero_checks_exact_zero() {
    for right in [Value::Integer(0), Value::Real(0.0), Value::Real(-0.0)] {
        assert_eq!(eval_arithmetic(BinaryOperator::Div, Value::Integer(1), right, 2),
                   Err(RuntimeError::DivisionByZero { line: 2 }));
    }
    assert_eq!(eval_arithmetic(BinaryOperator::Div, Value::Integer(1), Value::Real(0.5), 2),
               Ok(Value::Real(2.0)));
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_eq!(eval_arithmetic(BinaryOperator::Sub, Value::Real(1.5), Value::Integer(1), 1),
               Ok(Value::Real(0.5)));
    assert_eq!(eval_arithmetic(BinaryOperator::Mul, Value::Integer(3), Value::Integer(4), 1),
               Ok(Value::Integer(12)));
}

#[test]
fn every_operator_covers_both_operand_kinds() {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let cases = [(Add, Value::Integer(6), Value::Real(3.5)),
                 (Sub, Value::Integer(4), Value::Real(2.5)),
                 (Mul, Value::Integer(5), Value::Real(1.5)),
                 (Div, Value::Real(5.0), Value::Real(6.0))];
    for (op, integers, reals) in cases {
        assert_eq!(eval_arithmetic(op, Value::Integer(5), Value::Integer(1), 1), Ok(integers));
        assert_eq!(eval_arithmetic(op, Value::Real(3.0), Value::Real(0.5), 1), Ok(reals));
    }
    assert_eq!(eval_arithmetic(Div, Value::Integer(0), Value::Integer(4), 1), Ok(Value::Real(0.0)));
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(eval_arithmetic(BinaryOperator::Mul, Value::Integer(i64::MAX), Value::Integer(2), 4),
               Err(RuntimeError::Overflow { line: 4 }));
    assert_eq!(eval_arithmetic(BinaryOperator::Sub, Value::Integer(i64::MIN), Value::Integer(1), 4),
               Err(RuntimeError::Overflow { line: 4 }));
}

#[test]
fn values_display() {
    assert_eq!(Value::Integer(-3).to_string(), "-3");
    assert_eq!(Value::Real(10.0).to_string(), "10.0");
    assert_eq!(Value::Real(0.25).to_string(), "0.25");
}

#[test]
fn line_runner_keeps_one_store() {
    let mut runner = LineRunner::new();

    assert_eq!(runner.execute_line("a = 2", 1).unwrap(),
               Some(LineValue { value:   Value::Integer(2),
                                printed: false, }));
    assert_eq!(runner.execute_line("   ", 2).unwrap(), None);
    assert_eq!(runner.execute_line("print 2 * a", 3).unwrap(),
               Some(LineValue { value:   Value::Integer(4),
                                printed: true, }));
    assert!(runner.execute_line("b", 4).is_err());
    assert_eq!(runner.store().get("a"), Some(Value::Integer(2)));

    assert_eq!(runner.finish(), Outcome::Single(Value::Integer(4)));
}
