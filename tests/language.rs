use std::fs;

use minicalc::{
    Outcome, Value,
    error::{Error, LexError, ParseError, RuntimeError},
    run,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```minicalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_outcome(src: &str, expected: Outcome) {
    match run(src) {
        Ok(outcome) => assert_eq!(outcome, expected, "unexpected outcome for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_single(src: &str, expected: Value) {
    assert_outcome(src, Outcome::Single(expected));
}

fn run_err(src: &str) -> Error {
    match run(src) {
        Ok(outcome) => panic!("Script succeeded with {outcome:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_follows_precedence_and_associativity() {
    assert_single("2 + 3 * 4", Value::Integer(14));
    assert_single("(2 + 3) * 4", Value::Integer(20));
    assert_single("10 - 4 - 3", Value::Integer(3));
    assert_single("2 * 3 - 4 * 5", Value::Integer(-14));
    assert_single("((7))", Value::Integer(7));
    assert_single("8 / 2 / 2", Value::Real(2.0));
}

#[test]
fn literal_kind_is_preserved() {
    assert_single("5", Value::Integer(5));
    assert_single("5.0", Value::Real(5.0));
    assert_single("5 + 5.0", Value::Real(10.0));
    assert_single("7.", Value::Real(7.0));
    assert_single("0.5 * 4", Value::Real(2.0));
}

#[test]
fn division_is_exact() {
    assert_single("7 / 2", Value::Real(3.5));
    assert_single("4 / 2", Value::Real(2.0));
    assert_eq!(run("4 / 2").unwrap().to_string(), "2.0");
}

#[test]
fn division_by_zero_fails_at_any_depth() {
    for src in ["1 / 0", "1 / 0.0", "3 + (4 * (1 / (2 - 2)))", "x = 0\nprint 10 / x"] {
        let err = run_err(src);
        assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })),
                "{src:?} gave {err:?}");
    }
}

#[test]
fn variables_persist_across_lines() {
    assert_single("x = 5\nx + 1", Value::Integer(6));
    assert_single("x = 3\n2 * x", Value::Integer(6));
    assert_single("x = 1\nx = x + 1\nx", Value::Integer(2));
    assert_single("x = y = 4\nx + y", Value::Integer(8));
}

#[test]
fn assignment_yields_its_value() {
    assert_single("x = 5", Value::Integer(5));
    assert_single("(x = 1) + 2\nx", Value::Integer(1));
    assert_single("(x = 1) + 2", Value::Integer(3));
}

#[test]
fn undefined_variable_is_error() {
    assert_eq!(run_err("y"),
               Error::Runtime(RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                                line: 1 }));
}

#[test]
fn runs_do_not_share_variables() {
    assert!(run("x = 1").is_ok());
    assert!(matches!(run_err("x"), Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn print_aggregation() {
    assert_outcome("print 1\nprint 2",
                   Outcome::Sequence(vec![Value::Integer(1), Value::Integer(2)]));
    assert_single("print 1", Value::Integer(1));
    assert_single("3 + 4", Value::Integer(7));
    assert_single("x = 1\nprint x\nx + 10", Value::Integer(1));
    assert_single("print print print 1", Value::Integer(1));
    assert_eq!(run("print 1\nprint 2.5").unwrap().to_string(), "[1, 2.5]");
    assert_eq!(run("print 1\nprint 2").unwrap().values(), &[Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn nested_print_is_not_an_output() {
    assert_single("(print 1) + 2", Value::Integer(3));
    assert_single("print 5\n(print 1) + 2", Value::Integer(5));
}

#[test]
fn blank_input_is_empty() {
    assert_outcome("", Outcome::Empty);
    assert_outcome("\n   \n\t\n", Outcome::Empty);
    assert_eq!(run("\n\n").unwrap().to_string(), "");
}

#[test]
fn unterminated_paren_is_parse_error() {
    assert_eq!(run_err("(1 + 2"),
               Error::Parse(ParseError::MissingClosingParen { line: 1 }));
}

#[test]
fn illegal_character_is_lex_error() {
    let err = run_err("1 + @");
    assert_eq!(err,
               Error::Lex(LexError::UnexpectedCharacter { character: '@',
                                                          column:    5,
                                                          line:      1, }));
    assert!(err.to_string().contains('@'));
}

#[test]
fn first_error_aborts_the_run() {
    let err = run_err("print 1\nprint 2\nz\nprint 4\nprint 5");
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "Error on line 3: Variable 'z' is not defined.");
}

#[test]
fn line_numbers_count_blank_lines() {
    let err = run_err("x = 0\n\n\n1 / x");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 4 }));
}

#[test]
fn integer_limits_are_errors() {
    assert!(matches!(run_err("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { line: 1 })));
    assert_eq!(run_err("99999999999999999999"),
               Error::Lex(LexError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                                      line:    1, }));
}

#[test]
fn malformed_lines_are_errors() {
    assert!(matches!(run_err("print"), Error::Parse(ParseError::UnexpectedEndOfInput { line: 1 })));
    assert!(matches!(run_err("1.2.3"), Error::Lex(LexError::UnexpectedCharacter { character: '.', .. })));
    assert!(matches!(run_err("= 5"), Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn leading_identifier_only_continues_with_plus_or_minus() {
    assert_single("x = 3\nx * 2", Value::Integer(3));
    assert_single("x = 3\nx * 2 + 1", Value::Integer(3));
    assert_single("x = 3\nx + 1 * 2", Value::Integer(5));
    assert_single("x = 3\n(x) * 2", Value::Integer(6));
    assert_single("x = 3\ny = x / 0\ny", Value::Integer(3));
}

#[test]
fn tokens_after_the_expression_are_ignored() {
    assert_single("1 2", Value::Integer(1));
    assert_single("1)", Value::Integer(1));
    assert_single("print 4 5\n6", Value::Integer(4));
    assert!(matches!(run_err("1 @"), Error::Lex(LexError::UnexpectedCharacter { character: '@', .. })));
}

#[test]
fn example_script_works() {
    let contents = fs::read_to_string("tests/example.calc").unwrap();
    assert_outcome(&contents,
                   Outcome::Sequence(vec![Value::Real(10.0), Value::Real(13.0), Value::Real(1.3)]));
}
