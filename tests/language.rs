use std::fs::{self};

use linecalc::{DiagnosticKind, ParseResult, Value, compile, execute, run};
use walkdir::WalkDir;

#[test]
fn document_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/documents").into_iter()
                                       .filter_map(Result::ok)
                                       .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let actual = render(&source);
        assert_eq!(actual, expected, "Document {path:?} produced unexpected output");
    }

    assert!(count > 0, "No documents found in tests/documents");
}

fn render(source: &str) -> String {
    run(source).iter().map(|value| format!("{value}\n")).collect()
}

fn assert_value(src: &str, expected: f64) {
    match run(src).as_slice() {
        [value] => assert_eq!(value.as_number(), Some(expected), "`{src}` evaluated to {value}"),
        values => panic!("`{src}` produced {} values", values.len()),
    }
}

fn assert_diagnostic(src: &str, kind: DiagnosticKind, token: &str) {
    match compile(src).as_slice() {
        [ParseResult::Diagnostic(diagnostic)] => {
            assert_eq!(diagnostic.kind, kind, "`{src}`");
            assert_eq!(diagnostic.token, token, "`{src}`");
        },
        results => panic!("`{src}` compiled into {results:?}"),
    }
}

#[test]
fn single_numerals() {
    assert_value("1", 1.0);
    assert_value("2.5", 2.5);
    assert_value("0", 0.0);
    assert_value("0.25", 0.25);
    assert_value("  42  ", 42.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3", 5.0);
    assert_value("1 + 1", 2.0);
    assert_value("2 / 2", 1.0);
    assert_value("3 * 4", 12.0);
}

#[test]
fn reduction_runs_right_to_left() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("10 - 2 / 4", -8.0);
    assert_value("1 - 3", 2.0);
    assert_value("2 / 8", 4.0);
    assert_value("1 - 2 - 3", 0.0);
    assert_value("2 * 3 + 4", 14.0);
}

#[test]
fn reduction_law_holds_for_five_tokens() {
    let numerals = [1.0, 2.0, 3.0, 4.5, 7.0];
    let operators = ['+', '-', '*', '/'];

    for t1 in numerals {
        for t2 in numerals {
            for op1 in operators {
                for op2 in operators {
                    let t3 = 5.0;
                    let src = format!("{t1} {op1} {t2} {op2} {t3}");
                    let expected = apply(op1, apply(op2, t3, t2), t1);

                    assert_value(&src, expected);
                }
            }
        }
    }
}

fn apply(op: char, left: f64, right: f64) -> f64 {
    match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        _ => unreachable!(),
    }
}

#[test]
fn blank_lines_are_void() {
    assert_eq!(run(""), [Value::Void]);
    assert_eq!(run("   \t"), [Value::Void]);
    assert_eq!(run("1\n\n2"), [Value::from(1.0), Value::Void, Value::from(2.0)]);
    assert_ne!(run("")[0], Value::from(0.0));
    assert_eq!(Value::Void.to_string(), "VOID");
}

#[test]
fn one_result_per_line() {
    for document in ["", "\n", "1\n2\n3", "1 +\n\n+ 1\n", "a\nb\nc\nd\n\n"] {
        assert_eq!(run(document).len(), document.split('\n').count(), "{document:?}");
    }
}

#[test]
fn crlf_lines_compile() {
    assert_eq!(run("1 + 1\r\n2\r\n"), [Value::from(2.0), Value::from(2.0), Value::Void]);
}

#[test]
fn leading_operator_is_incomplete() {
    assert_diagnostic("+ 1", DiagnosticKind::IncompleteExpression, "");
    assert_diagnostic("* 3 + 1", DiagnosticKind::IncompleteExpression, "");
}

#[test]
fn misplaced_tokens_are_invalid() {
    assert_diagnostic("/ + 1", DiagnosticKind::InvalidToken, "/");
    assert_diagnostic("1 +", DiagnosticKind::InvalidToken, "+");
    assert_diagnostic("1 2", DiagnosticKind::InvalidToken, "1");
    assert_diagnostic("1 + x", DiagnosticKind::InvalidToken, "x");
    assert_diagnostic("1 % 2", DiagnosticKind::InvalidToken, "%");
    assert_diagnostic("-1", DiagnosticKind::InvalidToken, "-1");
    assert_diagnostic("01 + 1", DiagnosticKind::InvalidToken, "01");
    assert_diagnostic("(1 + 2)", DiagnosticKind::InvalidToken, "2)");
}

#[test]
fn diagnostics_are_formatted() {
    assert_eq!(run("1 +")[0].to_string(),
               "[COMPILATION ERROR]: Invalid token => expected a number literal, got '+' on line 1");
    assert_eq!(run("1 2")[0].to_string(),
               "[COMPILATION ERROR]: Invalid token => expected an operation token, got '1' on line 1");
    assert_eq!(run("+ 1")[0].to_string(),
               "[COMPILATION ERROR]: Incomplete expression => expected a number literal, got '' on line 1");
}

#[test]
fn diagnostics_keep_their_line_numbers() {
    let results = compile("1 +\n\n2 * 2\n+ 1\nx");
    let lines: Vec<Option<usize>> = results.iter()
                                           .map(|result| match result {
                                               ParseResult::Diagnostic(d) => Some(d.line),
                                               ParseResult::Node(_) => None,
                                           })
                                           .collect();

    assert_eq!(lines, [Some(1), None, None, Some(4), Some(5)]);
}

#[test]
fn a_failing_line_does_not_affect_others() {
    let values = run("1 + 1\nnope\n2 * 2");

    assert_eq!(values[0], Value::from(2.0));
    assert!(matches!(values[1], Value::Message(_)));
    assert_eq!(values[2], Value::from(4.0));
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert_value("0 / 1", f64::INFINITY);
    assert!(run("0 / 0")[0].as_number().is_some_and(f64::is_nan));
}

#[test]
fn runs_are_idempotent() {
    let document = "1 + 2 * 3\n\n0 / 0\n+ 1\n2.5 - 7\nx y z";

    assert_eq!(run(document), run(document));
    assert_eq!(compile(document), compile(document));
}

#[test]
fn printable_forms_use_prefix_notation() {
    let printed: Vec<String> = compile("1 + 2 * 3\n\n2.50").iter()
                                                          .map(ToString::to_string)
                                                          .collect();

    assert_eq!(printed, ["+ * 3 2 1", "VOID", "2.50"]);
}

#[test]
fn long_lines_fit_in_a_small_stack() {
    const OPERATORS: usize = 1_000_000;

    let worker = std::thread::Builder::new().stack_size(256 * 1024)
                                            .spawn(|| {
                                                let line = format!("1{}", " + 1".repeat(OPERATORS));
                                                let results = compile(&line);
                                                let printed = results[0].to_string();
                                                (execute(&results), printed.len())
                                            })
                                            .expect("failed to spawn worker");
    let (values, printed_len) = worker.join().expect("worker overflowed its stack");

    #[allow(clippy::cast_precision_loss)]
    let expected = (OPERATORS + 1) as f64;
    assert_eq!(values, [Value::from(expected)]);
    assert_eq!(printed_len, 4 * OPERATORS + 1);
}
