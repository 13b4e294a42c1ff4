use std::fs;

use plc::{
    error::{AnalysisError, Error, RuntimeError},
    interpreter::value::core::Value,
    run_source,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_produce_expected_results() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "plc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_result(&content).unwrap_or_else(|| {
                                                     panic!("{path:?} has no '// expect:' header")
                                                 });

        count += 1;
        match run_source(&content, true) {
            Ok(value) => assert_eq!(value.to_string(), expected, "wrong result for {path:?}"),
            Err(e) => panic!("Program {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn expected_result(content: &str) -> Option<String> {
    content.lines()
           .find_map(|line| line.trim().strip_prefix("// expect:"))
           .map(|expected| expected.trim().to_string())
}

fn result_of(src: &str) -> Value {
    run_source(src, true).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn unchecked_result_of(src: &str) -> Value {
    run_source(src, false).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn assert_result(src: &str, expected: i64) {
    assert_eq!(result_of(src), Value::from(expected), "wrong result for:\n{src}");
}

fn failure_of(src: &str, analyze: bool) -> Error {
    match run_source(src, analyze) {
        Ok(value) => panic!("Program succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn fields_are_visible_in_main() {
    assert_result("LET x = 1; DEF main(): Integer DO RETURN x; END", 1);
    assert_result("LET a: Integer = 2; LET b = a * 3; DEF main(): Integer DO RETURN b; END",
                  6);
}

#[test]
fn arithmetic_associates_left() {
    assert_result("DEF main(): Integer DO RETURN 1 - 2 - 3; END", -4);
    assert_result("DEF main(): Integer DO RETURN 24 / 4 / 2; END", 3);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_result("DEF main(): Integer DO RETURN 1 + 2 * 3; END", 7);
    assert_result("DEF main(): Integer DO RETURN (1 + 2) * 3; END", 9);
}

#[test]
fn integer_division_truncates() {
    assert_result("DEF main(): Integer DO RETURN (0 - 7) / 2; END", -3);
}

#[test]
fn division_by_zero_fails_at_runtime() {
    let integer = failure_of("DEF main(): Integer DO RETURN 1 / 0; END", true);
    assert!(matches!(integer, Error::Runtime(RuntimeError::DivisionByZero { .. })));

    let decimal = failure_of("DEF main(): Integer DO LET q = 1.0 / 0.0; RETURN 0; END", true);
    assert!(matches!(decimal, Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn decimal_division_keeps_left_scale() {
    let value = unchecked_result_of("DEF main() DO RETURN 2.50 / 4.0; END");
    assert_eq!(value.to_string(), "0.62");
}

#[test]
fn strings_concatenate() {
    let value = unchecked_result_of("LET greeting = \"Hello\"; \
                                     DEF main() DO RETURN greeting + \", \" + \"World\"; END");
    assert_eq!(value, Value::from("Hello, World"));
}

#[test]
fn loops_accumulate() {
    assert_result("DEF main(): Integer DO \
                       LET total = 0; \
                       LET i = 0; \
                       WHILE i < 5 DO total = total + i; i = i + 1; END \
                       RETURN total; \
                   END",
                  10);
    assert_result("DEF main(): Integer DO \
                       LET total = 0; \
                       FOR i IN range(1, 11) DO total = total + i; END \
                       RETURN total; \
                   END",
                  55);
}

#[test]
fn return_leaves_nested_loops() {
    assert_result("DEF find(): Integer DO \
                       FOR i IN range(0, 10) DO \
                           FOR j IN range(0, 10) DO \
                               IF i * j == 6 DO RETURN i; END \
                           END \
                       END \
                       RETURN 0 - 1; \
                   END \
                   DEF main(): Integer DO RETURN find(); END",
                  1);
    assert_result("DEF main(): Integer DO \
                       LET i = 0; \
                       WHILE TRUE DO \
                           i = i + 1; \
                           IF i == 3 DO RETURN i; END \
                       END \
                       RETURN 0; \
                   END",
                  3);
}

#[test]
fn recursion_with_big_integers() {
    let value = result_of("DEF fact(n: Integer): Integer DO \
                               IF n <= 1 DO RETURN 1; END \
                               RETURN n * fact(n - 1); \
                           END \
                           DEF main(): Integer DO RETURN fact(25); END");
    assert_eq!(value.to_string(), "15511210043330985984000000");
}

#[test]
fn method_without_return_yields_nil() {
    let value = unchecked_result_of("DEF nothing() DO LET x = 1; END \
                                     DEF main() DO RETURN nothing(); END");
    assert_eq!(value, Value::Nil);
    assert_eq!(value.to_string(), "NIL");
}

#[test]
fn assigning_undeclared_name_fails_at_both_stages() {
    let src = "DEF main(): Integer DO y = 1; RETURN 0; END";

    assert!(matches!(failure_of(src, true),
                     Error::Analysis(AnalysisError::UndefinedVariable { .. })));
    assert!(matches!(failure_of(src, false),
                     Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn loop_variable_is_not_visible_after_loop() {
    let src = "DEF main(): Integer DO FOR i IN range(0, 3) DO print(i); END RETURN i; END";

    assert!(matches!(failure_of(src, true),
                     Error::Analysis(AnalysisError::UndefinedVariable { .. })));
    assert!(matches!(failure_of(src, false),
                     Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn inner_blocks_shadow_outer_names() {
    assert_result("LET x = 1; \
                   DEF main(): Integer DO \
                       LET x = 2; \
                       IF TRUE DO LET x = 3; END \
                       RETURN x; \
                   END",
                  2);
}

#[test]
fn fields_initialize_in_declaration_order() {
    assert_result("LET a = 1; LET b = a + 2; LET c = a + b + 2; \
                   DEF main(): Integer DO RETURN c; END",
                  6);

    let forward = failure_of("LET a = b; LET b = 1; DEF main(): Integer DO RETURN a; END", true);
    assert!(matches!(forward, Error::Analysis(AnalysisError::UndefinedVariable { .. })));
}

#[test]
fn methods_mutate_fields() {
    assert_result("LET counter = 0; \
                   DEF bump() DO counter = counter + 1; END \
                   DEF main(): Integer DO bump(); bump(); RETURN counter; END",
                  2);
}

#[test]
fn analysis_rejects_before_anything_runs() {
    let src = "DEF main(): Integer DO print(1); RETURN \"x\"; END";

    assert!(matches!(failure_of(src, true), Error::Analysis(_)));
}

#[test]
fn main_that_can_finish_without_return_is_rejected() {
    for src in ["DEF main(): Integer DO END",
                "DEF main() DO IF FALSE DO RETURN 1; END END",
                "DEF main(): Integer DO IF FALSE DO RETURN 1; END END"]
    {
        assert!(matches!(failure_of(src, true), Error::Analysis(_)), "{src} was accepted");
        assert_eq!(unchecked_result_of(src), Value::Nil);
    }
}

#[test]
fn decimal_equality_respects_scale() {
    assert_eq!(unchecked_result_of("DEF main() DO RETURN 1.0 == 1.00; END"),
               Value::Boolean(false));
    assert_eq!(unchecked_result_of("DEF main() DO RETURN 2.50 / 4.0 == 0.62; END"),
               Value::Boolean(true));
}

#[test]
fn syntax_errors_are_reported() {
    assert!(matches!(failure_of("DEF main() DO RETURN 1 END", true), Error::Parse(_)));
    assert!(matches!(failure_of("DEF main() DO RETURN 1 @ 2; END", false), Error::Lex(_)));
}
