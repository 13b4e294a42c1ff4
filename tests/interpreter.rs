use std::{cell::Cell, rc::Rc, str::FromStr};

use bigdecimal::BigDecimal;
use plc::{
    ast::{BinaryOperator, Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        builtins,
        evaluator::core::{Callable, Flow, Interpreter, NativeFn, RuntimeScope},
        lexer::tokenize,
        parser::{
            core::parse_expression,
            statement::parse_statement,
            stream::TokenStream,
        },
        scope::Scope,
        value::{
            core::Value,
            object::{Class, Object},
        },
    },
    parse_source,
};

fn parse_expr(source: &str) -> Expr {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse_expression(&mut TokenStream::new(&tokens)).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn parse_stmt(source: &str) -> Stmt {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse_statement(&mut TokenStream::new(&tokens)).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn evaluate(source: &str) -> Result<Value, RuntimeError> {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    interpreter.evaluate(&parse_expr(source), interpreter.globals())
}

fn decimal(text: &str) -> Value {
    Value::Decimal(BigDecimal::from_str(text).unwrap())
}

/// Globals whose `print` counts its calls instead of writing.
fn counting_globals() -> (Rc<RuntimeScope>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let print: NativeFn = Rc::new(move |_: &[Value], _: usize| {
        counter.set(counter.get() + 1);
        Ok(Value::Nil)
    });

    let globals = Scope::root();
    assert!(globals.define_function("print", 1, Callable::Native(print)));
    builtins::install_functions(&globals);
    (globals, calls)
}

fn point_class() -> Rc<Class> {
    let sum: NativeFn = Rc::new(|args: &[Value], position: usize| match args {
        [Value::Object(point)] => match (point.field("x"), point.field("y")) {
            (Some(Value::Integer(x)), Some(Value::Integer(y))) => Ok(Value::Integer(x + y)),
            _ => Err(RuntimeError::TypeMismatch { details: "non-integer coordinates".into(),
                                                  position }),
        },
        _ => Err(RuntimeError::TypeMismatch { details: "expected a point".into(),
                                              position }),
    });
    Rc::new(Class::new("Point").with_method("sum", 0, sum))
}

fn new_point(x: i64, y: i64) -> Value {
    Value::from(Object::new(point_class(), [("x", Value::from(x)), ("y", Value::from(y))]))
}

#[test]
fn arithmetic_follows_precedence_and_left_association() {
    assert_eq!(evaluate("1 + 2 * 3"), Ok(Value::from(7)));
    assert_eq!(evaluate("1 - 2 - 3"), Ok(Value::from(-4)));
    assert_eq!(evaluate("24 / 4 / 2"), Ok(Value::from(3)));
}

#[test]
fn integers_have_arbitrary_precision() {
    assert_eq!(evaluate("99999999999999999999 * 99999999999999999999").map(|v| v.to_string()),
               Ok("9999999999999999999800000000000000000001".to_string()));
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_eq!(evaluate("7 / 2"), Ok(Value::from(3)));
    assert_eq!(evaluate("(0 - 7) / 2"), Ok(Value::from(-3)));
}

#[test]
fn decimal_division_rounds_half_even_at_left_scale() {
    assert_eq!(evaluate("1.0 / 3.0"), Ok(decimal("0.3")));
    assert_eq!(evaluate("2.50 / 4.0"), Ok(decimal("0.62")));
    assert_eq!(evaluate("2.70 / 4.0"), Ok(decimal("0.68")));
    assert_eq!(evaluate("10.00 / 3.0").map(|v| v.to_string()), Ok("3.33".to_string()));
}

#[test]
fn division_by_zero_is_an_error_for_both_representations() {
    assert_eq!(evaluate("10 / 0"), Err(RuntimeError::DivisionByZero { position: 3 }));
    assert_eq!(evaluate("1.0 / 0.0"), Err(RuntimeError::DivisionByZero { position: 4 }));
}

#[test]
fn addition_concatenates_strings() {
    assert_eq!(evaluate("\"ab\" + \"cd\""), Ok(Value::from("abcd")));
    assert!(matches!(evaluate("\"ab\" + 1"), Err(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(evaluate("'a' + 'b'"), Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn mixed_representations_are_rejected() {
    for source in ["1 + 1.0", "1.0 - 1", "2 * 2.0", "TRUE + TRUE", "NIL / NIL"] {
        assert!(matches!(evaluate(source), Err(RuntimeError::TypeMismatch { .. })),
                "{source} was accepted");
    }
}

#[test]
fn comparisons_need_two_numbers_of_one_representation() {
    assert_eq!(evaluate("1 < 2"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("2.0 <= 2.00"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("3 > 3"), Ok(Value::Boolean(false)));
    assert_eq!(evaluate("3.5 >= 3.25"), Ok(Value::Boolean(true)));

    assert!(matches!(evaluate("1 < 1.0"), Err(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(evaluate("\"a\" < \"b\""), Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn equality_is_structural() {
    assert_eq!(evaluate("1 == 1"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("'a' == 'a'"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("\"a\" != \"b\""), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("NIL == NIL"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("1 == 1.0"), Ok(Value::Boolean(false)));
    assert_eq!(evaluate("1.0 == 1.00"), Ok(Value::Boolean(false)));
    assert_eq!(evaluate("1.50 == 1.50"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("1.0 != 1.00"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("1.0 >= 1.00"), Ok(Value::Boolean(true)));
    assert_eq!(evaluate("TRUE != 1"), Ok(Value::Boolean(true)));
}

#[test]
fn and_skips_right_operand_when_left_is_false() {
    let (globals, calls) = counting_globals();
    let interpreter = Interpreter::new(globals);

    let result = interpreter.evaluate(&parse_expr("FALSE AND print(1)"), interpreter.globals());

    assert_eq!(result, Ok(Value::Boolean(false)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_skips_right_operand_when_left_is_true() {
    let (globals, calls) = counting_globals();
    let interpreter = Interpreter::new(globals);

    let result = interpreter.evaluate(&parse_expr("TRUE OR print(1)"), interpreter.globals());

    assert_eq!(result, Ok(Value::Boolean(true)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn logical_operators_evaluate_right_operand_when_needed() {
    let (globals, calls) = counting_globals();
    let interpreter = Interpreter::new(globals);

    let result = interpreter.evaluate(&parse_expr("TRUE AND print(1)"), interpreter.globals());

    assert!(matches!(result, Err(RuntimeError::TypeMismatch { .. })));
    assert_eq!(calls.get(), 1);
    assert_eq!(interpreter.evaluate(&parse_expr("FALSE OR TRUE"), interpreter.globals()),
               Ok(Value::Boolean(true)));
}

#[test]
fn logical_operands_must_be_boolean() {
    assert!(matches!(evaluate("1 AND TRUE"), Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn declarations_bind_in_the_given_scope_only() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let block = Scope::child(interpreter.globals());

    assert_eq!(interpreter.execute(&parse_stmt("LET x = 5;"), &block), Ok(Flow::Completed));
    assert_eq!(interpreter.execute(&parse_stmt("LET y;"), &block), Ok(Flow::Completed));

    assert_eq!(block.lookup_variable("x"), Some(Value::from(5)));
    assert_eq!(block.lookup_variable("y"), Some(Value::Nil));
    assert_eq!(interpreter.globals().lookup_variable("x"), None);

    assert!(matches!(interpreter.execute(&parse_stmt("LET x = 6;"), &block),
                     Err(RuntimeError::AlreadyDefined { .. })));
}

#[test]
fn assignment_updates_the_nearest_binding() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    assert!(interpreter.globals().define_variable("x", Value::from(1)));
    let block = Scope::child(interpreter.globals());

    interpreter.execute(&parse_stmt("x = x + 1;"), &block).unwrap();

    assert_eq!(interpreter.globals().lookup_variable("x"), Some(Value::from(2)));
}

#[test]
fn assigning_an_undeclared_name_does_not_create_it() {
    let interpreter = Interpreter::new(builtins::runtime_globals());

    let result = interpreter.execute(&parse_stmt("y = 1;"), interpreter.globals());

    assert_eq!(result,
               Err(RuntimeError::UndefinedVariable { name:     "y".into(),
                                                     position: 0, }));
    assert_eq!(interpreter.globals().lookup_variable("y"), None);
}

#[test]
fn assignment_target_must_be_an_access() {
    let interpreter = Interpreter::new(builtins::runtime_globals());

    assert_eq!(interpreter.execute(&parse_stmt("1 = 2;"), interpreter.globals()),
               Err(RuntimeError::InvalidAssignmentTarget { position: 0 }));
}

#[test]
fn loop_variables_do_not_outlive_the_loop() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let scope = Scope::child(interpreter.globals());

    let flow = interpreter.execute(&parse_stmt("FOR i IN range(0, 3) DO LET seen = i; END"), &scope);

    assert_eq!(flow, Ok(Flow::Completed));
    assert_eq!(scope.lookup_variable("i"), None);
    assert_eq!(scope.lookup_variable("seen"), None);
}

#[test]
fn for_iterates_half_open_range_in_order() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    assert!(interpreter.globals().define_variable("digits", Value::from("")));

    interpreter.execute(&parse_stmt("FOR i IN range(3, 6) DO digits = digits + \"x\"; END"),
                        interpreter.globals())
               .unwrap();
    interpreter.execute(&parse_stmt("FOR i IN range(6, 3) DO digits = digits + \"y\"; END"),
                        interpreter.globals())
               .unwrap();

    assert_eq!(interpreter.globals().lookup_variable("digits"), Some(Value::from("xxx")));
}

#[test]
fn for_requires_an_integer_range() {
    let interpreter = Interpreter::new(builtins::runtime_globals());

    let result = interpreter.execute(&parse_stmt("FOR i IN 3 DO print(i); END"),
                                     interpreter.globals());

    assert!(matches!(result, Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn return_propagates_through_loops_and_branches() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let statement = parse_stmt("WHILE TRUE DO FOR i IN range(0, 10) DO IF i == 4 DO RETURN i * 10; \
                                END END END");

    let flow = interpreter.execute(&statement, interpreter.globals());

    assert_eq!(flow, Ok(Flow::Returned(Value::from(40))));
}

#[test]
fn conditions_must_be_boolean() {
    let interpreter = Interpreter::new(builtins::runtime_globals());

    let result = interpreter.execute(&parse_stmt("IF 1 DO END"), interpreter.globals());

    assert!(matches!(result, Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn program_runs_fields_then_main() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let source = parse_source("LET a = 2; LET b = a * 3; DEF main() DO RETURN b; END").unwrap();

    assert_eq!(interpreter.run(&source), Ok(Value::from(6)));
}

#[test]
fn method_without_return_yields_nil() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let source = parse_source("DEF f() DO LET x = 1; END DEF main() DO RETURN f(); END").unwrap();

    assert_eq!(interpreter.run(&source), Ok(Value::Nil));
}

#[test]
fn methods_see_globals_but_not_caller_locals() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let source = parse_source("LET g = 1; \
                               DEF peek() DO RETURN local; END \
                               DEF main() DO LET local = 2; RETURN peek(); END")
        .unwrap();

    assert!(matches!(interpreter.run(&source),
                     Err(RuntimeError::UndefinedVariable { ref name, .. }) if name == "local"));
}

#[test]
fn missing_main_is_an_undefined_function() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let source = parse_source("DEF helper() DO END").unwrap();

    assert!(matches!(interpreter.run(&source),
                     Err(RuntimeError::UndefinedFunction { arity: 0, .. })));
}

#[test]
fn methods_are_overloaded_by_arity() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let source = parse_source("DEF f() DO RETURN 1; END \
                               DEF f(x) DO RETURN x + 1; END \
                               DEF main() DO RETURN f() + f(10); END")
        .unwrap();

    assert_eq!(interpreter.run(&source), Ok(Value::from(12)));
}

#[test]
fn invoking_a_method_with_wrong_argument_count_fails() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    let source = parse_source("DEF f(x) DO RETURN x; END").unwrap();
    let callable = Callable::Method(Rc::new(source.methods[0].clone()));

    assert_eq!(interpreter.invoke(&callable, "f", &[], 9),
               Err(RuntimeError::ArgumentCountMismatch { name:     "f".into(),
                                                         expected: 1,
                                                         found:    0,
                                                         position: 9, }));
    assert_eq!(interpreter.invoke(&callable, "f", &[Value::from('c')], 9),
               Ok(Value::from('c')));
}

#[test]
fn native_builtins_check_their_arguments() {
    let globals = builtins::runtime_globals();
    let interpreter = Interpreter::new(Rc::clone(&globals));
    let range = globals.lookup_function("range", 2).unwrap();
    let print = globals.lookup_function("print", 1).unwrap();

    assert!(matches!(interpreter.invoke(&range, "range", &[Value::from(1), Value::from("2")], 0),
                     Err(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(interpreter.invoke(&print, "print", &[], 0),
                     Err(RuntimeError::ArgumentCountMismatch { .. })));
}

#[test]
fn object_fields_are_read_and_assigned_through_receivers() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    assert!(interpreter.globals().define_variable("p", new_point(1, 2)));
    let source = parse_source("DEF main() DO p.x = p.x + 10; RETURN p.sum(); END").unwrap();

    assert_eq!(interpreter.run(&source), Ok(Value::from(13)));
    assert_eq!(interpreter.evaluate(&parse_expr("p.x"), interpreter.globals()),
               Ok(Value::from(11)));
}

#[test]
fn receiver_is_evaluated_exactly_once() {
    let point = new_point(0, 0);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let make: NativeFn = Rc::new(move |_: &[Value], _: usize| {
        counter.set(counter.get() + 1);
        Ok(point.clone())
    });

    let interpreter = Interpreter::new(builtins::runtime_globals());
    assert!(interpreter.globals().define_function("make", 0, Callable::Native(make)));

    interpreter.execute(&parse_stmt("make().y = 7;"), interpreter.globals()).unwrap();
    assert_eq!(calls.get(), 1);

    let y = interpreter.evaluate(&parse_expr("make().y"), interpreter.globals());
    assert_eq!(y, Ok(Value::from(7)));
    assert_eq!(calls.get(), 2);

    let sum = interpreter.evaluate(&parse_expr("make().sum()"), interpreter.globals());
    assert_eq!(sum, Ok(Value::from(7)));
    assert_eq!(calls.get(), 3);
}

#[test]
fn missing_members_are_reported() {
    let interpreter = Interpreter::new(builtins::runtime_globals());
    assert!(interpreter.globals().define_variable("p", new_point(1, 2)));

    let missing_field = interpreter.execute(&parse_stmt("p.z = 1;"), interpreter.globals());
    assert!(matches!(missing_field, Err(RuntimeError::UndefinedField { .. })));

    let missing_method = interpreter.evaluate(&parse_expr("p.sum(1)"), interpreter.globals());
    assert!(matches!(missing_method, Err(RuntimeError::UndefinedFunction { arity: 1, .. })));

    let not_an_object = interpreter.evaluate(&parse_expr("1.x"), interpreter.globals());
    assert!(matches!(not_an_object, Err(RuntimeError::UndefinedField { .. })));
}

#[test]
fn values_display_in_source_form() {
    assert_eq!(Value::Nil.to_string(), "NIL");
    assert_eq!(Value::Boolean(true).to_string(), "TRUE");
    assert_eq!(Value::from('c').to_string(), "c");
    assert_eq!(decimal("1.50").to_string(), "1.50");
    assert_eq!(new_point(1, 2).to_string(), "Point { x: 1, y: 2 }");
}

#[test]
fn decimals_display_without_exponents() {
    assert_eq!(decimal("0.0000001").to_string(), "0.0000001");
    assert_eq!(decimal("1000000000000000000000.0").to_string(), "1000000000000000000000.0");
    assert_eq!(decimal("-0.000000025").to_string(), "-0.000000025");

    let tiny = evaluate("0.0000001 * 1.0").map(|v| v.to_string());
    assert!(tiny.as_deref().is_ok_and(|text| text.starts_with("0.0000001") && !text.contains(['e', 'E'])),
            "{tiny:?}");
    let huge = evaluate("1000000000000000000000.0 * 1.0").map(|v| v.to_string());
    assert!(huge.as_deref()
                .is_ok_and(|text| text.starts_with("1000000000000000000000.") && !text.contains(['e', 'E'])),
            "{huge:?}");
}

#[test]
fn logical_operators_need_the_short_circuit_path() {
    let result = Interpreter::apply_binary(BinaryOperator::Or, &Value::Boolean(true), &Value::Nil, 3);

    assert!(matches!(result, Err(RuntimeError::TypeMismatch { position: 3, .. })));
    assert_eq!(evaluate("TRUE OR NIL"), Ok(Value::Boolean(true)));
}

#[test]
fn scopes_nest_through_parent_links() {
    let globals = builtins::runtime_globals();
    let block = Scope::child(&globals);
    let inner = Scope::child(&block);

    assert_eq!(globals.depth(), 0);
    assert_eq!(inner.depth(), 2);
    assert!(globals.parent().is_none());
    assert!(inner.parent().is_some_and(|parent| Rc::ptr_eq(parent, &block)));

    assert!(inner.lookup_function("print", 1).is_some());
    assert!(inner.define_variable("x", Value::from(1)));
    assert!(!inner.define_variable("x", Value::from(2)));
    assert!(block.define_variable("x", Value::from(3)));
    assert!(inner.assign_variable("x", Value::from(4)));
    assert_eq!(block.lookup_variable("x"), Some(Value::from(3)));
    assert_eq!(inner.lookup_variable("x"), Some(Value::from(4)));
}
