use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        analyzer::core::StaticScope,
        evaluator::{
            core::{Callable, RuntimeScope},
            function::check_arity,
        },
        scope::Scope,
        types::{Function, Type},
        value::core::Value,
    },
};

/// Declares the signatures of the built-in functions in a static scope.
///
/// - `print(Any): Nil`
/// - `range(Integer, Integer): IntegerIterable`
///
/// A function the host already defined in `scope` with the same name and
/// arity is kept.
pub fn install_signatures(scope: &StaticScope) {
    let signatures = [Function::new("print", vec![Type::any()], Type::nil()),
                      Function::new("range",
                                    vec![Type::integer(), Type::integer()],
                                    Type::integer_iterable())];

    for signature in signatures {
        let (name, arity) = (signature.name.clone(), signature.arity());
        let _ = scope.define_function(&name, arity, signature);
    }
}

/// Defines the built-in functions in a runtime scope.
///
/// `print` writes the display form of its argument and a newline to stdout.
/// `range(start, end)` yields the integers from `start` up to, but not
/// including, `end`.
///
/// A function the host already defined in `scope` with the same name and
/// arity is kept.
pub fn install_functions(scope: &RuntimeScope) {
    let _ = scope.define_function("print", 1, Callable::Native(Rc::new(print)));
    let _ = scope.define_function("range", 2, Callable::Native(Rc::new(range)));
}

/// A fresh static global scope holding the built-in signatures.
#[must_use]
pub fn static_globals() -> Rc<StaticScope> {
    let scope = Scope::root();
    install_signatures(&scope);
    scope
}

/// A fresh runtime global scope holding the built-in functions.
///
/// # Example
/// ```
/// use plc::interpreter::builtins::runtime_globals;
///
/// let globals = runtime_globals();
/// assert!(globals.lookup_function("print", 1).is_some());
/// assert!(globals.lookup_function("print", 2).is_none());
/// ```
#[must_use]
pub fn runtime_globals() -> Rc<RuntimeScope> {
    let scope = Scope::root();
    install_functions(&scope);
    scope
}

fn print(args: &[Value], position: usize) -> Result<Value, RuntimeError> {
    check_arity("print", args, 1, position)?;
    for value in args {
        println!("{value}");
    }
    Ok(Value::Nil)
}

fn range(args: &[Value], position: usize) -> Result<Value, RuntimeError> {
    check_arity("range", args, 2, position)?;
    match args {
        [Value::Integer(start), Value::Integer(end)] => Ok(Value::Range { start: start.clone(),
                                                                          end:   end.clone(), }),
        _ => {
            let found: Vec<_> = args.iter().map(Value::type_name).collect();
            Err(RuntimeError::TypeMismatch { details: format!("range expects (Integer, \
                                                               Integer), received ({})",
                                                              found.join(", ")),
                                             position })
        },
    }
}
