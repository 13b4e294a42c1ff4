use std::rc::Rc;

use num_bigint::BigInt;

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter, RuntimeScope},
        scope::Scope,
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes `FOR name IN value DO ... END`.
    ///
    /// The iterable is evaluated once. For each element a fresh child scope
    /// is created, the loop variable is bound in it, and the body runs there.
    /// The loop variable is therefore rebound rather than mutated, and it is
    /// not visible once the loop ends.
    ///
    /// A `RETURN` inside the body stops the loop and propagates outward.
    ///
    /// # Parameters
    /// - `name`: The loop variable.
    /// - `value`: The iterable expression.
    /// - `statements`: The loop body.
    /// - `scope`: The scope the loop statement runs in.
    /// - `position`: Byte offset of the loop for error reporting.
    ///
    /// # Errors
    /// `TypeMismatch` if the iterable is not an integer range, or any error
    /// raised by the body.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     interpreter::{builtins, evaluator::core::Interpreter, value::core::Value},
    ///     parse_source,
    /// };
    ///
    /// let source = parse_source("DEF main() DO \
    ///                               LET total = 0; \
    ///                               FOR i IN range(1, 5) DO total = total + i; END \
    ///                               RETURN total; \
    ///                            END")
    ///     .unwrap();
    ///
    /// let interpreter = Interpreter::new(builtins::runtime_globals());
    /// assert_eq!(interpreter.run(&source).unwrap(), Value::from(10));
    /// ```
    pub fn execute_for(&self,
                       name: &str,
                       value: &Expr,
                       statements: &[Stmt],
                       scope: &Rc<RuntimeScope>,
                       position: usize)
                       -> EvalResult<Flow> {
        let (start, end) = match self.evaluate(value, scope)? {
            Value::Range { start, end } => (start, end),
            other => {
                return Err(RuntimeError::TypeMismatch { details: format!("FOR expects \
                                                                          IntegerIterable, \
                                                                          received {}",
                                                                         other.type_name()),
                                                        position: value.position, });
            },
        };

        let mut current = start;
        while current < end {
            let body_scope = Scope::child(scope);
            if !body_scope.define_variable(name, Value::Integer(current.clone())) {
                return Err(RuntimeError::AlreadyDefined { name: name.to_string(),
                                                          position });
            }

            if let Flow::Returned(value) = self.execute_statements(statements, &body_scope)? {
                return Ok(Flow::Returned(value));
            }

            current += BigInt::from(1u8);
        }

        Ok(Flow::Completed)
    }
}
