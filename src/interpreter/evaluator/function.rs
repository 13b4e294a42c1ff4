use std::rc::Rc;

use log::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Callable, EvalResult, Flow, Interpreter, RuntimeScope},
        scope::Scope,
        value::core::Value,
    },
};

/// Checks that a function received exactly `expected` arguments.
///
/// # Errors
/// `ArgumentCountMismatch` naming the function otherwise.
///
/// # Example
/// ```
/// use plc::{interpreter::evaluator::function::check_arity, interpreter::value::core::Value};
///
/// assert!(check_arity("print", &[Value::Nil], 1, 0).is_ok());
/// assert!(check_arity("print", &[], 1, 0).is_err());
/// ```
pub fn check_arity(name: &str, args: &[Value], expected: usize, position: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected,
                                                  found: args.len(),
                                                  position })
    }
}

impl Interpreter {
    /// Evaluates `name(arguments)` or `receiver.name(arguments)`.
    ///
    /// A free call resolves `(name, arity)` through the scope chain, then
    /// evaluates the arguments left to right and invokes the target. A
    /// receiver call evaluates the receiver once, resolves the method on the
    /// receiver's class, evaluates the arguments and invokes the method with
    /// the receiver as its first argument.
    ///
    /// # Errors
    /// `UndefinedFunction` if nothing matches the name and arity, or any error
    /// raised by the arguments or the invoked function.
    pub fn evaluate_call(&self,
                         receiver: Option<&Expr>,
                         name: &str,
                         arguments: &[Expr],
                         scope: &Rc<RuntimeScope>,
                         position: usize)
                         -> EvalResult<Value> {
        let undefined = || RuntimeError::UndefinedFunction { name: name.to_string(),
                                                             arity: arguments.len(),
                                                             position };

        let Some(receiver) = receiver else {
            let callable = scope.lookup_function(name, arguments.len())
                                .ok_or_else(undefined)?;
            let args = self.evaluate_arguments(arguments, scope)?;
            return self.invoke(&callable, name, &args, position);
        };

        let receiver = self.evaluate(receiver, scope)?;
        let method = match &receiver {
            Value::Object(object) => object.method(name, arguments.len()),
            _ => None,
        }.ok_or_else(undefined)?;

        let mut args = Vec::with_capacity(arguments.len() + 1);
        args.push(receiver);
        args.extend(self.evaluate_arguments(arguments, scope)?);
        method(&args, position)
    }

    /// Evaluates call arguments from left to right.
    ///
    /// # Errors
    /// The first error raised by an argument.
    pub fn evaluate_arguments(&self,
                              arguments: &[Expr],
                              scope: &Rc<RuntimeScope>)
                              -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|argument| self.evaluate(argument, scope))
                 .collect()
    }

    /// Invokes a callable with already evaluated arguments.
    ///
    /// A program method runs in a fresh child of the global scope holding its
    /// parameters. A `RETURN` anywhere in its body becomes the result; a body
    /// that completes without one yields `NIL`.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if the argument count differs from the
    /// method's, or any error raised by the body.
    pub fn invoke(&self,
                  callable: &Callable,
                  name: &str,
                  args: &[Value],
                  position: usize)
                  -> EvalResult<Value> {
        let method = match callable {
            Callable::Native(function) => return function(args, position),
            Callable::Method(method) => method,
        };

        check_arity(name, args, method.arity(), position)?;
        debug!("invoking method {name} with {} argument(s)", args.len());

        let call_scope = Scope::child(self.globals());
        for (parameter, arg) in method.parameters.iter().zip(args) {
            if !call_scope.define_variable(&parameter.name, arg.clone()) {
                return Err(RuntimeError::AlreadyDefined { name: parameter.name.clone(),
                                                          position: method.position, });
            }
        }

        match self.execute_statements(&method.statements, &call_scope)? {
            Flow::Returned(value) => Ok(value),
            Flow::Completed => Ok(Value::Nil),
        }
    }
}
