use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, RuntimeScope},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `name` or `receiver.name`.
    ///
    /// Without a receiver the name is resolved through the scope chain. With
    /// one, the receiver is evaluated exactly once and the field is read from
    /// the resulting object.
    ///
    /// # Errors
    /// - `UndefinedVariable` if no scope declares the name.
    /// - `UndefinedField` if the receiver is not an object with that field.
    pub fn evaluate_access(&self,
                           receiver: Option<&Expr>,
                           name: &str,
                           scope: &Rc<RuntimeScope>,
                           position: usize)
                           -> EvalResult<Value> {
        let Some(receiver) = receiver else {
            return scope.lookup_variable(name)
                        .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                         position });
        };

        let field = match self.evaluate(receiver, scope)? {
            Value::Object(object) => object.field(name),
            _ => None,
        };
        field.ok_or_else(|| RuntimeError::UndefinedField { name: name.to_string(),
                                                           position })
    }
}
