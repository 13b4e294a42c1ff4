use std::rc::Rc;

use crate::{
    ast::{Expr, ExprKind, Stmt},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter, RuntimeScope},
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes `LET name [= value];`.
    ///
    /// Binds `name` in the current scope to the initializer's value, or to
    /// `NIL` when there is none.
    ///
    /// # Errors
    /// `AlreadyDefined` if the current scope already binds `name`, or any
    /// error raised by the initializer.
    pub fn execute_declaration(&self,
                               name: &str,
                               value: Option<&Expr>,
                               scope: &Rc<RuntimeScope>,
                               position: usize)
                               -> EvalResult<Flow> {
        let value = match value {
            Some(expr) => self.evaluate(expr, scope)?,
            None => Value::Nil,
        };

        if !scope.define_variable(name, value) {
            return Err(RuntimeError::AlreadyDefined { name: name.to_string(),
                                                      position });
        }
        Ok(Flow::Completed)
    }

    /// Executes `target = value;`.
    ///
    /// A bare name is rebound in the nearest scope that declares it; it is
    /// never created. A `receiver.name` target evaluates the receiver exactly
    /// once and replaces the field on the resulting object.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the target is not an access.
    /// - `UndefinedVariable` if no scope declares the name.
    /// - `UndefinedField` if the receiver has no such field.
    pub fn execute_assignment(&self,
                              target: &Expr,
                              value: &Expr,
                              scope: &Rc<RuntimeScope>,
                              position: usize)
                              -> EvalResult<Flow> {
        let ExprKind::Access { receiver, name, .. } = &target.kind else {
            return Err(RuntimeError::InvalidAssignmentTarget { position: target.position });
        };

        if let Some(receiver) = receiver {
            let object = self.evaluate(receiver, scope)?;
            let value = self.evaluate(value, scope)?;
            Self::assign_field(&object, name, value, target.position)?;
        } else {
            let value = self.evaluate(value, scope)?;
            if !scope.assign_variable(name, value) {
                return Err(RuntimeError::UndefinedVariable { name: name.clone(),
                                                             position });
            }
        }
        Ok(Flow::Completed)
    }

    /// Replaces field `name` of an already evaluated receiver.
    ///
    /// # Errors
    /// `UndefinedField` if the receiver is not an object or lacks the field.
    pub fn assign_field(receiver: &Value, name: &str, value: Value, position: usize) -> EvalResult<()> {
        let assigned = match receiver {
            Value::Object(object) => object.set_field(name, value),
            _ => false,
        };

        if assigned {
            Ok(())
        } else {
            Err(RuntimeError::UndefinedField { name: name.to_string(),
                                               position })
        }
    }

    /// Executes `IF condition DO ... ELSE ... END`.
    ///
    /// The chosen branch runs in its own child scope.
    ///
    /// # Errors
    /// `TypeMismatch` if the condition is not a boolean, or any error raised
    /// by the branch.
    pub fn execute_if(&self,
                      condition: &Expr,
                      then_statements: &[Stmt],
                      else_statements: &[Stmt],
                      scope: &Rc<RuntimeScope>)
                      -> EvalResult<Flow> {
        if self.evaluate(condition, scope)?.as_bool(condition.position)? {
            self.execute_block(then_statements, scope)
        } else {
            self.execute_block(else_statements, scope)
        }
    }

    /// Executes `WHILE condition DO ... END`.
    ///
    /// The condition is re-evaluated before every iteration, and every
    /// iteration gets a fresh child scope.
    ///
    /// # Errors
    /// `TypeMismatch` if the condition is not a boolean, or any error raised
    /// by the body.
    pub fn execute_while(&self,
                         condition: &Expr,
                         statements: &[Stmt],
                         scope: &Rc<RuntimeScope>)
                         -> EvalResult<Flow> {
        while self.evaluate(condition, scope)?.as_bool(condition.position)? {
            if let Flow::Returned(value) = self.execute_block(statements, scope)? {
                return Ok(Flow::Returned(value));
            }
        }
        Ok(Flow::Completed)
    }
}
