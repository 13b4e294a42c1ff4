use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, RuntimeScope},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `left AND right` or `left OR right` with short-circuiting.
    ///
    /// `AND` evaluates `right` only when `left` is `TRUE`; `OR` only when
    /// `left` is `FALSE`. Both operands must be booleans.
    ///
    /// # Errors
    /// `TypeMismatch` if an evaluated operand is not a boolean.
    pub fn evaluate_logic(&self,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr,
                          scope: &Rc<RuntimeScope>)
                          -> EvalResult<Value> {
        let decided_by_left = op == BinaryOperator::Or;

        if self.evaluate(left, scope)?.as_bool(left.position)? == decided_by_left {
            return Ok(Value::Boolean(decided_by_left));
        }

        Ok(Value::Boolean(self.evaluate(right, scope)?.as_bool(right.position)?))
    }
}
