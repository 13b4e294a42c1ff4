use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, RuntimeScope},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary expression.
    ///
    /// `AND` and `OR` are routed to `evaluate_logic`, which decides whether
    /// the right operand runs at all. Every other operator evaluates both
    /// operands left to right and applies `apply_binary`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    /// - `scope`: Scope the operands are evaluated in.
    /// - `position`: Byte offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub fn evaluate_binary(&self,
                           op: BinaryOperator,
                           left: &Expr,
                           right: &Expr,
                           scope: &Rc<RuntimeScope>,
                           position: usize)
                           -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.evaluate_logic(op, left, right, scope);
        }

        let left = self.evaluate(left, scope)?;
        let right = self.evaluate(right, scope)?;
        Self::apply_binary(op, &left, &right, position)
    }

    /// Applies a non-logical binary operator to two evaluated values.
    ///
    /// `AND` and `OR` are not accepted here; they only exist in their
    /// short-circuiting form in `evaluate_logic`.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = Interpreter::apply_binary(BinaryOperator::Add, &Value::from(3), &Value::from(4), 0);
    /// assert_eq!(sum.unwrap(), Value::from(7));
    ///
    /// let text = Interpreter::apply_binary(BinaryOperator::Add,
    ///                                      &Value::from("ab"),
    ///                                      &Value::from("cd"),
    ///                                      0);
    /// assert_eq!(text.unwrap(), Value::from("abcd"));
    ///
    /// let both = Interpreter::apply_binary(BinaryOperator::And,
    ///                                      &Value::from(true),
    ///                                      &Value::from(true),
    ///                                      0);
    /// assert!(both.is_err());
    /// ```
    pub fn apply_binary(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        position: usize)
                        -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            And | Or => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to evaluated \
                                                                   operands"),
                                                 position })
            },
            Equal => Ok(Value::Boolean(left == right)),
            NotEqual => Ok(Value::Boolean(left != right)),
            Less | LessEqual | Greater | GreaterEqual => {
                Self::evaluate_comparison(op, left, right, position)
            },
            Add | Sub | Mul | Div => Self::evaluate_arithmetic(op, left, right, position),
        }
    }
}
