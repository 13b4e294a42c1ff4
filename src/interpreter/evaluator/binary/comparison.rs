use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `<`, `<=`, `>` or `>=`.
    ///
    /// Both operands must be integers or both decimals; they are compared by
    /// their exact value, so `1.0 < 1.00` is `FALSE`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `position`: Byte offset used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::evaluate_comparison(BinaryOperator::Less,
    ///                                               &Value::from(3),
    ///                                               &Value::from(5),
    ///                                               0);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    ///
    /// let mixed = Interpreter::evaluate_comparison(BinaryOperator::Less,
    ///                                              &Value::from(3),
    ///                                              &Value::from("5"),
    ///                                              0);
    /// assert!(mixed.is_err());
    /// ```
    pub fn evaluate_comparison(op: BinaryOperator,
                               left: &Value,
                               right: &Value,
                               position: usize)
                               -> EvalResult<Value> {
        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot compare {} \
                                                                          and {} with '{op}'",
                                                                         left.type_name(),
                                                                         right.type_name()),
                                                        position });
            },
        };

        Ok(Value::Boolean(match op {
                              BinaryOperator::Less => ordering == Ordering::Less,
                              BinaryOperator::LessEqual => ordering != Ordering::Greater,
                              BinaryOperator::Greater => ordering == Ordering::Greater,
                              BinaryOperator::GreaterEqual => ordering != Ordering::Less,
                              _ => {
                                  return Err(RuntimeError::TypeMismatch { details:
                                                                              format!("'{op}' is \
                                                                                       not a \
                                                                                       comparison"),
                                                                          position });
                              },
                          }))
    }
}
