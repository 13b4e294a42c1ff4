use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::divide_decimal,
};

impl Interpreter {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// Both operands must share one representation:
    /// - `+` concatenates strings and adds integers or decimals.
    /// - `-`, `*` and `/` accept integers or decimals only.
    ///
    /// Integer division truncates toward zero. Decimal division keeps the
    /// scale of the left operand and rounds half to even, so `1.0 / 3.0` is
    /// `0.3`.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor of `/` is zero.
    /// - `TypeMismatch` for any other combination of operands.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let q = Interpreter::evaluate_arithmetic(BinaryOperator::Div,
    ///                                          &Value::from(-7),
    ///                                          &Value::from(2),
    ///                                          0);
    /// assert_eq!(q.unwrap(), Value::from(-3));
    ///
    /// let zero = Interpreter::evaluate_arithmetic(BinaryOperator::Div,
    ///                                             &Value::from(10),
    ///                                             &Value::from(0),
    ///                                             4);
    /// assert_eq!(zero, Err(RuntimeError::DivisionByZero { position: 4 }));
    /// ```
    pub fn evaluate_arithmetic(op: BinaryOperator,
                               left: &Value,
                               right: &Value,
                               position: usize)
                               -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Decimal, Integer};

        Ok(match (op, left, right) {
            (Add, Value::String(a), Value::String(b)) => Value::String(format!("{a}{b}")),

            (Add, Integer(a), Integer(b)) => Integer(a + b),
            (Sub, Integer(a), Integer(b)) => Integer(a - b),
            (Mul, Integer(a), Integer(b)) => Integer(a * b),
            (Div, Integer(_), Integer(b)) if b.is_zero() => {
                return Err(RuntimeError::DivisionByZero { position });
            },
            (Div, Integer(a), Integer(b)) => Integer(a / b),

            (Add, Decimal(a), Decimal(b)) => Decimal(a + b),
            (Sub, Decimal(a), Decimal(b)) => Decimal(a - b),
            (Mul, Decimal(a), Decimal(b)) => Decimal(a * b),
            (Div, Decimal(_), Decimal(b)) if b.is_zero() => {
                return Err(RuntimeError::DivisionByZero { position });
            },
            (Div, Decimal(a), Decimal(b)) => {
                let Some(quotient) = divide_decimal(a, b) else {
                    return Err(RuntimeError::TypeMismatch { details: format!("cannot rescale \
                                                                              {a} / {b}"),
                                                            position });
                };
                Decimal(quotient)
            },

            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' \
                                                                          to {} and {}",
                                                                         left.type_name(),
                                                                         right.type_name()),
                                                        position });
            },
        })
    }
}
