use std::{fmt, rc::Rc};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    ast::Literal,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::object::Object},
};

/// Represents a runtime value in the interpreter.
///
/// Every value wraps exactly one representation. Values are immutable except
/// for the field map of an [`Object`], which is shared through an [`Rc`] so
/// that an assignment through any handle is seen by every holder.
///
/// Equality is structural. Two decimals are equal only when both digits and
/// scale match, so `1.0` differs from `1.00`; the ordering operators still
/// compare them numerically.
#[derive(Debug, Clone)]
pub enum Value {
    /// The `NIL` value.
    Nil,
    /// A boolean value (`TRUE` or `FALSE`).
    /// Produced by comparison and logical operators, and required by the
    /// conditions of `IF` and `WHILE`.
    Boolean(bool),
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// An arbitrary-precision decimal keeping its scale.
    Decimal(BigDecimal),
    /// A single character.
    Character(char),
    /// A string.
    String(String),
    /// The half-open integer range `[start, end)` produced by `range`.
    Range {
        /// First element.
        start: BigInt,
        /// One past the last element.
        end:   BigInt,
    },
    /// An instance of a host-defined class.
    Object(Rc<Object>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(Rc::new(v))
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Nil => Self::Nil,
            Literal::Boolean(b) => Self::Boolean(*b),
            Literal::Integer(n) => Self::Integer(n.clone()),
            Literal::Decimal(d) => Self::Decimal(d.clone()),
            Literal::Character(c) => Self::Character(*c),
            Literal::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// Name of the value's runtime type, used in error messages.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1).type_name(), "Integer");
    /// assert_eq!(Value::Nil.type_name(), "Nil");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Nil => "Nil",
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::Character(_) => "Character",
            Self::String(_) => "String",
            Self::Range { .. } => "IntegerIterable",
            Self::Object(object) => object.class_name(),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the conditions of `IF` and `WHILE` and the operands of `AND`
    /// and `OR`.
    ///
    /// # Parameters
    /// - `position`: Byte offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::TypeMismatch)`: If not a boolean.
    pub fn as_bool(&self, position: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(RuntimeError::TypeMismatch { details: format!("expected Boolean, \
                                                                        received {}",
                                                                       other.type_name()),
                                                      position }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => {
                a.as_bigint_and_exponent() == b.as_bigint_and_exponent()
            },
            (Self::Character(a), Self::Character(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Range { start: a, end: b }, Self::Range { start: c, end: d }) => {
                a == c && b == d
            },
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "NIL"),
            Self::Boolean(true) => write!(f, "TRUE"),
            Self::Boolean(false) => write!(f, "FALSE"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{}", d.to_plain_string()),
            Self::Character(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Range { start, end } => write!(f, "range({start}, {end})"),
            Self::Object(object) => write!(f, "{object}"),
        }
    }
}
