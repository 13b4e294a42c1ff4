use std::cell::OnceCell;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::interpreter::types::{Function, Type, Variable};

/// Represents a literal value in the language.
///
/// `Literal` covers all raw, constant values that can appear directly in
/// source code. Integer and decimal literals keep their full precision; the
/// decimal keeps the scale it was written with (`1.50` has scale two).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// The `NIL` literal.
    Nil,
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// An arbitrary-precision integer literal.
    Integer(BigInt),
    /// An arbitrary-precision decimal literal.
    Decimal(BigDecimal),
    /// A character literal with escapes already resolved.
    Character(char),
    /// A string literal with quotes stripped and escapes resolved.
    String(String),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Literal {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<BigDecimal> for Literal {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A complete program: field declarations followed by method declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    /// Fields, in declaration order.
    pub fields:  Vec<Field>,
    /// Methods, in declaration order.
    pub methods: Vec<Method>,
}

/// A global variable declared with `LET` at the top of a program.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Name of the field.
    pub name:      String,
    /// Optional type annotation (`LET x: Integer = 1;`).
    pub type_name: Option<String>,
    /// Optional initializer.
    pub value:     Option<Expr>,
    /// Byte offset of the field name.
    pub position:  usize,
    /// Binding resolved by the analyzer.
    pub variable:  OnceCell<Variable>,
}

impl Field {
    /// Creates an unannotated field node.
    #[must_use]
    pub fn new(name: impl Into<String>,
               type_name: Option<String>,
               value: Option<Expr>,
               position: usize)
               -> Self {
        Self { name: name.into(),
               type_name,
               value,
               position,
               variable: OnceCell::new() }
    }
}

/// A single method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name:      String,
    /// Optional type annotation.
    pub type_name: Option<String>,
}

/// A method declared with `DEF name(params) DO ... END`.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    /// Name of the method.
    pub name:             String,
    /// Ordered parameters.
    pub parameters:       Vec<Parameter>,
    /// Optional return type annotation.
    pub return_type_name: Option<String>,
    /// Body statements.
    pub statements:       Vec<Stmt>,
    /// Byte offset of the method name.
    pub position:         usize,
    /// Signature resolved by the analyzer.
    pub function:         OnceCell<Function>,
}

impl Method {
    /// Creates an unannotated method node.
    #[must_use]
    pub fn new(name: impl Into<String>,
               parameters: Vec<Parameter>,
               return_type_name: Option<String>,
               statements: Vec<Stmt>,
               position: usize)
               -> Self {
        Self { name: name.into(),
               parameters,
               return_type_name,
               statements,
               position,
               function: OnceCell::new() }
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A statement inside a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression.
        expr:     Expr,
        /// Byte offset of the statement.
        position: usize,
    },
    /// `LET name [: Type] [= value];`
    Declaration {
        /// Declared name.
        name:      String,
        /// Optional type annotation.
        type_name: Option<String>,
        /// Optional initializer.
        value:     Option<Expr>,
        /// Byte offset of the statement.
        position:  usize,
        /// Binding resolved by the analyzer.
        variable:  OnceCell<Variable>,
    },
    /// `target = value;` where the target is an access expression.
    Assignment {
        /// The assigned place.
        target:   Expr,
        /// The new value.
        value:    Expr,
        /// Byte offset of the statement.
        position: usize,
    },
    /// `IF condition DO ... [ELSE ...] END`
    If {
        /// Branch condition.
        condition:       Expr,
        /// Statements run when the condition holds.
        then_statements: Vec<Self>,
        /// Statements run otherwise.
        else_statements: Vec<Self>,
        /// Byte offset of the statement.
        position:        usize,
    },
    /// `FOR name IN value DO ... END`
    For {
        /// Loop variable.
        name:       String,
        /// Iterable expression, evaluated once.
        value:      Expr,
        /// Loop body.
        statements: Vec<Self>,
        /// Byte offset of the statement.
        position:   usize,
        /// Binding of the loop variable resolved by the analyzer.
        variable:   OnceCell<Variable>,
    },
    /// `WHILE condition DO ... END`
    While {
        /// Loop condition, re-evaluated before each iteration.
        condition:  Expr,
        /// Loop body.
        statements: Vec<Self>,
        /// Byte offset of the statement.
        position:   usize,
    },
    /// `RETURN value;`
    Return {
        /// Returned value.
        value:    Expr,
        /// Byte offset of the statement.
        position: usize,
    },
}

impl Stmt {
    /// Returns the byte offset where this statement begins.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Expression { position, .. }
            | Self::Declaration { position, .. }
            | Self::Assignment { position, .. }
            | Self::If { position, .. }
            | Self::For { position, .. }
            | Self::While { position, .. }
            | Self::Return { position, .. } => *position,
        }
    }
}

/// An expression node.
///
/// The node kind is immutable after parsing. `ty` is filled exactly once by
/// the analyzer and is empty on a tree that has not been analyzed.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// What kind of expression this is.
    pub kind:     ExprKind,
    /// Byte offset used for error reporting.
    pub position: usize,
    /// Type resolved by the analyzer.
    pub ty:       OnceCell<Type>,
}

impl Expr {
    /// Wraps an expression kind into an unannotated node.
    #[must_use]
    pub const fn new(kind: ExprKind, position: usize) -> Self {
        Self { kind,
               position,
               ty: OnceCell::new() }
    }

    /// Builds a literal node.
    #[must_use]
    pub fn literal(value: impl Into<Literal>, position: usize) -> Self {
        Self::new(ExprKind::Literal(value.into()), position)
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, position: usize) -> Self {
        Self::new(ExprKind::Binary { op,
                                     left: Box::new(left),
                                     right: Box::new(right) },
                  position)
    }

    /// Builds an access node, optionally qualified by a receiver.
    #[must_use]
    pub fn access(receiver: Option<Self>, name: impl Into<String>, position: usize) -> Self {
        Self::new(ExprKind::Access { receiver: receiver.map(Box::new),
                                     name:     name.into(),
                                     variable: OnceCell::new(), },
                  position)
    }

    /// Builds a call node, optionally qualified by a receiver.
    #[must_use]
    pub fn function(receiver: Option<Self>,
                    name: impl Into<String>,
                    arguments: Vec<Self>,
                    position: usize)
                    -> Self {
        Self::new(ExprKind::Function { receiver: receiver.map(Box::new),
                                       name: name.into(),
                                       arguments,
                                       function: OnceCell::new() },
                  position)
    }

    /// The type attached by the analyzer, if the tree was analyzed.
    #[must_use]
    pub fn ty(&self) -> Option<&Type> {
        self.ty.get()
    }
}

/// The different kinds of expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A constant.
    Literal(Literal),
    /// A parenthesized expression.
    Group(Box<Expr>),
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A variable read, or a field read when a receiver is present.
    Access {
        /// Receiver for `receiver.name`.
        receiver: Option<Box<Expr>>,
        /// Variable or field name.
        name:     String,
        /// Binding resolved by the analyzer.
        variable: OnceCell<Variable>,
    },
    /// A function call, or a method call when a receiver is present.
    Function {
        /// Receiver for `receiver.name(...)`.
        receiver:  Option<Box<Expr>>,
        /// Function or method name.
        name:      String,
        /// Arguments, evaluated left to right.
        arguments: Vec<Expr>,
        /// Signature resolved by the analyzer.
        function:  OnceCell<Function>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical and (`AND`), short-circuiting.
    And,
    /// Logical or (`OR`), short-circuiting.
    Or,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps the literal text of an operator token to the operator.
    ///
    /// # Example
    /// ```
    /// use plc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("<="), Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_symbol("AND"), Some(BinaryOperator::And));
    /// assert_eq!(BinaryOperator::from_symbol(";"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "AND" => Self::And,
            "OR" => Self::Or,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            _ => return None,
        })
    }

    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
