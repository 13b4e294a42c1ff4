use std::{fmt, rc::Rc};

use log::{debug, trace};

use crate::{
    ast::{Expr, ExprKind, Method, Source, Stmt},
    error::RuntimeError,
    interpreter::{scope::Scope, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A native function: receives the evaluated arguments and the byte offset of
/// the call.
pub type NativeFn = Rc<dyn Fn(&[Value], usize) -> EvalResult<Value>>;

/// The runtime instantiation of [`Scope`].
pub type RuntimeScope = Scope<Value, Callable>;

/// How a statement finished.
///
/// `RETURN` is not an error: it travels outward as [`Flow::Returned`] through
/// every enclosing block and loop until the method invocation that owns it
/// turns it into the call's result.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Completed,
    /// A `RETURN` was executed with this value.
    Returned(Value),
}

/// Something that can be invoked by a call expression.
#[derive(Clone)]
pub enum Callable {
    /// A function implemented by the host.
    Native(NativeFn),
    /// A method declared in the program.
    Method(Rc<Method>),
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(_) => write!(f, "Native(..)"),
            Self::Method(method) => write!(f, "Method({}/{})", method.name, method.arity()),
        }
    }
}

/// The tree-walking interpreter.
///
/// Holds the global runtime scope. Every other scope is created for the
/// duration of a block and passed explicitly to [`Interpreter::execute`] and
/// [`Interpreter::evaluate`], so any statement or expression can be run
/// against a scope of the caller's choosing.
///
/// # Example
/// ```
/// use plc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{builtins, evaluator::core::Interpreter, value::core::Value},
/// };
///
/// let interpreter = Interpreter::new(builtins::runtime_globals());
///
/// // 1 + 2 * 3
/// let expr = Expr::binary(BinaryOperator::Add,
///                         Expr::literal(1, 0),
///                         Expr::binary(BinaryOperator::Mul,
///                                      Expr::literal(2, 4),
///                                      Expr::literal(3, 8),
///                                      6),
///                         2);
///
/// let value = interpreter.evaluate(&expr, interpreter.globals()).unwrap();
/// assert_eq!(value, Value::from(7));
/// ```
pub struct Interpreter {
    globals: Rc<RuntimeScope>,
}

impl Interpreter {
    /// Creates an interpreter over the given global scope.
    #[must_use]
    pub const fn new(globals: Rc<RuntimeScope>) -> Self {
        Self { globals }
    }

    /// The global scope fields and methods are defined in.
    #[must_use]
    pub const fn globals(&self) -> &Rc<RuntimeScope> {
        &self.globals
    }

    /// Runs a program.
    ///
    /// Field initializers run once, in declaration order, in the global
    /// scope. All methods are then defined and the zero-argument `main` is
    /// invoked.
    ///
    /// # Returns
    /// The value `main` returns, or `NIL` if it completes without `RETURN`.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised, or `UndefinedFunction` if there is no
    /// `main`.
    pub fn run(&self, source: &Source) -> EvalResult<Value> {
        for field in &source.fields {
            let value = match &field.value {
                Some(expr) => self.evaluate(expr, &self.globals)?,
                None => Value::Nil,
            };
            if !self.globals.define_variable(&field.name, value) {
                return Err(RuntimeError::AlreadyDefined { name:     field.name.clone(),
                                                          position: field.position, });
            }
        }

        for method in &source.methods {
            let callable = Callable::Method(Rc::new(method.clone()));
            if !self.globals.define_function(&method.name, method.arity(), callable) {
                return Err(RuntimeError::AlreadyDefined { name:     method.name.clone(),
                                                          position: method.position, });
            }
        }

        debug!("defined {} fields and {} methods",
               source.fields.len(),
               source.methods.len());

        let main = self.globals
                       .lookup_function("main", 0)
                       .ok_or_else(|| RuntimeError::UndefinedFunction { name:     "main".into(),
                                                                        arity:    0,
                                                                        position: 0, })?;
        self.invoke(&main, "main", &[], 0)
    }

    /// Executes a single statement in `scope`.
    ///
    /// # Returns
    /// [`Flow::Returned`] if a `RETURN` was reached, [`Flow::Completed`]
    /// otherwise.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised by the statement.
    pub fn execute(&self, statement: &Stmt, scope: &Rc<RuntimeScope>) -> EvalResult<Flow> {
        trace!("executing statement at offset {}", statement.position());

        match statement {
            Stmt::Expression { expr, .. } => {
                self.evaluate(expr, scope)?;
                Ok(Flow::Completed)
            },
            Stmt::Declaration { name,
                                value,
                                position,
                                .. } => {
                self.execute_declaration(name, value.as_ref(), scope, *position)
            },
            Stmt::Assignment { target,
                               value,
                               position, } => self.execute_assignment(target, value, scope, *position),
            Stmt::If { condition,
                       then_statements,
                       else_statements,
                       .. } => self.execute_if(condition, then_statements, else_statements, scope),
            Stmt::For { name,
                        value,
                        statements,
                        position,
                        .. } => self.execute_for(name, value, statements, scope, *position),
            Stmt::While { condition,
                          statements,
                          .. } => self.execute_while(condition, statements, scope),
            Stmt::Return { value, .. } => Ok(Flow::Returned(self.evaluate(value, scope)?)),
        }
    }

    /// Executes statements in order in `scope`, stopping at the first
    /// `RETURN`.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised by any statement.
    pub fn execute_statements(&self,
                              statements: &[Stmt],
                              scope: &Rc<RuntimeScope>)
                              -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Returned(value) = self.execute(statement, scope)? {
                return Ok(Flow::Returned(value));
            }
        }
        Ok(Flow::Completed)
    }

    /// Executes statements in a fresh child of `parent`.
    ///
    /// The child scope is released when this returns, whichever way it
    /// returns.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised by any statement.
    pub fn execute_block(&self, statements: &[Stmt], parent: &Rc<RuntimeScope>) -> EvalResult<Flow> {
        let scope = Scope::child(parent);
        self.execute_statements(statements, &scope)
    }

    /// Evaluates an expression in `scope`.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression kind: literals, groups, binary
    /// operations, accesses and calls.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised while evaluating the expression or
    /// any of its operands.
    pub fn evaluate(&self, expr: &Expr, scope: &Rc<RuntimeScope>) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Value::from(literal)),
            ExprKind::Group(inner) => self.evaluate(inner, scope),
            ExprKind::Binary { op, left, right } => {
                self.evaluate_binary(*op, left, right, scope, expr.position)
            },
            ExprKind::Access { receiver, name, .. } => {
                self.evaluate_access(receiver.as_deref(), name, scope, expr.position)
            },
            ExprKind::Function { receiver,
                                 name,
                                 arguments,
                                 .. } => {
                self.evaluate_call(receiver.as_deref(), name, arguments, scope, expr.position)
            },
        }
    }
}
