use thiserror::Error;

/// Represents all errors that can occur during evaluation and runtime.
///
/// A runtime error aborts evaluation and unwinds the call stack. It is never
/// confused with a `RETURN`, which travels as
/// [`Flow::Returned`](crate::interpreter::evaluator::core::Flow::Returned)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not declared.
    #[error("Error at offset {position}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the access.
        position: usize,
    },
    /// Tried to read or assign a field the receiver does not have.
    #[error("Error at offset {position}: Undefined field '{name}'.")]
    UndefinedField {
        /// The name of the field.
        name:     String,
        /// Byte offset of the access.
        position: usize,
    },
    /// Called a function that no scope defines for this arity.
    #[error("Error at offset {position}: Undefined function '{name}' with {arity} argument(s).")]
    UndefinedFunction {
        /// The name of the function.
        name:     String,
        /// Number of arguments at the call site.
        arity:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error at offset {position}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details:  String,
        /// Byte offset of the offending expression.
        position: usize,
    },
    /// Attempted division by zero.
    #[error("Error at offset {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the division.
        position: usize,
    },
    /// Declared a name twice in the same scope.
    #[error("Error at offset {position}: '{name}' is already defined in this scope.")]
    AlreadyDefined {
        /// The duplicated name.
        name:     String,
        /// Byte offset of the second declaration.
        position: usize,
    },
    /// The left side of an assignment is not an access expression.
    #[error("Error at offset {position}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// Byte offset of the target.
        position: usize,
    },
    /// A native function was called with the wrong number of arguments.
    #[error("Error at offset {position}: Function '{name}' expects {expected} argument(s), received {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of parameters the function takes.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
}
