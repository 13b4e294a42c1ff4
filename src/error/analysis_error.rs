use thiserror::Error;

/// Represents all errors that can occur during static analysis.
///
/// Every variant carries the byte offset of the node that failed, so the
/// caller can point at the exact source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A name was used that no enclosing scope declares.
    #[error("Error at offset {position}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the access.
        position: usize,
    },
    /// A receiver's type has no field with this name.
    #[error("Error at offset {position}: Type '{type_name}' has no field '{name}'.")]
    UndefinedField {
        /// The name of the field.
        name:      String,
        /// The receiver's type.
        type_name: String,
        /// Byte offset of the access.
        position:  usize,
    },
    /// No function with this name and arity is visible.
    #[error("Error at offset {position}: Undefined function '{name}' with {arity} argument(s).")]
    UndefinedFunction {
        /// The name of the function.
        name:     String,
        /// Number of arguments at the call site.
        arity:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// A source type is not assignable to the required target type.
    #[error("Error at offset {position}: Type mismatch, expected {expected}, received {found}.")]
    TypeMismatch {
        /// Name of the required type.
        expected: String,
        /// Name of the type that was found.
        found:    String,
        /// Byte offset of the offending expression.
        position: usize,
    },
    /// `main` is missing, takes parameters, or does not return an integer.
    #[error("Error at offset {position}: Invalid main method: {details}.")]
    InvalidMainSignature {
        /// Why the signature was rejected.
        details:  String,
        /// Byte offset of `main`, or zero if it is missing.
        position: usize,
    },
    /// A `FOR` loop without any statement in its body.
    #[error("Error at offset {position}: FOR loop body must not be empty.")]
    EmptyLoopBody {
        /// Byte offset of the loop.
        position: usize,
    },
    /// A name declared twice in the same scope.
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
    /// A type annotation names no known type.
    #[error("Error at offset {position}: Unknown type '{name}'.")]
    UnknownType {
        /// The annotation text.
        name:     String,
        /// Byte offset of the annotated declaration.
        position: usize,
    },
}
