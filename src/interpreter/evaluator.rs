/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// comparisons, equality and the short-circuiting logical operators.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the interpreter, the control-flow signal used for `RETURN` and
/// the dispatch from tree nodes to the specialised routines.
pub mod core;

/// Evaluation of variable and field accesses.
pub mod expression;

/// Execution of `FOR` loops.
///
/// Evaluates the iterable once and runs the body in a fresh scope per
/// element.
pub mod for_loop;

/// Function evaluation.
///
/// Resolves free and receiver-qualified calls, checks arity and runs method
/// bodies in their own call scope.
pub mod function;

/// Execution of declarations, assignments, `IF` and `WHILE`.
pub mod statement;
