/// Analyzer state and the entry point for whole programs.
///
/// Holds the static global scope and the registry of type names that
/// annotations may refer to.
pub mod core;

/// Typing of expressions.
///
/// Resolves accesses and calls, checks operand and argument types and
/// attaches the resulting type to each expression node.
pub mod expression;

/// Fields, methods and the `main` signature.
pub mod source;

/// Checking of statements inside method bodies.
///
/// Mirrors the scope nesting of the evaluator: branches and loop bodies are
/// checked in a child scope, and `FOR` binds its variable in that child.
pub mod statement;
