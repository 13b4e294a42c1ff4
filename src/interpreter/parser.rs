/// Core parsing logic.
///
/// Contains the entry points that turn a whole token sequence into a
/// [`Source`](crate::ast::Source) and a token stream into an expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the four binary precedence levels. Each level folds its
/// operators iteratively, so every operator is left-associative.
pub mod binary;

/// Primary and secondary expressions.
///
/// Literals, groups, names, calls and the `.name` / `.name(...)` chains that
/// follow them.
pub mod primary;

/// Fields, methods and type annotations.
pub mod source;

/// Statement parsing.
///
/// Implements declarations, assignments, `IF`, `FOR`, `WHILE`, `RETURN` and
/// expression statements, and the statement sequences of their bodies.
pub mod statement;

/// The token cursor shared by every parsing routine.
///
/// Offers bounded lookahead that never consumes input and matching that
/// consumes only on success.
pub mod stream;

/// Utility functions for the parser.
///
/// Provides comma-separated lists, identifiers and literal unescaping.
pub mod utils;
