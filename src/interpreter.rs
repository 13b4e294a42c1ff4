/// The analyzer module statically checks a parsed tree.
///
/// The analyzer walks the tree once against a static scope holding type
/// descriptors. It resolves every name, checks operand and argument types and
/// writes the resolved type and binding into each node's annotation cell.
///
/// # Responsibilities
/// - Resolves variables, fields, functions and methods.
/// - Enforces assignability, loop and `main` rules.
/// - Reports the first violation with its source offset.
pub mod analyzer;
/// Functions available to every program.
///
/// Installs `print` and `range` into a static scope (as signatures) or a
/// runtime scope (as native implementations).
pub mod builtins;
/// The evaluator module executes trees and computes results.
///
/// The evaluator traverses the tree, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces the program result. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates expressions to values and executes statements for effect.
/// - Implements loops, conditionals and non-local `RETURN`.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// tokens, each carrying its kind, literal text and byte offset.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that represents the syntactic structure of the program. It fails on
/// the first token the grammar cannot accept.
///
/// # Responsibilities
/// - Converts tokens into fields, methods, statements and expressions.
/// - Builds left-associative binary trees with correct precedence.
/// - Resolves escape sequences in character and string literals.
pub mod parser;
/// Lexical environments shared by the analyzer and the evaluator.
pub mod scope;
/// Tokens exchanged between the lexer and the parser.
pub mod token;
/// Static type descriptors and bindings.
pub mod types;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// nil, booleans, arbitrary-precision integers and decimals, characters,
/// strings, integer ranges and composite objects with a field map.
pub mod value;
