use thiserror::Error;

/// Static analysis errors.
///
/// Raised by the analyzer at the first semantic violation: unresolved names,
/// incompatible types, a missing or mistyped `main`, and malformed loops.
pub mod analysis_error;
/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// tree. Parsing is fail-fast, so a single error describes where the grammar
/// could not continue and what it expected there.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include division by zero, type mismatches and unresolved
/// variables, fields or functions.
pub mod runtime_error;

pub use analysis_error::AnalysisError;
pub use parse_error::{LexError, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse, analyze, evaluate pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The source contained characters no token starts with.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree violated a static rule.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
