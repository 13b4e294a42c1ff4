//! # plc
//!
//! plc is a front end and interpreter for a small imperative scripting
//! language. Source text is tokenized, parsed into a tree, statically checked,
//! and then evaluated by a tree-walking interpreter with arbitrary-precision
//! integers and decimals.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Source,
    error::Error,
    interpreter::{
        analyzer::core::Analyzer, builtins, evaluator::core::Interpreter, lexer::tokenize,
        parser::core::parse, token::Token, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Source`, `Stmt` and `Expr` types that represent
/// a program as a tree. The tree is built by the parser, annotated by the
/// analyzer and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines field, method, statement and expression nodes for all language
///   constructs.
/// - Attaches byte offsets to nodes for error reporting.
/// - Carries write-once annotation cells for resolved types and bindings.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing or evaluating code. Each error carries the byte offset of the
/// construct that failed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, analyzer,
///   evaluator).
/// - Aggregates them into a single `Error` for callers of the full pipeline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, analysis, evaluation, scopes
/// and value representations to provide a complete runtime for programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer and evaluator.
/// - Provides the scopes and type descriptors shared between them.
pub mod interpreter;
/// General utilities for arbitrary-precision arithmetic.
///
/// # Responsibilities
/// - Divide integers and decimals with round-half-to-even.
pub mod util;

/// Splits source text into tokens.
///
/// # Example
/// ```
/// let tokens = plc::lex_source("RETURN 1;").unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn lex_source(source: &str) -> Result<Vec<Token>, Error> {
    Ok(tokenize(source)?)
}

/// Lexes and parses a program.
///
/// # Example
/// ```
/// let source = plc::parse_source("LET x = 1; DEF main() DO RETURN x; END").unwrap();
/// assert_eq!(source.methods.len(), 1);
///
/// assert!(plc::parse_source("DEF main() DO RETURN 1 END").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Source, Error> {
    let tokens = lex_source(source)?;
    Ok(parse(&tokens)?)
}

/// Lexes, parses and analyzes a program against the built-in functions.
///
/// The returned tree carries the resolved types and bindings.
///
/// # Example
/// ```
/// use plc::error::{AnalysisError, Error};
///
/// assert!(plc::analyze_source("DEF main(): Integer DO RETURN 0; END").is_ok());
///
/// let missing = plc::analyze_source("DEF main() DO RETURN y; END");
/// assert!(matches!(missing, Err(Error::Analysis(AnalysisError::UndefinedVariable { .. }))));
/// ```
pub fn analyze_source(source: &str) -> Result<Source, Error> {
    let source = parse_source(source)?;
    Analyzer::new(builtins::static_globals()).analyze(&source)?;
    Ok(source)
}

/// Runs a program and returns the value of its `main` method.
///
/// With `analyze` set, the program is statically checked first and nothing
/// runs if the check fails.
///
/// # Example
/// ```
/// use plc::interpreter::value::core::Value;
///
/// let result = plc::run_source("LET x = 1; DEF main() DO RETURN x; END", true).unwrap();
/// assert_eq!(result, Value::from(1));
/// ```
pub fn run_source(source: &str, analyze: bool) -> Result<Value, Error> {
    let source = if analyze {
        analyze_source(source)?
    } else {
        parse_source(source)?
    };

    debug!("running program");
    Ok(Interpreter::new(builtins::runtime_globals()).run(&source)?)
}
