use log::debug;

use crate::{
    ast::{Expr, Source},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_logical, source::parse_source, stream::TokenStream},
        token::Token,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. Fields come first, then methods, and
/// the whole token sequence must be consumed.
///
/// # Errors
/// The first [`ParseError`]; no recovery is attempted.
///
/// # Example
/// ```
/// use plc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("LET x = 1; DEF main() DO RETURN x; END").unwrap();
/// let source = parse(&tokens).unwrap();
///
/// assert_eq!(source.fields[0].name, "x");
/// assert_eq!(source.methods[0].name, "main");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Source> {
    let mut stream = TokenStream::new(tokens);
    let source = parse_source(&mut stream)?;

    debug!("parsed {} fields and {} methods",
           source.fields.len(),
           source.methods.len());
    Ok(source)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, logical `AND`/`OR`, and descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_logical(tokens)
}
