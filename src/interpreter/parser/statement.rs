use std::cell::OnceCell;

use crate::{
    ast::Stmt,
    interpreter::parser::{
        core::{ParseResult, parse_expression},
        stream::TokenStream,
        utils::{parse_identifier, parse_type_annotation},
    },
};

/// Parses statements until one of `terminators` is next.
///
/// The terminator itself is left in the stream.
///
/// # Errors
/// `UnexpectedEndOfInput` if the input ends before a terminator, or the first
/// error in a statement.
pub fn parse_statements(tokens: &mut TokenStream<'_>,
                        terminators: &[&str])
                        -> ParseResult<Vec<Stmt>> {
    let mut statements = Vec::new();
    while !terminators.iter().any(|terminator| tokens.peek_is(terminator)) {
        if tokens.is_at_end() {
            let expected = terminators.iter()
                                      .map(|terminator| format!("'{terminator}'"))
                                      .collect::<Vec<_>>()
                                      .join(" or ");
            return Err(tokens.error(&expected));
        }
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a single statement.
///
/// The leading keyword selects the form:
/// - `LET` declaration
/// - `IF`, `FOR` and `WHILE` blocks
/// - `RETURN expression ";"`
///
/// Anything else is an expression statement, which becomes an assignment if
/// the expression is followed by `=`.
///
/// # Example
/// ```
/// use plc::{
///     ast::Stmt,
///     interpreter::{lexer::tokenize, parser::{statement::parse_statement, stream::TokenStream}},
/// };
///
/// let tokens = tokenize("x = x + 1;").unwrap();
/// let statement = parse_statement(&mut TokenStream::new(&tokens)).unwrap();
///
/// assert!(matches!(statement, Stmt::Assignment { .. }));
/// ```
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    let position = tokens.position();

    if tokens.match_literal("LET") {
        parse_declaration(tokens, position)
    } else if tokens.match_literal("IF") {
        parse_if(tokens, position)
    } else if tokens.match_literal("FOR") {
        parse_for(tokens, position)
    } else if tokens.match_literal("WHILE") {
        parse_while(tokens, position)
    } else if tokens.match_literal("RETURN") {
        let value = parse_expression(tokens)?;
        tokens.expect_literal(";")?;
        Ok(Stmt::Return { value, position })
    } else {
        let expr = parse_expression(tokens)?;
        let statement = if tokens.match_literal("=") {
            Stmt::Assignment { target: expr,
                               value: parse_expression(tokens)?,
                               position }
        } else {
            Stmt::Expression { expr, position }
        };
        tokens.expect_literal(";")?;
        Ok(statement)
    }
}

/// `LET identifier (":" identifier)? ("=" expression)? ";"`
fn parse_declaration(tokens: &mut TokenStream<'_>, position: usize) -> ParseResult<Stmt> {
    let (name, _) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;
    let value = if tokens.match_literal("=") {
        Some(parse_expression(tokens)?)
    } else {
        None
    };
    tokens.expect_literal(";")?;

    Ok(Stmt::Declaration { name,
                           type_name,
                           value,
                           position,
                           variable: OnceCell::new() })
}

/// `IF expression DO statement* ("ELSE" statement*)? END`
fn parse_if(tokens: &mut TokenStream<'_>, position: usize) -> ParseResult<Stmt> {
    let condition = parse_expression(tokens)?;
    tokens.expect_literal("DO")?;

    let then_statements = parse_statements(tokens, &["ELSE", "END"])?;
    let else_statements = if tokens.match_literal("ELSE") {
        parse_statements(tokens, &["END"])?
    } else {
        Vec::new()
    };
    tokens.expect_literal("END")?;

    Ok(Stmt::If { condition,
                  then_statements,
                  else_statements,
                  position })
}

/// `FOR identifier IN expression DO statement* END`
///
/// An empty body parses; the analyzer rejects it.
fn parse_for(tokens: &mut TokenStream<'_>, position: usize) -> ParseResult<Stmt> {
    let (name, _) = parse_identifier(tokens)?;
    tokens.expect_literal("IN")?;
    let value = parse_expression(tokens)?;
    tokens.expect_literal("DO")?;

    let statements = parse_statements(tokens, &["END"])?;
    tokens.expect_literal("END")?;

    Ok(Stmt::For { name,
                   value,
                   statements,
                   position,
                   variable: OnceCell::new() })
}

/// `WHILE expression DO statement* END`
fn parse_while(tokens: &mut TokenStream<'_>, position: usize) -> ParseResult<Stmt> {
    let condition = parse_expression(tokens)?;
    tokens.expect_literal("DO")?;

    let statements = parse_statements(tokens, &["END"])?;
    tokens.expect_literal("END")?;

    Ok(Stmt::While { condition,
                     statements,
                     position })
}
