use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    ast::{Expr, ExprKind, Literal},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            stream::TokenStream,
            utils::{parse_comma_separated, parse_identifier, unescape},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a primary expression followed by any number of member accesses and
/// method calls.
///
/// The rule is: `secondary := primary ("." identifier ("(" arguments ")")?)*`
///
/// Each link takes everything to its left as its receiver, so `a.b.c()`
/// calls `c` on the field `b` of `a`.
pub fn parse_secondary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut receiver = parse_primary(tokens)?;

    while tokens.match_literal(".") {
        let (name, position) = parse_identifier(tokens)?;
        receiver = if tokens.match_literal("(") {
            let arguments = parse_comma_separated(tokens, parse_expression, ")")?;
            Expr::function(Some(receiver), name, arguments, position)
        } else {
            Expr::access(Some(receiver), name, position)
        };
    }

    Ok(receiver)
}

/// Parses a primary expression.
///
/// The rule is: `primary := "NIL" | "TRUE" | "FALSE" | integer | decimal |
/// character | string | "(" expression ")" | identifier ("(" arguments
/// ")")?`
///
/// # Errors
/// - `UnexpectedToken` / `UnexpectedEndOfInput` when no expression starts
///   here or a group is not closed.
/// - `InvalidLiteral` when a literal cannot be converted to a value.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(token) = tokens.peek() else {
        return Err(tokens.error("an expression"));
    };

    let expr = match token.kind {
        TokenKind::Keyword => {
            let literal = match token.literal.as_str() {
                "NIL" => Literal::Nil,
                "TRUE" => Literal::Boolean(true),
                "FALSE" => Literal::Boolean(false),
                _ => return Err(tokens.error("an expression")),
            };
            tokens.next();
            Expr::literal(literal, token.position)
        },
        TokenKind::Integer
        | TokenKind::Decimal
        | TokenKind::Character
        | TokenKind::String => {
            tokens.next();
            Expr::literal(parse_literal(token)?, token.position)
        },
        TokenKind::Operator if token.is("(") => {
            tokens.next();
            let inner = parse_expression(tokens)?;
            tokens.expect_literal(")")?;
            Expr::new(ExprKind::Group(Box::new(inner)), token.position)
        },
        TokenKind::Identifier => {
            tokens.next();
            if tokens.match_literal("(") {
                let arguments = parse_comma_separated(tokens, parse_expression, ")")?;
                Expr::function(None, token.literal.clone(), arguments, token.position)
            } else {
                Expr::access(None, token.literal.clone(), token.position)
            }
        },
        TokenKind::Operator => return Err(tokens.error("an expression")),
    };

    Ok(expr)
}

/// Converts a literal token to its value.
fn parse_literal(token: &Token) -> ParseResult<Literal> {
    let invalid = || ParseError::InvalidLiteral { literal:  token.literal.clone(),
                                                  position: token.position, };

    match token.kind {
        TokenKind::Integer => BigInt::from_str(&token.literal).map(Literal::Integer)
                                                              .map_err(|_| invalid()),
        TokenKind::Decimal => BigDecimal::from_str(&token.literal).map(Literal::Decimal)
                                                                  .map_err(|_| invalid()),
        TokenKind::Character => {
            let text = unescape(&token.literal, token.position)?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Literal::Character(c)),
                _ => Err(invalid()),
            }
        },
        TokenKind::String => unescape(&token.literal, token.position).map(Literal::String),
        TokenKind::Keyword | TokenKind::Identifier | TokenKind::Operator => Err(invalid()),
    }
}
