use crate::{
    error::ParseError,
    interpreter::{
        parser::{core::ParseResult, stream::TokenStream},
        token::TokenKind,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by argument and parameter lists. It repeatedly
/// calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The operator that terminates the list, such as `)`.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    tokens: &mut TokenStream<'_>,
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>,
    closing: &str)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.match_literal(closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if tokens.match_literal(",") {
            continue;
        }
        if tokens.match_literal(closing) {
            break;
        }
        return Err(tokens.error(&format!("',' or '{closing}'")));
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name and position.
///
/// Keywords are lexed as keywords, so they never pass as identifiers.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<(String, usize)> {
    let token = tokens.expect_kind(TokenKind::Identifier)?;
    Ok((token.literal.clone(), token.position))
}

/// Parses an optional `: Type` annotation.
pub(in crate::interpreter::parser) fn parse_type_annotation(tokens: &mut TokenStream<'_>)
                                                            -> ParseResult<Option<String>> {
    if !tokens.match_literal(":") {
        return Ok(None);
    }
    let (name, _) = parse_identifier(tokens)?;
    Ok(Some(name))
}

/// Strips the quotes of a character or string literal and resolves its
/// escape sequences.
///
/// Recognised escapes are `\b`, `\n`, `\r`, `\t`, `\'`, `\"` and `\\`.
///
/// # Errors
/// `InvalidLiteral` if the literal is not quoted or contains an unknown
/// escape.
///
/// # Example
/// ```
/// use plc::interpreter::parser::utils::unescape;
///
/// assert_eq!(unescape(r#""a\tb\\""#, 0).unwrap(), "a\tb\\");
/// assert_eq!(unescape(r"'\''", 0).unwrap(), "'");
/// assert!(unescape(r#""\q""#, 0).is_err());
/// ```
pub fn unescape(literal: &str, position: usize) -> ParseResult<String> {
    let invalid = || ParseError::InvalidLiteral { literal: literal.to_string(),
                                                  position };

    let inner = literal.get(1..literal.len().saturating_sub(1))
                       .ok_or_else(invalid)?;

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        result.push(match chars.next() {
            Some('b') => '\u{8}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('\'') => '\'',
            Some('"') => '"',
            Some('\\') => '\\',
            _ => return Err(invalid()),
        });
    }
    Ok(result)
}
