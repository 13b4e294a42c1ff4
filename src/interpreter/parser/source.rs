use crate::{
    ast::{Field, Method, Parameter, Source},
    interpreter::parser::{
        core::{ParseResult, parse_expression},
        statement::parse_statements,
        stream::TokenStream,
        utils::{parse_comma_separated, parse_identifier, parse_type_annotation},
    },
};

/// Parses a whole program.
///
/// The rule is: `source := field* method*`
///
/// # Errors
/// A `ParseError` if a declaration is malformed, or if tokens remain after
/// the last method.
pub fn parse_source(tokens: &mut TokenStream<'_>) -> ParseResult<Source> {
    let mut source = Source::default();

    while tokens.match_literal("LET") {
        source.fields.push(parse_field(tokens)?);
    }
    while tokens.match_literal("DEF") {
        source.methods.push(parse_method(tokens)?);
    }

    if !tokens.is_at_end() {
        let expected = if source.methods.is_empty() {
            "'LET', 'DEF' or end of input"
        } else {
            "'DEF' or end of input"
        };
        return Err(tokens.error(expected));
    }

    Ok(source)
}

/// Parses a field declaration after its `LET`.
///
/// The rule is: `field := "LET" identifier (":" identifier)? ("=" expression)? ";"`
pub fn parse_field(tokens: &mut TokenStream<'_>) -> ParseResult<Field> {
    let (name, position) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;
    let value = if tokens.match_literal("=") {
        Some(parse_expression(tokens)?)
    } else {
        None
    };
    tokens.expect_literal(";")?;

    Ok(Field::new(name, type_name, value, position))
}

/// Parses a method declaration after its `DEF`.
///
/// The rule is: `method := "DEF" identifier "(" (parameter ("," parameter)*)? ")"
/// (":" identifier)? "DO" statement* "END"`
///
/// # Example
/// ```
/// use plc::parse_source;
///
/// let source = parse_source("DEF add(a: Integer, b: Integer): Integer DO RETURN a + b; END")
///     .unwrap();
/// let method = &source.methods[0];
///
/// assert_eq!(method.arity(), 2);
/// assert_eq!(method.parameters[1].type_name.as_deref(), Some("Integer"));
/// assert_eq!(method.return_type_name.as_deref(), Some("Integer"));
/// ```
pub fn parse_method(tokens: &mut TokenStream<'_>) -> ParseResult<Method> {
    let (name, position) = parse_identifier(tokens)?;

    tokens.expect_literal("(")?;
    let parameters = parse_comma_separated(tokens, parse_parameter, ")")?;
    let return_type_name = parse_type_annotation(tokens)?;

    tokens.expect_literal("DO")?;
    let statements = parse_statements(tokens, &["END"])?;
    tokens.expect_literal("END")?;

    Ok(Method::new(name, parameters, return_type_name, statements, position))
}

fn parse_parameter(tokens: &mut TokenStream<'_>) -> ParseResult<Parameter> {
    let (name, _) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;
    Ok(Parameter { name, type_name })
}
