use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::parser::{core::ParseResult, primary::parse_secondary, stream::TokenStream},
};

/// Folds one precedence level.
///
/// Parses `next (op next)*` for the operators in `operators`, building the
/// tree from the left so that `a - b - c` becomes `(a - b) - c`. The node
/// position is that of the operator token.
fn fold_left(tokens: &mut TokenStream<'_>,
             operators: &[BinaryOperator],
             next: fn(&mut TokenStream<'_>) -> ParseResult<Expr>)
             -> ParseResult<Expr> {
    let mut left = next(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = BinaryOperator::from_symbol(&token.literal)
           && token.is(op.symbol())
           && operators.contains(&op)
        {
            tokens.next();
            let right = next(tokens)?;
            left = Expr::binary(op, left, right, token.position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses logical expressions.
///
/// The rule is: `logical := equality (("AND" | "OR") equality)*`
///
/// `AND` and `OR` share one precedence level.
pub fn parse_logical(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    fold_left(tokens, &[BinaryOperator::And, BinaryOperator::Or], parse_equality)
}

/// Parses comparison and equality expressions.
///
/// The rule is: `equality := additive (("<" | "<=" | ">" | ">=" | "==" |
/// "!=") additive)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    fold_left(tokens,
              &[BinaryOperator::Less,
                BinaryOperator::LessEqual,
                BinaryOperator::Greater,
                BinaryOperator::GreaterEqual,
                BinaryOperator::Equal,
                BinaryOperator::NotEqual],
              parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Example
/// ```
/// use plc::{
///     ast::{BinaryOperator, ExprKind},
///     interpreter::{lexer::tokenize, parser::{binary::parse_additive, stream::TokenStream}},
/// };
///
/// let tokens = tokenize("1 - 2 - 3").unwrap();
/// let expr = parse_additive(&mut TokenStream::new(&tokens)).unwrap();
///
/// // (1 - 2) - 3
/// let ExprKind::Binary { left, .. } = &expr.kind else { panic!() };
/// assert!(matches!(left.kind, ExprKind::Binary { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    fold_left(tokens,
              &[BinaryOperator::Add, BinaryOperator::Sub],
              parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := secondary (("*" | "/") secondary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    fold_left(tokens,
              &[BinaryOperator::Mul, BinaryOperator::Div],
              parse_secondary)
}
