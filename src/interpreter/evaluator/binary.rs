/// Arithmetic and concatenation.
///
/// Implements `+`, `-`, `*` and `/` over integers and decimals, and `+` over
/// strings. Both operands must share one representation.
pub mod arithmetic;

/// Comparison and equality.
///
/// Ordering operators accept two integers or two decimals; equality accepts
/// any pair of values.
pub mod comparison;

pub mod core;

/// Logical operators.
///
/// `AND` and `OR` evaluate their right operand only when the left one does not
/// already decide the result.
pub mod logic;
