use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Divides `n` by `d`, rounding the quotient half to even.
///
/// ## Returns
/// - `Some(BigInt)`: The rounded quotient.
/// - `None`: If `d` is zero.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use plc::util::num::divide_half_even;
///
/// let q = |n: i32, d: i32| divide_half_even(&BigInt::from(n), &BigInt::from(d));
///
/// assert_eq!(q(5, 2), Some(BigInt::from(2)));
/// assert_eq!(q(7, 2), Some(BigInt::from(4)));
/// assert_eq!(q(-7, 2), Some(BigInt::from(-4)));
/// assert_eq!(q(10, 3), Some(BigInt::from(3)));
/// assert_eq!(q(1, 0), None);
/// ```
#[must_use]
pub fn divide_half_even(n: &BigInt, d: &BigInt) -> Option<BigInt> {
    if d.is_zero() {
        return None;
    }

    let (quotient, remainder) = n.div_rem(d);
    let twice = remainder.abs() * 2u8;
    let divisor = d.abs();

    let away_from_zero = twice > divisor || (twice == divisor && quotient.is_odd());
    if !away_from_zero {
        return Some(quotient);
    }

    if n.is_negative() == d.is_negative() {
        Some(quotient + 1u8)
    } else {
        Some(quotient - 1u8)
    }
}

/// Divides two decimals, keeping the scale of `left` and rounding half to
/// even.
///
/// `1.0 / 3.0` is `0.3`, `2.50 / 4.0` is `0.62` and `2.70 / 4.0` is `0.68`.
///
/// ## Returns
/// - `Some(BigDecimal)`: The rounded quotient at the scale of `left`.
/// - `None`: If `right` is zero, or the scales are too far apart to
///   rescale.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use plc::util::num::divide_decimal;
///
/// let d = |s: &str| BigDecimal::from_str(s).unwrap();
///
/// let q = divide_decimal(&d("2.50"), &d("4.0")).unwrap();
/// assert_eq!(q, d("0.62"));
/// assert_eq!(q.as_bigint_and_exponent().1, 2);
///
/// assert_eq!(divide_decimal(&d("1.0"), &d("0.0")), None);
/// ```
#[must_use]
pub fn divide_decimal(left: &BigDecimal, right: &BigDecimal) -> Option<BigDecimal> {
    let (left_digits, left_scale) = left.as_bigint_and_exponent();
    let (right_digits, right_scale) = right.as_bigint_and_exponent();

    let shift = usize::try_from(right_scale.unsigned_abs()).ok()?;
    let factor = num_traits::pow(BigInt::from(10u8), shift);

    // left / right at scale(left) == left_digits * 10^right_scale / right_digits
    let (numerator, denominator) = if right_scale >= 0 {
        (left_digits * factor, right_digits)
    } else {
        (left_digits, right_digits * factor)
    };

    let quotient = divide_half_even(&numerator, &denominator)?;
    Some(BigDecimal::new(quotient, left_scale))
}
