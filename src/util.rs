/// Arbitrary-precision arithmetic helpers.
///
/// Division with round-half-to-even for integers and decimals. The quotient
/// is computed exactly from the unscaled integers and rounded once, so no
/// intermediate precision is ever lost.
pub mod num;
