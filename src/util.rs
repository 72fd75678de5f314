/// Numeric conversion helpers.
///
/// This module provides checked conversions between floating-point values
/// and the integer types used for counting (factorials, combinatorics,
/// sample sizes). A conversion only succeeds when it is lossless and the
/// value really is an integer within the accepted tolerance.
pub mod num;
