/// Numeric conversion helpers.
///
/// This module provides safe conversion from integers to floating-point
/// values without risking silent data loss or rounding errors. Use it
/// whenever an `i64` has to become an `f64`, for example when mixed-type
/// arithmetic promotes an integer operand.
///
/// All functions return a `Result`, which is `Ok` if the conversion is
/// lossless and valid, or an error if the value is out of range.
pub mod num;
