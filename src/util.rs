/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without undefined edge cases or silent wrapping.
/// Use these helpers whenever you need to narrow an `f64` or an `i64` into
/// a smaller representation with defined truncation and saturation rules.
pub mod num;
