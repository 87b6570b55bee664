use crate::types::big_complex::BigComplex;

/// Describes the representational capabilities of one numeric sample type.
///
/// A descriptor is implemented once per concrete representation and answers
/// two questions for the cast routine: which fixed-width representations
/// can carry a value of this type, and how to move a value in and out of
/// each representation. The capability answers must not vary between calls;
/// a conversion between the same value and the same pair of descriptors
/// always yields the same result.
///
/// The fixed-width accessors are only meaningful when the matching
/// capability flag is `true`. Implementations on incapable types return a
/// truncating or saturating approximation instead of panicking; the cast
/// routine consults the flags first and never invokes them.
pub trait SampleType {
    /// The concrete value representation this descriptor works on.
    type Value;

    /// A human-readable name for the sample type, used in error messages.
    fn name(&self) -> &'static str;

    /// Whether every value of this type can be carried by a 64-bit signed
    /// integer for conversion purposes.
    fn has_integer_representation(&self) -> bool;

    /// Whether every value of this type can be carried by a 64-bit float
    /// for conversion purposes.
    fn has_floating_representation(&self) -> bool;

    /// Reads the value as a 64-bit signed integer.
    fn to_i64(&self, value: &Self::Value) -> i64;

    /// Reads the value as a 64-bit float.
    fn to_f64(&self, value: &Self::Value) -> f64;

    /// Assigns a 64-bit signed integer into the target value.
    fn set_i64(&self, target: &mut Self::Value, v: i64);

    /// Assigns a 64-bit float into the target value.
    fn set_f64(&self, target: &mut Self::Value, v: f64);

    /// Writes the value into the arbitrary-precision scratch value.
    ///
    /// This direction must be lossless: the scratch value has unbounded
    /// precision and every sample type must round-trip through it exactly.
    fn to_big(&self, value: &Self::Value, scratch: &mut BigComplex);

    /// Assigns the arbitrary-precision scratch value into the target.
    ///
    /// Narrowing rules match the fixed-width setters: fractional parts
    /// truncate toward zero, out-of-range values pin to the type bounds,
    /// and imaginary parts are discarded by real-only types.
    fn from_big(&self, target: &mut Self::Value, big: &BigComplex);
}
