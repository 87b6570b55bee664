use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{
    types::{big_complex::BigComplex, descriptor::SampleType},
    util::num::{f64_to_i64_trunc, saturate_i64},
};

/// Implements [`SampleType`] for a bounded integer representation.
///
/// Every value of these types is exact in both `i64` and `f64`, so both
/// capability flags are raised. Narrowing assignments truncate toward zero
/// and pin at the type bounds.
macro_rules! bounded_int_sample_type {
    ($(#[$doc:meta])* $name:ident, $prim:ty, $label:literal) => {
        $(#[$doc])*
        pub struct $name;

        impl SampleType for $name {
            type Value = $prim;

            fn name(&self) -> &'static str {
                $label
            }

            fn has_integer_representation(&self) -> bool {
                true
            }

            fn has_floating_representation(&self) -> bool {
                true
            }

            fn to_i64(&self, value: &$prim) -> i64 {
                i64::from(*value)
            }

            fn to_f64(&self, value: &$prim) -> f64 {
                f64::from(*value)
            }

            fn set_i64(&self, target: &mut $prim, v: i64) {
                *target = saturate_i64(v);
            }

            fn set_f64(&self, target: &mut $prim, v: f64) {
                *target = saturate_i64(f64_to_i64_trunc(v));
            }

            fn to_big(&self, value: &$prim, scratch: &mut BigComplex) {
                scratch.set_i64(i64::from(*value));
            }

            fn from_big(&self, target: &mut $prim, big: &BigComplex) {
                *target = saturate_i64(big.to_i64());
            }
        }
    };
}

bounded_int_sample_type!(
    /// 8-bit signed integer sample.
    Int8Type, i8, "8-bit signed integer");
bounded_int_sample_type!(
    /// 8-bit unsigned integer sample.
    UInt8Type, u8, "8-bit unsigned integer");
bounded_int_sample_type!(
    /// 16-bit signed integer sample.
    Int16Type, i16, "16-bit signed integer");
bounded_int_sample_type!(
    /// 16-bit unsigned integer sample.
    UInt16Type, u16, "16-bit unsigned integer");
bounded_int_sample_type!(
    /// 32-bit signed integer sample.
    Int32Type, i32, "32-bit signed integer");
bounded_int_sample_type!(
    /// 32-bit unsigned integer sample.
    UInt32Type, u32, "32-bit unsigned integer");

/// 64-bit signed integer sample.
///
/// Integer representation only: values beyond 2^53 are not exact in `f64`,
/// so the floating flag stays down and conversions to float-only types take
/// the integer-widening route instead.
pub struct Int64Type;

impl SampleType for Int64Type {
    type Value = i64;

    fn name(&self) -> &'static str {
        "64-bit signed integer"
    }

    fn has_integer_representation(&self) -> bool {
        true
    }

    fn has_floating_representation(&self) -> bool {
        false
    }

    fn to_i64(&self, value: &i64) -> i64 {
        *value
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(&self, value: &i64) -> f64 {
        *value as f64
    }

    fn set_i64(&self, target: &mut i64, v: i64) {
        *target = v;
    }

    fn set_f64(&self, target: &mut i64, v: f64) {
        *target = f64_to_i64_trunc(v);
    }

    fn to_big(&self, value: &i64, scratch: &mut BigComplex) {
        scratch.set_i64(*value);
    }

    fn from_big(&self, target: &mut i64, big: &BigComplex) {
        *target = big.to_i64();
    }
}

/// 64-bit unsigned integer sample.
///
/// Integer representation only. Values above `i64::MAX` saturate on the
/// 64-bit integer route; the scratch route carries them exactly.
pub struct UInt64Type;

impl SampleType for UInt64Type {
    type Value = u64;

    fn name(&self) -> &'static str {
        "64-bit unsigned integer"
    }

    fn has_integer_representation(&self) -> bool {
        true
    }

    fn has_floating_representation(&self) -> bool {
        false
    }

    fn to_i64(&self, value: &u64) -> i64 {
        i64::try_from(*value).unwrap_or(i64::MAX)
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(&self, value: &u64) -> f64 {
        *value as f64
    }

    fn set_i64(&self, target: &mut u64, v: i64) {
        *target = saturate_i64(v);
    }

    fn set_f64(&self, target: &mut u64, v: f64) {
        *target = saturate_i64(f64_to_i64_trunc(v));
    }

    fn to_big(&self, value: &u64, scratch: &mut BigComplex) {
        scratch.real = BigRational::from_integer(BigInt::from(*value));
        scratch.imaginary.set_zero();
    }

    fn from_big(&self, target: &mut u64, big: &BigComplex) {
        let whole = big.real.to_integer();
        *target = whole.to_u64()
                       .unwrap_or(if whole.is_negative() { 0 } else { u64::MAX });
    }
}

/// 32-bit float sample.
pub struct Float32Type;

impl SampleType for Float32Type {
    type Value = f32;

    fn name(&self) -> &'static str {
        "32-bit float"
    }

    fn has_integer_representation(&self) -> bool {
        false
    }

    fn has_floating_representation(&self) -> bool {
        true
    }

    fn to_i64(&self, value: &f32) -> i64 {
        f64_to_i64_trunc(f64::from(*value))
    }

    fn to_f64(&self, value: &f32) -> f64 {
        f64::from(*value)
    }

    #[allow(clippy::cast_precision_loss)]
    fn set_i64(&self, target: &mut f32, v: i64) {
        *target = v as f32;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn set_f64(&self, target: &mut f32, v: f64) {
        *target = v as f32;
    }

    fn to_big(&self, value: &f32, scratch: &mut BigComplex) {
        scratch.set_f64(f64::from(*value));
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_big(&self, target: &mut f32, big: &BigComplex) {
        *target = big.to_f64() as f32;
    }
}

/// 64-bit float sample.
pub struct Float64Type;

impl SampleType for Float64Type {
    type Value = f64;

    fn name(&self) -> &'static str {
        "64-bit float"
    }

    fn has_integer_representation(&self) -> bool {
        false
    }

    fn has_floating_representation(&self) -> bool {
        true
    }

    fn to_i64(&self, value: &f64) -> i64 {
        f64_to_i64_trunc(*value)
    }

    fn to_f64(&self, value: &f64) -> f64 {
        *value
    }

    #[allow(clippy::cast_precision_loss)]
    fn set_i64(&self, target: &mut f64, v: i64) {
        *target = v as f64;
    }

    fn set_f64(&self, target: &mut f64, v: f64) {
        *target = v;
    }

    fn to_big(&self, value: &f64, scratch: &mut BigComplex) {
        scratch.set_f64(*value);
    }

    fn from_big(&self, target: &mut f64, big: &BigComplex) {
        *target = big.to_f64();
    }
}

/// 1-bit unsigned integer sample.
///
/// Carries `false` as 0 and `true` as 1. Incoming values truncate toward
/// zero first, so anything in `(-1, 1)` lands on `false` and everything
/// else on `true`.
pub struct BitType;

impl SampleType for BitType {
    type Value = bool;

    fn name(&self) -> &'static str {
        "1-bit unsigned integer"
    }

    fn has_integer_representation(&self) -> bool {
        true
    }

    fn has_floating_representation(&self) -> bool {
        true
    }

    fn to_i64(&self, value: &bool) -> i64 {
        i64::from(*value)
    }

    fn to_f64(&self, value: &bool) -> f64 {
        f64::from(u8::from(*value))
    }

    fn set_i64(&self, target: &mut bool, v: i64) {
        *target = v != 0;
    }

    fn set_f64(&self, target: &mut bool, v: f64) {
        *target = f64_to_i64_trunc(v) != 0;
    }

    fn to_big(&self, value: &bool, scratch: &mut BigComplex) {
        scratch.set_i64(i64::from(*value));
    }

    fn from_big(&self, target: &mut bool, big: &BigComplex) {
        *target = big.to_i64() != 0;
    }
}
