use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::types::{big_complex::BigComplex, descriptor::SampleType};

/// Unbounded signed integer sample.
///
/// No fixed-width representation fits the full domain, so both capability
/// flags stay down and every conversion involving this type takes the
/// scratch route.
pub struct UnboundedIntType;

impl SampleType for UnboundedIntType {
    type Value = BigInt;

    fn name(&self) -> &'static str {
        "unbounded integer"
    }

    fn has_integer_representation(&self) -> bool {
        false
    }

    fn has_floating_representation(&self) -> bool {
        false
    }

    fn to_i64(&self, value: &BigInt) -> i64 {
        value.to_i64()
             .unwrap_or(if value.is_negative() { i64::MIN } else { i64::MAX })
    }

    fn to_f64(&self, value: &BigInt) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    fn set_i64(&self, target: &mut BigInt, v: i64) {
        *target = BigInt::from(v);
    }

    fn set_f64(&self, target: &mut BigInt, v: f64) {
        *target = BigRational::from_float(v).map_or_else(BigInt::zero, |r| r.to_integer());
    }

    fn to_big(&self, value: &BigInt, scratch: &mut BigComplex) {
        scratch.real = BigRational::from_integer(value.clone());
        scratch.imaginary.set_zero();
    }

    fn from_big(&self, target: &mut BigInt, big: &BigComplex) {
        *target = big.real.to_integer();
    }
}

/// Arbitrary-precision complex sample.
///
/// The value representation and the scratch representation coincide, so the
/// scratch conversions are plain copies in both directions.
pub struct BigComplexType;

impl SampleType for BigComplexType {
    type Value = BigComplex;

    fn name(&self) -> &'static str {
        "arbitrary-precision complex"
    }

    fn has_integer_representation(&self) -> bool {
        false
    }

    fn has_floating_representation(&self) -> bool {
        false
    }

    fn to_i64(&self, value: &BigComplex) -> i64 {
        value.to_i64()
    }

    fn to_f64(&self, value: &BigComplex) -> f64 {
        value.to_f64()
    }

    fn set_i64(&self, target: &mut BigComplex, v: i64) {
        target.set_i64(v);
    }

    fn set_f64(&self, target: &mut BigComplex, v: f64) {
        target.set_f64(v);
    }

    fn to_big(&self, value: &BigComplex, scratch: &mut BigComplex) {
        scratch.clone_from(value);
    }

    fn from_big(&self, target: &mut BigComplex, big: &BigComplex) {
        target.clone_from(big);
    }
}
