use num_bigint::BigInt;
use num_rational::BigRational;
use numcast::{
    cast::{cast, cast_with_scratch},
    error::CastError,
    types::{
        big_complex::BigComplex,
        descriptor::SampleType,
        primitive::{
            BitType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type, Int64Type,
            UInt8Type, UInt16Type, UInt64Type,
        },
        unbounded::{BigComplexType, UnboundedIntType},
    },
    util::num::{MAX_SAFE_I64_INT, f64_to_i64_trunc, saturate_i64},
};

/// A 16-bit signed sample that only advertises the integer route, for
/// exercising the mixed integer-to-float pairing in isolation.
struct IntegerOnlyInt16;

impl SampleType for IntegerOnlyInt16 {
    type Value = i16;

    fn name(&self) -> &'static str {
        "integer-only 16-bit signed integer"
    }

    fn has_integer_representation(&self) -> bool {
        true
    }

    fn has_floating_representation(&self) -> bool {
        false
    }

    fn to_i64(&self, value: &i16) -> i64 {
        i64::from(*value)
    }

    fn to_f64(&self, value: &i16) -> f64 {
        f64::from(*value)
    }

    fn set_i64(&self, target: &mut i16, v: i64) {
        *target = saturate_i64(v);
    }

    fn set_f64(&self, target: &mut i16, v: f64) {
        *target = saturate_i64(f64_to_i64_trunc(v));
    }

    fn to_big(&self, value: &i16, scratch: &mut BigComplex) {
        scratch.set_i64(i64::from(*value));
    }

    fn from_big(&self, target: &mut i16, big: &BigComplex) {
        *target = saturate_i64(big.to_i64());
    }
}

#[test]
fn integer_pairs_round_trip_exactly() {
    let mut wide = 0_i32;
    cast(&Int16Type, &-12_345_i16, &Int32Type, &mut wide).unwrap();
    assert_eq!(wide, -12_345);

    let mut back = 0_i16;
    cast(&Int32Type, &wide, &Int16Type, &mut back).unwrap();
    assert_eq!(back, -12_345);

    let mut byte = 0_u8;
    cast(&Int64Type, &200_i64, &UInt8Type, &mut byte).unwrap();
    assert_eq!(byte, 200);
}

#[test]
fn floating_pairs_preserve_value() {
    let mut wide = 0.0_f64;
    cast(&Float32Type, &0.25_f32, &Float64Type, &mut wide).unwrap();
    assert_eq!(wide, 0.25);

    let mut narrow = 0.0_f32;
    cast(&Float64Type, &1.5_f64, &Float32Type, &mut narrow).unwrap();
    assert_eq!(narrow, 1.5);
}

#[test]
fn integer_to_floating_is_exact_up_to_2_pow_53() {
    let mut real = 0.0_f64;
    cast(&Int64Type, &MAX_SAFE_I64_INT, &Float64Type, &mut real).unwrap();
    assert_eq!(real, 9_007_199_254_740_991.0);

    cast(&Int64Type, &-MAX_SAFE_I64_INT, &Float64Type, &mut real).unwrap();
    assert_eq!(real, -9_007_199_254_740_991.0);
}

#[test]
fn floating_to_integer_truncates_toward_zero() {
    let mut whole = 0_i64;
    cast(&Float64Type, &3.7_f64, &Int64Type, &mut whole).unwrap();
    assert_eq!(whole, 3);

    cast(&Float64Type, &-3.7_f64, &Int64Type, &mut whole).unwrap();
    assert_eq!(whole, -3);

    cast(&Float64Type, &9.99_f64, &Int64Type, &mut whole).unwrap();
    assert_eq!(whole, 9);

    // the same rule holds when the destination is a bounded integer
    // reached over the floating pairing
    let mut narrow = 0_i16;
    cast(&Float64Type, &9.99_f64, &Int16Type, &mut narrow).unwrap();
    assert_eq!(narrow, 9);
}

#[test]
fn integer_only_source_widens_into_floating_destination() {
    let mut real = 0.0_f64;
    cast(&IntegerOnlyInt16, &-5_i16, &Float64Type, &mut real).unwrap();
    assert_eq!(real, -5.0);
}

#[test]
fn identity_casts_preserve_values() {
    let mut whole = 0_i64;
    cast(&Int64Type, &-77_i64, &Int64Type, &mut whole).unwrap();
    assert_eq!(whole, -77);

    let mut real = 0.0_f64;
    cast(&Float64Type, &0.1_f64, &Float64Type, &mut real).unwrap();
    assert_eq!(real, 0.1);

    let mut bit = false;
    cast(&BitType, &true, &BitType, &mut bit).unwrap();
    assert!(bit);
}

#[test]
fn unsupported_pairs_fail_without_scratch() {
    let mut target = BigInt::from(0);
    let err = cast(&UnboundedIntType, &BigInt::from(7), &UnboundedIntType, &mut target).unwrap_err();

    assert!(matches!(err, CastError::Unsupported { .. }));
    // the failure check runs before any assignment
    assert_eq!(target, BigInt::from(0));
}

#[test]
fn scratch_form_never_fails_and_matches_the_direct_conversion() {
    let giant = BigInt::from(u64::MAX) * BigInt::from(1_000_000_u64);

    let mut scratch = BigComplex::zero();
    let mut out = BigInt::from(0);
    cast_with_scratch(&UnboundedIntType, &giant, &UnboundedIntType, &mut out, &mut scratch);
    assert_eq!(out, giant);

    let mut direct = BigComplex::zero();
    UnboundedIntType.to_big(&giant, &mut direct);
    let mut from_direct = BigInt::from(0);
    UnboundedIntType.from_big(&mut from_direct, &direct);
    assert_eq!(out, from_direct);
}

/// The fixed-width routes and the arbitrary-precision fallback are mutually
/// exclusive: a matching route assigns the output and returns, leaving the
/// scratch value alone. An implementation that re-ran every conversion
/// through the intermediate whenever a scratch value is present would
/// overwrite the sentinel below.
#[test]
fn fast_path_leaves_scratch_untouched() {
    let mut scratch = BigComplex::from(123_i64);
    let mut output = 0_i32;
    cast_with_scratch(&Int16Type, &9_i16, &Int32Type, &mut output, &mut scratch);

    assert_eq!(output, 9);
    assert_eq!(scratch, BigComplex::from(123_i64));
}

#[test]
fn unbounded_values_reach_fixed_width_destinations_through_scratch() {
    let mut scratch = BigComplex::zero();

    let mut real = 0.0_f64;
    cast_with_scratch(&UnboundedIntType, &BigInt::from(250), &Float64Type, &mut real, &mut scratch);
    assert_eq!(real, 250.0);

    // the same scratch value is reusable for the next conversion
    let mut byte = 0_u8;
    cast_with_scratch(&UnboundedIntType, &BigInt::from(250), &UInt8Type, &mut byte, &mut scratch);
    assert_eq!(byte, 250);
}

#[test]
fn fractional_values_truncate_toward_zero_on_the_scratch_route() {
    let mut scratch = BigComplex::zero();
    let mut whole = BigInt::from(0);

    cast_with_scratch(&Float64Type, &2.75_f64, &UnboundedIntType, &mut whole, &mut scratch);
    assert_eq!(whole, BigInt::from(2));

    cast_with_scratch(&Float64Type, &-2.75_f64, &UnboundedIntType, &mut whole, &mut scratch);
    assert_eq!(whole, BigInt::from(-2));
}

#[test]
fn imaginary_parts_are_discarded_for_real_destinations() {
    let value = BigComplex::new(BigRational::from_integer(BigInt::from(4)),
                                BigRational::from_integer(BigInt::from(9)));

    let mut scratch = BigComplex::zero();
    let mut real = 0.0_f64;
    cast_with_scratch(&BigComplexType, &value, &Float64Type, &mut real, &mut scratch);
    assert_eq!(real, 4.0);
}

#[test]
fn out_of_range_integers_saturate_at_type_bounds() {
    let mut narrow = 0_i8;
    cast(&Int64Type, &1_000_i64, &Int8Type, &mut narrow).unwrap();
    assert_eq!(narrow, i8::MAX);

    cast(&Int64Type, &-1_000_i64, &Int8Type, &mut narrow).unwrap();
    assert_eq!(narrow, i8::MIN);

    let mut unsigned = 0_u16;
    cast(&Int64Type, &-4_i64, &UInt16Type, &mut unsigned).unwrap();
    assert_eq!(unsigned, 0);
}

#[test]
fn u64_beyond_i64_range_saturates_on_the_integer_route() {
    let mut wide = 0_i64;
    cast(&UInt64Type, &u64::MAX, &Int64Type, &mut wide).unwrap();
    assert_eq!(wide, i64::MAX);

    // the scratch route carries the same value exactly
    let mut scratch = BigComplex::zero();
    let mut exact = BigInt::from(0);
    cast_with_scratch(&UInt64Type, &u64::MAX, &UnboundedIntType, &mut exact, &mut scratch);
    assert_eq!(exact, BigInt::from(u64::MAX));
}

#[test]
fn big_complex_displays_like_a_number() {
    assert_eq!(BigComplex::default().to_string(), "0");
    assert_eq!(BigComplex::from(3_i64).to_string(), "3");
    assert_eq!(BigComplex::from(0.5_f64).to_string(), "1/2");

    let c = BigComplex::new(BigRational::from_integer(BigInt::from(1)),
                            BigRational::from_integer(BigInt::from(-2)));
    assert_eq!(c.to_string(), "1 - 2i");
}

#[test]
fn bit_samples_convert_like_tiny_integers() {
    let mut bit = false;
    cast(&Int32Type, &3_i32, &BitType, &mut bit).unwrap();
    assert!(bit);

    // truncation toward zero drops 0.4 before the zero test
    cast(&Float64Type, &0.4_f64, &BitType, &mut bit).unwrap();
    assert!(!bit);

    let mut byte = 7_u8;
    cast(&BitType, &true, &UInt8Type, &mut byte).unwrap();
    assert_eq!(byte, 1);
}
