use crate::{
    error::CastError,
    types::{big_complex::BigComplex, descriptor::SampleType},
    util::num::f64_to_i64_trunc,
};

/// Fills an output with a cast from an input, given descriptors for both
/// sample types.
///
/// The conversion runs over the cheapest representation both types support,
/// tried in a fixed order: 64-bit integer, 64-bit float, integer widened to
/// float, float truncated toward zero to integer. The first matching route
/// wins and no other route runs.
///
/// This form has no fallback: when no fixed-width route exists it returns
/// an error before writing anything. Use [`cast_with_scratch`] for a cast
/// that always succeeds.
///
/// # Parameters
/// - `input_type`: Descriptor of the input sample type.
/// - `input`: The value to cast from.
/// - `output_type`: Descriptor of the output sample type.
/// - `output`: The value to cast into.
///
/// # Returns
/// - `Ok(())`: The output now holds the converted value.
/// - `Err(CastError::Unsupported)`: No fixed-width route exists between the
///   two types; the output is untouched.
///
/// # Example
/// ```
/// use numcast::{
///     cast::cast,
///     types::primitive::{Float64Type, Int16Type},
/// };
///
/// let mut real = 0.0_f64;
/// cast(&Int16Type, &-5_i16, &Float64Type, &mut real).unwrap();
/// assert_eq!(real, -5.0);
///
/// let mut narrow = 0_i16;
/// cast(&Float64Type, &9.99_f64, &Int16Type, &mut narrow).unwrap();
/// assert_eq!(narrow, 9);
/// ```
pub fn cast<U, V>(input_type: &U,
                  input: &U::Value,
                  output_type: &V,
                  output: &mut V::Value)
                  -> Result<(), CastError>
    where U: SampleType,
          V: SampleType
{
    if fast_cast(input_type, input, output_type, output) {
        Ok(())
    } else {
        Err(CastError::Unsupported { from: input_type.name(),
                                     to:   output_type.name(), })
    }
}

/// Fills an output with a cast from an input, falling back to the
/// caller-supplied arbitrary-precision scratch value when no fixed-width
/// route exists. This form always succeeds.
///
/// A matching fixed-width route short-circuits: the output is assigned and
/// the scratch value is left untouched. Only when neither the integer nor
/// the floating pairing applies does the conversion run through the scratch
/// value, input to scratch to output. The scratch value is borrowed for the
/// duration of the call and can be reused across any number of casts.
///
/// # Parameters
/// - `input_type`: Descriptor of the input sample type.
/// - `input`: The value to cast from.
/// - `output_type`: Descriptor of the output sample type.
/// - `output`: The value to cast into.
/// - `scratch`: The working value the routine may use internally.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use numcast::{
///     cast::cast_with_scratch,
///     types::{big_complex::BigComplex, primitive::Float64Type, unbounded::UnboundedIntType},
/// };
///
/// let mut scratch = BigComplex::zero();
/// let mut real = 0.0_f64;
/// cast_with_scratch(&UnboundedIntType,
///                   &BigInt::from(250),
///                   &Float64Type,
///                   &mut real,
///                   &mut scratch);
/// assert_eq!(real, 250.0);
/// ```
pub fn cast_with_scratch<U, V>(input_type: &U,
                               input: &U::Value,
                               output_type: &V,
                               output: &mut V::Value,
                               scratch: &mut BigComplex)
    where U: SampleType,
          V: SampleType
{
    if fast_cast(input_type, input, output_type, output) {
        return;
    }

    // slowest and most general approach: usually for unbounded or complex types

    input_type.to_big(input, scratch);
    output_type.from_big(output, scratch);
}

/// Tries the fixed-width conversion routes in priority order.
///
/// Returns `true` when a route matched and the output was assigned, `false`
/// when the two types share no 64-bit representation.
#[allow(clippy::cast_precision_loss)]
fn fast_cast<U, V>(input_type: &U,
                   input: &U::Value,
                   output_type: &V,
                   output: &mut V::Value)
                   -> bool
    where U: SampleType,
          V: SampleType
{
    if input_type.has_integer_representation() && output_type.has_integer_representation() {
        output_type.set_i64(output, input_type.to_i64(input));
    } else if input_type.has_floating_representation()
              && output_type.has_floating_representation()
    {
        output_type.set_f64(output, input_type.to_f64(input));
    } else if input_type.has_integer_representation()
              && output_type.has_floating_representation()
    {
        output_type.set_f64(output, input_type.to_i64(input) as f64);
    } else if input_type.has_floating_representation()
              && output_type.has_integer_representation()
    {
        output_type.set_i64(output, f64_to_i64_trunc(input_type.to_f64(input)));
    } else {
        return false;
    }

    true
}
