/// The arbitrary-precision conversion intermediate.
///
/// Declares `BigComplex`, a complex number with exact rational real and
/// imaginary parts. The cast routine borrows one from the caller, mutates
/// it in place, and never retains it, so a single instance can be reused
/// across many conversions to amortize allocation cost.
pub mod big_complex;
/// The sample type descriptor trait.
///
/// Declares `SampleType`, the capability-and-conversion seam implemented
/// once per concrete numeric representation. The cast routine discovers the
/// cheapest valid conversion route by querying a descriptor's capability
/// flags instead of inspecting values at runtime.
pub mod descriptor;
/// Fixed-width sample types.
///
/// Contains the descriptors for the bounded integer samples (`i8` through
/// `u64`), the float samples (`f32`, `f64`), and the 1-bit sample. These
/// are the types the fast conversion routes serve.
pub mod primitive;
/// Arbitrary-precision sample types.
///
/// Contains the descriptors for the unbounded integer and the
/// arbitrary-precision complex samples. Neither fits a 64-bit
/// representation, so both convert exclusively over the scratch value.
pub mod unbounded;
