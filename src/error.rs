/// Casting errors.
///
/// Contains the error types that can be raised while converting a value
/// between sample types. Cast errors signal that no fixed-width conversion
/// route exists between the two types involved and that the caller did not
/// supply an arbitrary-precision scratch value to fall back on.
pub mod cast_error;

pub use cast_error::CastError;
