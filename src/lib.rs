//! # numcast
//!
//! numcast converts numeric sample values between differing sample types.
//! It picks the cheapest representation both types support (64-bit integer
//! first, then 64-bit float, then the mixed pairings) and falls back to an
//! arbitrary-precision complex intermediate when no fixed-width route
//! exists, so that unbounded and complex sample types still convert
//! losslessly.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Converts values between sample types.
///
/// This module holds the cast routine itself. It inspects the capability
/// flags of the two sample types involved, performs the conversion over the
/// cheapest mutually supported representation, and reaches for the
/// caller-supplied arbitrary-precision scratch value only when no
/// fixed-width route exists.
///
/// # Responsibilities
/// - Selects the conversion route in a fixed priority order.
/// - Provides a fallible form for callers without a scratch value and an
///   infallible form for callers with one.
/// - Writes only the destination (and, on the slow route, the scratch
///   value); the source is never mutated.
pub mod cast;
/// Provides unified error types for casting.
///
/// This module defines the errors that can be raised while converting a
/// value between sample types. It standardizes error reporting and carries
/// the names of both types involved for debugging and user feedback.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes of the cast routine.
/// - Attaches both sample type names for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Sample type descriptors and value representations.
///
/// This module defines the descriptor trait that every concrete numeric
/// representation implements, the arbitrary-precision complex intermediate,
/// and the descriptors shipped with the crate: the fixed-width integer,
/// float, and 1-bit samples, plus the unbounded integer and complex
/// samples.
///
/// # Responsibilities
/// - Declares the capability-and-conversion seam the cast routine works
///   through.
/// - Implements that seam once per shipped numeric representation.
/// - Defines the reusable arbitrary-precision scratch value.
pub mod types;
/// General utilities for safe numeric conversion.
///
/// This module provides the conversion helpers shared by the cast routine
/// and the sample type descriptors: truncation toward zero, saturation at
/// type bounds, and the exactness limit of 64-bit floats.
///
/// # Responsibilities
/// - Converts `f64` to `i64` by truncation without undefined edge cases.
/// - Pins out-of-range integers to the destination type's bounds.
pub mod util;
