use std::fmt::Display;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Represents a complex number with arbitrary-precision rational parts.
///
/// This is the universal conversion intermediate: every sample type can be
/// written into it losslessly, so it serves as the fallback route between
/// types that share no 64-bit representation. Callers allocate one, pass it
/// to the cast routine by mutable reference, and reuse it across as many
/// conversions as they like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigComplex {
    /// The real part of the number.
    pub real:      BigRational,
    /// The imaginary part of the number.
    pub imaginary: BigRational,
}

impl BigComplex {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Parameters
    /// - `real`: The real part.
    /// - `imaginary`: The imaginary part.
    ///
    /// # Returns
    /// The new `BigComplex`.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use num_rational::BigRational;
    /// use numcast::types::big_complex::BigComplex;
    ///
    /// let c = BigComplex::new(BigRational::from_integer(BigInt::from(5)),
    ///                         BigRational::from_integer(BigInt::from(-1)));
    /// assert_eq!(c.to_i64(), 5);
    /// ```
    #[must_use]
    pub fn new(real: BigRational, imaginary: BigRational) -> Self {
        Self { real, imaginary }
    }

    /// Constructs `0 + 0i`.
    ///
    /// # Example
    /// ```
    /// use numcast::types::big_complex::BigComplex;
    ///
    /// let c = BigComplex::zero();
    /// assert_eq!(c.to_f64(), 0.0);
    /// ```
    #[must_use]
    pub fn zero() -> Self {
        Self { real:      BigRational::zero(),
               imaginary: BigRational::zero(), }
    }

    /// Assigns a 64-bit signed integer, clearing the imaginary part.
    ///
    /// The assignment is exact for every `i64`.
    ///
    /// # Example
    /// ```
    /// use numcast::types::big_complex::BigComplex;
    ///
    /// let mut c = BigComplex::zero();
    /// c.set_i64(-42);
    /// assert_eq!(c.to_i64(), -42);
    /// ```
    pub fn set_i64(&mut self, v: i64) {
        self.real = BigRational::from_integer(BigInt::from(v));
        self.imaginary.set_zero();
    }

    /// Assigns a 64-bit float, clearing the imaginary part.
    ///
    /// Every finite `f64` is a dyadic rational and is stored exactly.
    /// Non-finite values have no rational form and collapse to zero.
    ///
    /// # Example
    /// ```
    /// use numcast::types::big_complex::BigComplex;
    ///
    /// let mut c = BigComplex::zero();
    /// c.set_f64(2.75);
    /// assert_eq!(c.to_f64(), 2.75);
    ///
    /// c.set_f64(f64::NAN);
    /// assert_eq!(c.to_f64(), 0.0);
    /// ```
    pub fn set_f64(&mut self, v: f64) {
        self.real = BigRational::from_float(v).unwrap_or_else(BigRational::zero);
        self.imaginary.set_zero();
    }

    /// Reads the real part as a 64-bit signed integer, truncating toward
    /// zero.
    ///
    /// Values beyond the `i64` range pin to the nearer bound. The imaginary
    /// part is ignored.
    ///
    /// # Example
    /// ```
    /// use numcast::types::big_complex::BigComplex;
    ///
    /// let mut c = BigComplex::zero();
    /// c.set_f64(-3.7);
    /// assert_eq!(c.to_i64(), -3);
    /// ```
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        let whole = self.real.to_integer();
        whole.to_i64()
             .unwrap_or(if whole.is_negative() { i64::MIN } else { i64::MAX })
    }

    /// Reads the real part as the nearest 64-bit float.
    ///
    /// Values beyond the `f64` range come back as infinities. The imaginary
    /// part is ignored.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.real.to_f64().unwrap_or(f64::NAN)
    }
}

impl Default for BigComplex {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigComplex {
    fn from(v: i64) -> Self {
        let mut c = Self::zero();
        c.set_i64(v);
        c
    }
}

impl From<f64> for BigComplex {
    fn from(v: f64) -> Self {
        let mut c = Self::zero();
        c.set_f64(v);
        c
    }
}

impl Display for BigComplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.real.is_zero(), self.imaginary.is_zero()) {
            (true, true) => write!(f, "0"),
            (false, true) => write!(f, "{}", self.real),
            (true, false) => write!(f, "{}i", self.imaginary),
            (false, false) if self.imaginary.is_positive() => {
                write!(f, "{} + {}i", self.real, self.imaginary)
            },
            (false, false) => write!(f, "{} - {}i", self.real, -self.imaginary.clone()),
        }
    }
}
