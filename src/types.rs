//! Core types for cylinder function evaluation.

use core::fmt;

use num_complex::Complex;

use crate::machine::BesselFloat;

/// Kind of Hankel function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HankelKind {
    /// H^(1) = J + iY.
    First,
    /// H^(2) = J - iY.
    Second,
}

impl TryFrom<i32> for HankelKind {
    type Error = Error;

    /// Accepts exactly `1` and `2`.
    fn try_from(k: i32) -> Result<Self, Error> {
        match k {
            1 => Ok(HankelKind::First),
            2 => Ok(HankelKind::Second),
            _ => Err(Error::Domain),
        }
    }
}

/// Function family being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Bessel function of the first kind.
    J,
    /// Bessel function of the second kind.
    Y,
    /// Modified Bessel function of the first kind.
    I,
    /// Modified Bessel function of the second kind.
    K,
    /// Hankel function of the given kind.
    H(HankelKind),
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::J => f.write_str("J"),
            Family::Y => f.write_str("Y"),
            Family::I => f.write_str("I"),
            Family::K => f.write_str("K"),
            Family::H(HankelKind::First) => f.write_str("H1"),
            Family::H(HankelKind::Second) => f.write_str("H2"),
        }
    }
}

/// Argument of a cylinder function: a real scalar or a complex number.
///
/// The variant decides the evaluation path for J, Y, I and K; Hankel
/// functions always use the complex path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<T: BesselFloat> {
    /// Real argument; J, Y, I, K return a real value.
    Real(T),
    /// Complex argument; every family returns a complex value.
    Complex(Complex<T>),
}

impl From<f64> for Argument<f64> {
    fn from(x: f64) -> Self {
        Argument::Real(x)
    }
}

impl From<f32> for Argument<f32> {
    fn from(x: f32) -> Self {
        Argument::Real(x)
    }
}

impl<T: BesselFloat> From<Complex<T>> for Argument<T> {
    fn from(z: Complex<T>) -> Self {
        Argument::Complex(z)
    }
}

impl<T: BesselFloat> Argument<T> {
    /// The argument as a complex number (`x + 0i` for a real argument).
    #[inline]
    pub fn to_complex(self) -> Complex<T> {
        match self {
            Argument::Real(x) => Complex::new(x, T::zero()),
            Argument::Complex(z) => z,
        }
    }
}

/// Value of a cylinder function.
///
/// May hold signed infinities or NaN; failures are reported through
/// [`Error`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<T: BesselFloat> {
    /// Real-valued result.
    Real(T),
    /// Complex-valued result.
    Complex(Complex<T>),
}

impl<T: BesselFloat> Value<T> {
    /// Real part of the value.
    #[inline]
    pub fn re(self) -> T {
        match self {
            Value::Real(x) => x,
            Value::Complex(z) => z.re,
        }
    }

    /// Imaginary part of the value (zero for a real value).
    #[inline]
    pub fn im(self) -> T {
        match self {
            Value::Real(_) => T::zero(),
            Value::Complex(z) => z.im,
        }
    }

    /// The value as a complex number.
    #[inline]
    pub fn to_complex(self) -> Complex<T> {
        match self {
            Value::Real(x) => Complex::new(x, T::zero()),
            Value::Complex(z) => z,
        }
    }

    /// `Some(x)` for a real value.
    #[inline]
    pub fn as_real(self) -> Option<T> {
        match self {
            Value::Real(x) => Some(x),
            Value::Complex(_) => None,
        }
    }

    /// `Some(z)` for a complex value.
    #[inline]
    pub fn as_complex(self) -> Option<Complex<T>> {
        match self {
            Value::Real(_) => None,
            Value::Complex(z) => Some(z),
        }
    }

    /// `true` if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        match self {
            Value::Real(x) => x.is_nan(),
            Value::Complex(z) => z.re.is_nan() || z.im.is_nan(),
        }
    }
}

impl<T: BesselFloat + fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(x) => fmt::Display::fmt(x, f),
            Value::Complex(z) => fmt::Display::fmt(z, f),
        }
    }
}

/// Error type for cylinder function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Arguments outside the mathematical domain of the selected path
    /// (e.g. z=0 for K/Y/H on the complex path, derivative order too large).
    Domain,
    /// Result magnitude exceeds the representable range.
    Overflow,
    /// Result magnitude is below the representable range.
    Underflow,
    /// Algorithm did not meet termination criteria.
    ConvergenceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain => {
                write!(f, "domain error: argument outside the function's domain")
            }
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
            Error::Underflow => {
                write!(f, "underflow: result magnitude below representable range")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: algorithm did not meet termination criteria"
                )
            }
        }
    }
}

impl core::error::Error for Error {}
