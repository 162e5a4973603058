//! Order and argument classification.
//!
//! Decides once per call whether evaluation stays on the real axis or
//! goes through the complex routines, and what kind of order is involved.

use num_complex::Complex;

use crate::machine::BesselFloat;
use crate::types::{Argument, Family};

/// Shape of an order ν.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderClass {
    /// ν ∈ ℤ.
    Integer,
    /// ν ∈ ℤ + 1/2.
    HalfInteger,
    /// Anything else, including NaN and ±∞.
    General,
}

impl OrderClass {
    /// Classify `nu`.
    pub fn of<T: BesselFloat>(nu: T) -> Self {
        if !nu.is_finite() {
            return OrderClass::General;
        }
        let shifted = nu - T::from_f64(0.5);
        if nu == nu.floor() {
            OrderClass::Integer
        } else if shifted == shifted.floor() {
            OrderClass::HalfInteger
        } else {
            OrderClass::General
        }
    }
}

/// Evaluation path: the real line or the complex plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Path<T: BesselFloat> {
    /// Real argument, real result.
    Real(T),
    /// Complex argument, complex result.
    Complex(Complex<T>),
}

impl<T: BesselFloat> Path<T> {
    /// Select the path for `family` at `argument`.
    ///
    /// Hankel functions are complex-valued everywhere, so a real argument
    /// is lifted to `x + 0i`. The other families follow the argument.
    pub fn route(family: Family, argument: Argument<T>) -> Self {
        match (family, argument) {
            (Family::H(_), arg) => Path::Complex(arg.to_complex()),
            (_, Argument::Real(x)) => Path::Real(x),
            (_, Argument::Complex(z)) => Path::Complex(z),
        }
    }

    /// `true` when the argument is exactly zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Path::Real(x) => x == T::zero(),
            Path::Complex(z) => z.re == T::zero() && z.im == T::zero(),
        }
    }

    /// `true` on the real path.
    pub fn is_real(&self) -> bool {
        matches!(self, Path::Real(_))
    }
}

/// Whether `family` of order `nu` is real-valued at the real point `x`.
///
/// Non-negative arguments always are. On the negative axis only J and I of
/// integer order are (through J_n(-x) = (-1)^n J_n(x)); Y and K have a
/// branch cut there.
pub fn real_representable<T: BesselFloat>(family: Family, nu: T, x: T) -> bool {
    if x >= T::zero() || x.is_nan() {
        return true;
    }
    match family {
        Family::J | Family::I => OrderClass::of(nu) == OrderClass::Integer,
        Family::Y | Family::K | Family::H(_) => false,
    }
}
