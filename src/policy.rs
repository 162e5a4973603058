//! Corrections at known singular points.
//!
//! One policy covers every family: it sees the raw outcome of a kernel call
//! (or of a derivative combination) and replaces the few results that are
//! known to carry the wrong sign, an avoidable failure, or an underflow.
//! Everything else, NaN included, passes through untouched.

use log::debug;
use num_complex::Complex;

use crate::classify::{OrderClass, Path};
use crate::machine::BesselFloat;
use crate::types::{Error, Family, Value};

/// Reconcile `raw` for `family` of order `nu` at `path`, derivative `n`.
///
/// Corrections:
/// - I at real zero, ν non-integer, ν-n < 0: -∞ (the value for a negative
///   non-integer order, carried into every derivative that reaches one)
/// - Y at zero, ν = 0, n = 1: +∞, also replacing a failure
/// - Y at real zero, ν a negative half-integer, n = 0: 0
/// - `Underflow`: zero of the path's domain
///
/// Never introduces a failure.
pub fn reconcile<T: BesselFloat>(
    raw: Result<Value<T>, Error>,
    family: Family,
    nu: T,
    path: Path<T>,
    n: u32,
) -> Result<Value<T>, Error> {
    let zero = T::zero();
    let class = OrderClass::of(nu);
    let shifted = nu - T::from_f64(n as f64);

    if path.is_zero() && path.is_real() {
        if family == Family::I && class != OrderClass::Integer && shifted < zero {
            return corrected(raw, family, nu, n, Value::Real(T::neg_infinity()));
        }
        if family == Family::Y && class == OrderClass::HalfInteger && nu < zero && n == 0 {
            return corrected(raw, family, nu, n, Value::Real(zero));
        }
    }

    if path.is_zero() && family == Family::Y && nu == zero && n == 1 {
        let inf = T::infinity();
        let v = match path {
            Path::Real(_) => Value::Real(inf),
            Path::Complex(_) => Value::Complex(Complex::new(inf, zero)),
        };
        return corrected(raw, family, nu, n, v);
    }

    match raw {
        Err(Error::Underflow) => {
            debug!("{family}_{nu:?}^({n}): underflow replaced by zero");
            Ok(match path {
                Path::Real(_) => Value::Real(zero),
                Path::Complex(_) => Value::Complex(Complex::new(zero, zero)),
            })
        }
        other => other,
    }
}

fn corrected<T: BesselFloat>(
    raw: Result<Value<T>, Error>,
    family: Family,
    nu: T,
    n: u32,
    value: Value<T>,
) -> Result<Value<T>, Error> {
    if raw != Ok(value) {
        debug!("{family}_{nu:?}^({n}) at zero: {raw:?} corrected to {value:?}");
    }
    Ok(value)
}
