//! Analytic continuation of K to the left half-plane.

use num_complex::Complex;

use crate::algo::binu::zbinu;
use crate::algo::bknu::zbknu;
use crate::algo::constants::PI;
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::{cospi, sinpi};

/// Compute K_ν(z) for ν ≥ 0, Re(z) < 0.
///
/// With m = +1 for Im(z) ≥ 0 and m = -1 otherwise:
///
/// K_ν(z) = e^{-imπν} K_ν(-z) - imπ I_ν(-z)
///
/// An underflowing K_ν(-z) contributes zero.
pub(crate) fn zacon<T: BesselFloat>(z: Complex<T>, fnu: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let one = T::one();

    let zn = -z;
    let m = if z.im < zero { -one } else { one };

    let k = match zbknu(zn, fnu, T::tol()) {
        Ok((k, _)) => k,
        Err(Error::Underflow) => Complex::new(zero, zero),
        Err(e) => return Err(e),
    };
    let i = zbinu(zn, fnu)?;

    let csgn = Complex::new(cospi(fnu), -m * sinpi(fnu));
    let cspn = Complex::new(zero, -m * T::from_f64(PI));
    Ok(csgn * k + cspn * i)
}
