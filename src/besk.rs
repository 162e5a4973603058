//! K Bessel function upper interface.
//!
//! Right half-plane from `zbknu`, left half-plane by analytic continuation
//! in `zacon`.

use num_complex::Complex;

use crate::algo::acon::zacon;
use crate::algo::bknu::zbknu;
use crate::machine::BesselFloat;
use crate::types::Error;

/// Compute K_fnu(z) for fnu ≥ 0, z ≠ 0.
///
/// # Errors
/// - `Domain`: z = 0 or fnu < 0
/// - `Underflow`: Re(z) too large for e^{-z}
/// - `Overflow`: the order is too large for |z|
#[inline]
pub(crate) fn zbesk<T: BesselFloat>(z: Complex<T>, fnu: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();

    if fnu < zero || (z.re == zero && z.im == zero) {
        return Err(Error::Domain);
    }
    if z.re >= zero {
        let (k, _) = zbknu(z, fnu, T::tol())?;
        return Ok(k);
    }
    zacon(z, fnu)
}
