//! I Bessel function upper interface.
//!
//! I(fnu, z) for Re(z) < 0 is continued from the right half-plane:
//! I(fnu, z) = exp(±i*pi*fnu) * I(fnu, -z), sign following Im(z).

use num_complex::Complex;

use crate::algo::binu::zbinu;
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::{cospi, sinpi};

/// Compute I_fnu(z) for fnu ≥ 0.
#[inline]
pub(crate) fn zbesi<T: BesselFloat>(z: Complex<T>, fnu: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let one = T::one();

    if fnu < zero {
        return Err(Error::Domain);
    }
    if z.re >= zero {
        return zbinu(z, fnu);
    }

    // Left half-plane: -z lies in the right half-plane
    let m = if z.im < zero { -one } else { one };
    let csgn = Complex::new(cospi(fnu), m * sinpi(fnu));
    Ok(csgn * zbinu(-z, fnu)?)
}
