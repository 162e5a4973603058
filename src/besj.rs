//! J Bessel function upper interface.
//!
//! J(fnu, z) = exp(fnu*pi*i/2) * I(fnu, -i*z) for Im(z) >= 0
//! J(fnu, z) = exp(-fnu*pi*i/2) * I(fnu, i*z) for Im(z) < 0
//! J(fnu, x) = Re H(1, fnu, x) for real x ≥ max(RL, fnu)

use num_complex::Complex;

use crate::algo::binu::zbinu;
use crate::besh::{oscillatory_axis, zbesh};
use crate::machine::BesselFloat;
use crate::types::{Error, HankelKind};
use crate::utils::{cis_pi, mul_i, mul_neg_i};

/// Compute J_fnu(z) for fnu ≥ 0.
///
/// The rotated argument always lies in the closed right half-plane, so
/// `zbinu` is called directly. On the oscillatory part of the real axis
/// the value is the real part of H(1), which needs no I ratio.
#[inline]
pub(crate) fn zbesj<T: BesselFloat>(z: Complex<T>, fnu: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let half = T::from_f64(0.5);

    if fnu < zero {
        return Err(Error::Domain);
    }

    if oscillatory_axis(z, fnu) {
        return Ok(Complex::new(zbesh(z, fnu, HankelKind::First)?.re, zero));
    }

    let csgn = cis_pi(fnu * half);
    if z.im < zero {
        Ok(csgn.conj() * zbinu(mul_i(z), fnu)?)
    } else {
        Ok(csgn * zbinu(mul_neg_i(z), fnu)?)
    }
}
