//! Hankel function upper interface.
//!
//! In the half-plane where H(m) decays it is a rotated K:
//!   H(1, fnu, z) = (2/(pi*i)) * exp(-i*pi*fnu/2) * K(fnu, -i*z),  Im(z) >= 0
//!   H(2, fnu, z) = (2*i/pi) * exp(i*pi*fnu/2) * K(fnu, i*z),      Im(z) < 0
//! In the other half-plane H(m) = J ± i*Y.

use num_complex::Complex;

use crate::algo::bknu::zbknu;
use crate::algo::constants::FRAC_2_PI;
use crate::besj::zbesj;
use crate::besy::zbesy;
use crate::machine::BesselFloat;
use crate::types::{Error, HankelKind};
use crate::utils::{cis_pi, mul_i, mul_neg_i};

/// `true` on the part of the positive real axis where J and Y oscillate
/// and are better taken from Re and Im of H(1) than from I(-i*x).
#[inline]
pub(crate) fn oscillatory_axis<T: BesselFloat>(z: Complex<T>, fnu: T) -> bool {
    z.im == T::zero() && z.re >= T::rl() && z.re >= fnu
}

/// Compute H_fnu^(m)(z) for fnu ≥ 0, z ≠ 0.
///
/// # Errors
/// - `Domain`: z = 0 or fnu < 0
/// - `Underflow`: the decaying branch left the representable range
#[inline]
pub(crate) fn zbesh<T: BesselFloat>(
    z: Complex<T>,
    fnu: T,
    kind: HankelKind,
) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let two_over_pi = T::from_f64(FRAC_2_PI);

    if fnu < zero || (z.re == zero && z.im == zero) {
        return Err(Error::Domain);
    }

    let cc = cis_pi(fnu * T::from_f64(0.5));
    let upper = z.im >= zero;
    match (kind, upper) {
        (HankelKind::First, true) => {
            let (k, _) = zbknu(mul_neg_i(z), fnu, T::tol())?;
            Ok(mul_neg_i(cc.conj() * k) * two_over_pi)
        }
        (HankelKind::Second, false) => {
            let (k, _) = zbknu(mul_i(z), fnu, T::tol())?;
            Ok(mul_i(cc * k) * two_over_pi)
        }
        (HankelKind::First, false) => Ok(zbesj(z, fnu)? + mul_i(zbesy(z, fnu)?)),
        (HankelKind::Second, true) => Ok(zbesj(z, fnu)? - mul_i(zbesy(z, fnu)?)),
    }
}
