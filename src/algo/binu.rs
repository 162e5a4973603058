//! Region selection for the I Bessel function in the right half-plane.

use num_complex::Complex;

use crate::algo::asyi::zasyi;
use crate::algo::seri::zseri;
use crate::algo::wrsk::zwrsk;
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::zabs;

/// Compute I_ν(z) for ν ≥ 0, Re(z) ≥ 0.
///
/// Regions:
/// - z = 0: 1 for ν = 0, else 0
/// - |z|²/4 ≤ ν+1: power series (`zseri`)
/// - |z| ≥ max(RL, ν²/2): asymptotic expansion (`zasyi`)
/// - otherwise: continued fraction plus Wronskian (`zwrsk`)
pub(crate) fn zbinu<T: BesselFloat>(z: Complex<T>, fnu: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let one = T::one();
    let tol = T::tol();

    let az = zabs(z);
    if az == zero {
        let v = if fnu == zero { one } else { zero };
        return Ok(Complex::new(v, zero));
    }

    if T::from_f64(0.25) * az * az <= fnu + one {
        return zseri(z, fnu, tol);
    }
    if az >= T::rl() && az >= T::from_f64(0.5) * fnu * fnu {
        return zasyi(z, fnu, tol);
    }
    zwrsk(z, fnu, tol)
}
