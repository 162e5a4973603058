//! Y Bessel function upper interface.
//!
//! Y(fnu, z) = i*CC*I(fnu, arg) - (2/pi)*conj(CC)*K(fnu, arg)
//! where CC = exp(i*pi*fnu/2), arg = -i*z, for Im(z) >= 0.
//! The lower half-plane follows from Y(fnu, conj(z)) = conj(Y(fnu, z)).
//! For real x ≥ max(RL, fnu), Y(fnu, x) = Im H(1, fnu, x).

use num_complex::Complex;

use crate::algo::binu::zbinu;
use crate::algo::bknu::zbknu;
use crate::algo::constants::FRAC_2_PI;
use crate::besh::{oscillatory_axis, zbesh};
use crate::machine::BesselFloat;
use crate::types::{Error, HankelKind};
use crate::utils::{cis_pi, mul_i, mul_neg_i};

/// Compute Y_fnu(z) for fnu ≥ 0, z ≠ 0.
#[inline]
pub(crate) fn zbesy<T: BesselFloat>(z: Complex<T>, fnu: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();

    if fnu < zero || (z.re == zero && z.im == zero) {
        return Err(Error::Domain);
    }
    if oscillatory_axis(z, fnu) {
        return Ok(Complex::new(zbesh(z, fnu, HankelKind::First)?.im, zero));
    }
    if z.im < zero {
        return Ok(zbesy(z.conj(), fnu)?.conj());
    }

    let zn = mul_neg_i(z);
    let cc = cis_pi(fnu * T::from_f64(0.5));
    let i = zbinu(zn, fnu)?;
    // K(arg) is exponentially small next to I(arg) when it underflows
    let k = match zbknu(zn, fnu, T::tol()) {
        Ok((k, _)) => k,
        Err(Error::Underflow) => Complex::new(zero, zero),
        Err(e) => return Err(e),
    };
    Ok(mul_i(cc * i) - cc.conj() * k * T::from_f64(FRAC_2_PI))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn rel(a: Complex64, b: Complex64) -> f64 {
        (a - b).norm() / b.norm()
    }

    #[test]
    fn besy_real_axis() {
        let v = zbesy(Complex64::new(2.0, 0.0), 1.4).unwrap();
        assert!((v.re - -0.34407403530494846).abs() < 1e-14);

        let v = zbesy(Complex64::new(25.0, 0.0), 0.5).unwrap();
        assert!((v.re / -0.15817308404205055 - 1.0).abs() < 1e-13);
    }

    #[test]
    fn besy_complex() {
        let v = zbesy(Complex64::new(-2.0, 1.0), 0.0).unwrap();
        assert!(rel(v, Complex64::new(-0.49188774989796746, 0.30006890587852963)) < 1e-13);

        let v = zbesy(Complex64::new(2.0, -1.0), 1.0).unwrap();
        assert!(rel(v, Complex64::new(-0.016315437820472505, -0.5994068417668535)) < 1e-13);
    }

    #[test]
    fn besy_large_order_and_argument() {
        let v = zbesy(Complex64::new(15000.0, 0.0), 200.0).unwrap();
        assert!((v.re / 0.003443955394598475 - 1.0).abs() < 1e-12);
        assert_eq!(v.im, 0.0);

        let v = zbesy(Complex64::new(30000.0, 0.0), 300.0).unwrap();
        assert!((v.re / -0.004593557889087323 - 1.0).abs() < 1e-12);

        let v = zbesy(Complex64::new(15000.0, 1.0), 200.0).unwrap();
        let expected = Complex64::new(0.005313724508049142, -0.006498638446532304);
        assert!(rel(v, expected) < 1e-11);
    }

    #[test]
    fn besy_zero_is_domain_error() {
        assert_eq!(zbesy(Complex64::new(0.0, 0.0), 0.0), Err(Error::Domain));
    }
}
