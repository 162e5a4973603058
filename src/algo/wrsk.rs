//! I Bessel function via Wronskian normalization.
//!
//! Uses the ratio I_{ν+1}/I_ν from `zrati` and the pair K_ν, K_{ν+1} from
//! `zbknu` in I_ν(z) K_{ν+1}(z) + I_{ν+1}(z) K_ν(z) = 1/z.

use num_complex::Complex;

use crate::algo::bknu::zbknu;
use crate::algo::rati::zrati;
use crate::machine::BesselFloat;
use crate::types::Error;

/// Compute I_ν(z) for ν ≥ 0, Re(z) ≥ 0, z ≠ 0 via the Wronskian.
///
/// I_ν = 1 / (z (K_{ν+1} + r K_ν)), r = I_{ν+1}/I_ν. A K pair that
/// underflows means I overflows and vice versa.
pub(crate) fn zwrsk<T: BesselFloat>(z: Complex<T>, fnu: T, tol: T) -> Result<Complex<T>, Error> {
    let ratio = zrati(z, fnu, tol)?;
    let (k0, k1) = zbknu(z, fnu, tol).map_err(|e| match e {
        Error::Underflow => Error::Overflow,
        Error::Overflow => Error::Underflow,
        other => other,
    })?;
    Ok((z * (k1 + ratio * k0)).inv())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn wrsk_real_argument() {
        // I_2.5(6) = 38.327534493204027
        let v = zwrsk(Complex64::new(6.0, 0.0), 2.5, f64::tol()).unwrap();
        assert!((v.re / 38.327534493204027 - 1.0).abs() < 1e-14);
    }

    #[test]
    fn wrsk_complex_argument() {
        // I_0.7(4-3i) = -8.6143363060564964 - 4.1234821355928561i
        let v = zwrsk(Complex64::new(4.0, -3.0), 0.7, f64::tol()).unwrap();
        let expected = Complex64::new(-8.6143363060564964, -4.1234821355928561);
        assert!((v - expected).norm() / expected.norm() < 1e-14);
    }
}
