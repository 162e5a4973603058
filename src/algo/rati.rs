//! I Bessel function ratio by continued fraction.
//!
//! I_{ν+1}(z)/I_ν(z) = 1/(2(ν+1)/z + 1/(2(ν+2)/z + ...)), evaluated with the
//! modified Lentz method.

use num_complex::Complex;

use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::zabs;

/// Compute I_{ν+1}(z)/I_ν(z) for ν ≥ 0, z ≠ 0.
///
/// The number of terms needed grows like |z|, so the iteration budget is
/// `MAX_ITERATIONS + 2|z|`.
pub(crate) fn zrati<T: BesselFloat>(z: Complex<T>, fnu: T, tol: T) -> Result<Complex<T>, Error> {
    let one = T::one();
    let tiny = Complex::from(T::MACH_TINY);
    let czero = Complex::new(T::zero(), T::zero());

    let rz = Complex::from(T::from_f64(2.0)) / z;
    let mut b = rz * (fnu + one);
    let mut f = b;
    let mut c = b;
    let mut d = czero;
    let mut order = fnu + one;
    let extra = (zabs(z) * T::from_f64(2.0))
        .to_usize()
        .ok_or(Error::ConvergenceFailure)?;
    for _ in 0..T::MAX_ITERATIONS.saturating_add(extra) {
        order = order + one;
        b = rz * order;
        d = b + d;
        if d == czero {
            d = tiny;
        }
        c = b + c.inv();
        if c == czero {
            c = tiny;
        }
        d = d.inv();
        let delta = c * d;
        f = f * delta;
        if zabs(delta - one) < tol {
            return Ok(f.inv());
        }
    }
    Err(Error::ConvergenceFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn rati_real_argument() {
        // I_1(5)/I_0(5) = 0.893383137044085
        let r = zrati(Complex64::new(5.0, 0.0), 0.0, f64::tol()).unwrap();
        assert!((r.re - 0.893383137044085).abs() < 2e-15);
        assert_eq!(r.im, 0.0);
    }

    #[test]
    fn rati_complex_argument() {
        let z = Complex64::new(3.0, 4.0);
        let r = zrati(z, 1.3, f64::tol()).unwrap();
        // ratio satisfies the three-term recurrence I_{ν-1} - I_{ν+1} = (2ν/z) I_ν
        let r2 = zrati(z, 2.3, f64::tol()).unwrap();
        let lhs = r.inv() - r2;
        let rhs = Complex64::from(2.0 * 2.3) / z;
        assert!((lhs - rhs).norm() < 1e-13);
    }

    #[test]
    fn rati_large_argument() {
        // about |z| terms, beyond the fixed iteration cap
        let z = Complex64::new(0.0, -15000.0);
        let r = zrati(z, 200.0, f64::tol()).unwrap();
        let r2 = zrati(z, 201.0, f64::tol()).unwrap();
        let lhs = r.inv() - r2;
        let rhs = Complex64::from(2.0 * 201.0) / z;
        assert!((lhs - rhs).norm() < 1e-10);
    }
}
