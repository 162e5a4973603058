//! Large-argument asymptotic expansion for the I Bessel function.
//!
//! Valid for Re(z) ≥ 0 when |z| ≥ RL and |z| ≥ ν²/2. Off the real axis the
//! exponentially small e^{-z} branch is kept; it has unit size relative to
//! the leading branch on the imaginary axis, which is where J is evaluated.

use num_complex::Complex;

use crate::algo::constants::PI;
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::{cospi, sinpi, zabs};

/// Asymptotic expansion of I_ν(z), ν ≥ 0, Re(z) ≥ 0:
///
/// I_ν(z) ≈ e^z/√(2πz) Σ (-1)^k a_k(ν)/z^k
///        + e^{-z} i e^{±iπν}/√(2πz) Σ a_k(ν)/z^k
///
/// with a_k(ν) = Π_{j=1..k} (4ν² - (2j-1)²) / (k! 8^k) and the sign of the
/// phase following Im(z).
pub(crate) fn zasyi<T: BesselFloat>(z: Complex<T>, fnu: T, tol: T) -> Result<Complex<T>, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);

    let mu4 = T::from_f64(4.0) * fnu * fnu;
    let z8 = z * T::from_f64(8.0);

    let mut term = Complex::from(one);
    let mut alternating = term;
    let mut straight = term;
    let mut previous = one;
    let mut k = zero;
    let mut converged = false;
    for i in 1..=T::MAX_ITERATIONS {
        k = k + one;
        let odd = two * k - one;
        term = term * (mu4 - odd * odd) / (z8 * k);
        straight = straight + term;
        if i % 2 == 1 {
            alternating = alternating - term;
        } else {
            alternating = alternating + term;
        }
        let aterm = zabs(term);
        if aterm <= tol * zabs(alternating) {
            converged = true;
            break;
        }
        // past the smallest term the series only diverges
        if aterm > previous && odd * odd > mu4 {
            break;
        }
        previous = aterm;
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    let lead = z.exp() / (z * T::from_f64(2.0 * PI)).sqrt();
    if z.im == zero {
        return Ok(lead * alternating);
    }
    // i e^{iπν} for Im z > 0, i e^{-iπν} for Im z < 0
    let m = if z.im > zero { one } else { -one };
    let phase = Complex::new(-sinpi(fnu), m * cospi(fnu));
    Ok(lead * (alternating + (z * -two).exp() * phase * straight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn asyi_real_axis() {
        // I_0(30) = 781672297823.97748
        let v = zasyi(Complex64::new(30.0, 0.0), 0.0, f64::tol()).unwrap();
        assert!((v.re / 781672297823.97748 - 1.0).abs() < 1e-14);
        assert_eq!(v.im, 0.0);
    }

    #[test]
    fn asyi_imaginary_axis() {
        // I_ν(iy) = i^ν J_ν(y); I_1.5(25i) = 0.11244263215747947 - 0.11244263215747947i
        let v = zasyi(Complex64::new(0.0, 25.0), 1.5, f64::tol()).unwrap();
        let expected = Complex64::new(0.11244263215747947, -0.11244263215747947);
        assert!((v - expected).norm() / expected.norm() < 1e-13);
    }

    #[test]
    fn asyi_conjugate_symmetry() {
        let z = Complex64::new(20.0, 12.0);
        let a = zasyi(z, 2.3, f64::tol()).unwrap();
        let b = zasyi(z.conj(), 2.3, f64::tol()).unwrap();
        assert!((a.conj() - b).norm() / a.norm() < 1e-15);
    }
}
