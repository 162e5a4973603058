//! Power series for the I Bessel function.
//!
//! I_ν(z) = (z/2)^ν Σ_k (z²/4)^k / (k! Γ(ν+k+1)), used for |z|²/4 ≤ ν+1.

use num_complex::Complex;

use crate::algo::gamln::{gamln, rgamma};
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::zabs;

/// Orders above this take the leading factor in log space, where
/// (z/2)^ν and 1/Γ(ν+1) separately leave the representable range.
const LOG_SPACE_ORDER: f64 = 29.0;

/// Power series computation of I_ν(z) for ν ≥ 0, z ≠ 0.
///
/// Terms are added until the last one is below `tol` relative to the sum
/// and past the peak of the term sequence (k² ≥ |z²/4|).
pub(crate) fn zseri<T: BesselFloat>(z: Complex<T>, fnu: T, tol: T) -> Result<Complex<T>, Error> {
    let one = T::one();
    let half = T::from_f64(0.5);

    let hz = z * half;
    let q = hz * hz;
    let aq = zabs(q);

    let mut term = Complex::from(one);
    let mut sum = term;
    let mut k = T::zero();
    let mut converged = false;
    for _ in 0..T::MAX_ITERATIONS {
        k = k + one;
        term = term * q / (k * (fnu + k));
        sum = sum + term;
        if zabs(term) <= tol * zabs(sum) && k * k >= aq {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    // (z/2)^ν / Γ(ν+1)
    let log_hz = hz.ln();
    let lead = if fnu <= T::from_f64(LOG_SPACE_ORDER) {
        (log_hz * fnu).exp() * rgamma(fnu + one)?
    } else {
        (log_hz * fnu - gamln(fnu + one)?).exp()
    };
    Ok(lead * sum)
}
