//! K Bessel function in the right half z-plane.
//!
//! The order is split as ν = μ + n with |μ| ≤ 1/2. K_μ and K_{μ+1} come from
//! Temme's series for |z| ≤ 2 or Steed's continued fraction for |z| > 2;
//! forward recurrence then carries the pair up to ν.
//!
//! References: N. M. Temme, J. Comput. Phys. 19 (1975) 324-337;
//! A. J. Thompson and A. R. Barnett, J. Comput. Phys. 64 (1986) 490-509.

use num_complex::Complex;

use crate::algo::constants::PI;
use crate::algo::gamln::temme_gammas;
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::{sinpi, zabs};

/// Boundary between Temme's series and the continued fraction.
const R1: f64 = 2.0;

/// Compute (K_ν(z), K_{ν+1}(z)) for ν ≥ 0, Re(z) ≥ 0, z ≠ 0.
///
/// Returns `Err(Error::Underflow)` when e^{-z} leaves the normal range
/// and `Err(Error::Overflow)` when the forward recurrence overflows.
pub(crate) fn zbknu<T: BesselFloat>(
    z: Complex<T>,
    fnu: T,
    tol: T,
) -> Result<(Complex<T>, Complex<T>), Error> {
    let half = T::from_f64(0.5);

    if z.re > T::elim() {
        return Err(Error::Underflow);
    }

    let nl = (fnu + half).floor();
    let dnu = fnu - nl;
    let (mut k0, mut k1) = if zabs(z) <= T::from_f64(R1) {
        temme(z, dnu, tol)?
    } else {
        steed(z, dnu)?
    };

    // K_{μ+j+1} = K_{μ+j-1} + 2(μ+j)/z · K_{μ+j}
    let rz = Complex::from(T::from_f64(2.0)) / z;
    let steps = nl.to_usize().ok_or(Error::Overflow)?;
    for j in 1..=steps {
        let order = dnu + T::from_f64(j as f64);
        let next = k0 + rz * order * k1;
        k0 = k1;
        k1 = next;
        if !(k1.re.is_finite() && k1.im.is_finite()) {
            return Err(Error::Overflow);
        }
    }
    Ok((k0, k1))
}

/// Temme's series for K_μ(z), K_{μ+1}(z), |μ| ≤ 1/2, |z| ≤ 2.
fn temme<T: BesselFloat>(
    z: Complex<T>,
    dnu: T,
    tol: T,
) -> Result<(Complex<T>, Complex<T>), Error> {
    let zero = T::zero();
    let one = T::one();
    let half = T::from_f64(0.5);
    let czero = Complex::new(zero, zero);
    let cone = Complex::from(one);

    let hz = z * half;
    let lnr = -hz.ln();
    let e = lnr * dnu;

    // πμ / sin(πμ)
    let fc = if dnu == zero {
        one
    } else {
        T::from_f64(PI) * dnu / sinpi(dnu)
    };
    let sinh_ratio = if e == czero { cone } else { e.sinh() / e };
    let (g1, g2, t2, t1) = temme_gammas(dnu);

    let mut f = (e.cosh() * g1 + sinh_ratio * lnr * g2) * fc;
    let ee = e.exp();
    // p = Γ(1+μ) (z/2)^{-μ} / 2, q = Γ(1-μ) (z/2)^{μ} / 2
    let mut p = ee * half / t2;
    let mut q = (ee * t1).inv() * half;

    let cz = hz * hz;
    let mut c = cone;
    let mut s0 = f;
    let mut s1 = p;
    let mut k = zero;
    for _ in 0..T::MAX_ITERATIONS {
        k = k + one;
        f = (f * k + p + q) / (k * k - dnu * dnu);
        c = c * cz / k;
        p = p / (k - dnu);
        q = q / (k + dnu);
        let d0 = c * f;
        let d1 = c * (p - f * k);
        s0 = s0 + d0;
        s1 = s1 + d1;
        if zabs(d0) < tol * zabs(s0) && zabs(d1) < tol * zabs(s1) {
            return Ok((s0, s1 / hz));
        }
    }
    Err(Error::ConvergenceFailure)
}

/// Steed's continued fraction for K_μ(z), K_{μ+1}(z), |μ| ≤ 1/2, |z| > 2.
fn steed<T: BesselFloat>(z: Complex<T>, dnu: T) -> Result<(Complex<T>, Complex<T>), Error> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let eps = T::MACH_EPSILON;

    let mut b = (z + one) * two;
    let mut d = b.inv();
    let mut h = d;
    let mut delh = d;
    let mut q1 = Complex::new(T::zero(), T::zero());
    let mut q2 = Complex::from(one);
    let a1 = T::from_f64(0.25) - dnu * dnu;
    let mut q = Complex::from(a1);
    let mut c = a1;
    let mut a = -a1;
    let mut s = q * delh + one;

    let mut i = T::zero();
    let mut converged = false;
    for _ in 0..T::MAX_ITERATIONS {
        i = i + one;
        a = a - two * i;
        c = -a * c / (i + one);
        let qnew = (q1 - b * q2) / a;
        q1 = q2;
        q2 = qnew;
        q = q + qnew * c;
        b = b + two;
        d = (b + d * a).inv();
        delh = (b * d - one) * delh;
        h = h + delh;
        let dels = q * delh;
        s = s + dels;
        if zabs(dels) < eps * zabs(s) {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    h = h * a1;
    let kmu = (Complex::from(T::from_f64(PI)) / (z * two)).sqrt() * (-z).exp() / s;
    let kmu1 = kmu * (z + dnu + half - h) / z;
    Ok((kmu, kmu1))
}
