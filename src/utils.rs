//! Complex arithmetic helpers and trigonometry in units of π.

use num_complex::Complex;

use crate::algo::constants::PI;
use crate::machine::BesselFloat;

/// Multiply a complex number by i: (a+bi)·i = -b+ai.
#[inline]
pub(crate) fn mul_i<T: BesselFloat>(c: Complex<T>) -> Complex<T> {
    Complex::new(-c.im, c.re)
}

/// Multiply a complex number by -i: (a+bi)·(-i) = b-ai.
#[inline]
pub(crate) fn mul_neg_i<T: BesselFloat>(c: Complex<T>) -> Complex<T> {
    Complex::new(c.im, -c.re)
}

/// Overflow-safe complex absolute value.
///
/// Factors out the larger component: `max * sqrt(1 + (min/max)²)`.
#[inline]
pub(crate) fn zabs<T: BesselFloat>(z: Complex<T>) -> T {
    let u = z.re.abs();
    let v = z.im.abs();
    let (big, small) = if u > v { (u, v) } else { (v, u) };
    if big == T::zero() {
        return T::zero();
    }
    let q = small / big;
    big * (T::one() + q * q).sqrt()
}

/// Split `|x| mod 2` into a fraction `t ∈ [0, 1)` and a parity flag
/// (`true` when `|x| mod 2 ≥ 1`). Both steps are exact in floating point.
#[inline]
fn reduce_half_turns<T: BesselFloat>(x: T) -> (T, bool) {
    let one = T::one();
    let r = x.abs() % T::from_f64(2.0);
    if r < one {
        (r, false)
    } else {
        (r - one, true)
    }
}

/// sin(π·x), exact at integers (0) and half-integers (±1).
///
/// `(x * PI).sin()` loses these: `sin(1.5 * PI)` is off by 1.8e-16.
#[inline]
pub(crate) fn sinpi<T: BesselFloat>(x: T) -> T {
    let half = T::from_f64(0.5);
    let (t, odd) = reduce_half_turns(x);
    // sin(πt) = sin(π(1-t))
    let t = if t > half { T::one() - t } else { t };
    let s = if t == T::zero() {
        return T::zero();
    } else if t == half {
        T::one()
    } else {
        (t * T::from_f64(PI)).sin()
    };
    if odd != (x < T::zero()) {
        -s
    } else {
        s
    }
}

/// cos(π·x), exact at integers (±1) and half-integers (0).
#[inline]
pub(crate) fn cospi<T: BesselFloat>(x: T) -> T {
    let half = T::from_f64(0.5);
    let (t, odd) = reduce_half_turns(x);
    // cos(πt) = -cos(π(1-t))
    let (t, neg) = if t > half {
        (T::one() - t, !odd)
    } else {
        (t, odd)
    };
    let c = if t == half {
        return T::zero();
    } else if t == T::zero() {
        T::one()
    } else {
        (t * T::from_f64(PI)).cos()
    };
    if neg {
        -c
    } else {
        c
    }
}

/// e^{iπx} = cospi(x) + i·sinpi(x).
#[inline]
pub(crate) fn cis_pi<T: BesselFloat>(x: T) -> Complex<T> {
    Complex::new(cospi(x), sinpi(x))
}
