//! Derivatives with respect to the argument from order-shifted values.
//!
//! Every family satisfies a two-term derivative identity,
//!
//! - J, Y, H: F'_ν = (F_{ν-1} - F_{ν+1}) / 2
//! - I:       I'_ν = (I_{ν-1} + I_{ν+1}) / 2
//! - K:       K'_ν = -(K_{ν-1} + K_{ν+1}) / 2
//!
//! and applying it n times gives
//!
//! d^n F_ν = σ_n 2^{-n} Σ_{j=0..n} s_j C(n, j) F_{ν-n+2j},
//!
//! with s_j = (-1)^j for J, Y, H and s_j = 1 for I, K; σ_n = (-1)^n for K
//! and 1 otherwise.

use log::trace;
use num_complex::Complex;

use crate::machine::BesselFloat;
use crate::types::{Error, Family, Value};

/// Highest derivative order accepted.
///
/// C(n, j) and 2^n stay exact in `f64` up to here.
pub const MAX_DERIVATIVE: u32 = 30;

/// Binomial coefficient C(n, k), exact for n ≤ 62.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    // each partial product C(n-k+i, i) is an integer
    (1..=k).fold(1u64, |acc, i| acc * (n - k + i) / i)
}

/// Signed weight of F_{ν-n+2j} in the n-th derivative, before the 2^{-n}.
pub fn weight(family: Family, n: u32, j: u32) -> i64 {
    let c = binomial(n, j) as i64;
    let alternating = if j % 2 == 1 { -c } else { c };
    match family {
        Family::J | Family::Y | Family::H(_) => alternating,
        Family::I => c,
        Family::K => {
            if n % 2 == 1 {
                -c
            } else {
                c
            }
        }
    }
}

/// n-th derivative of `family` at order `nu`, using `term(order)` for the
/// zero-derivative values.
///
/// For n = 0 this is exactly one call, `term(nu)`, with no weighting. For
/// n ≥ 1 the n+1 terms at orders ν-n, ν-n+2, …, ν+n are combined; the
/// result is real only if every term is. The first failing term fails the
/// whole derivative.
pub fn derivative<T, F>(family: Family, nu: T, n: u32, mut term: F) -> Result<Value<T>, Error>
where
    T: BesselFloat,
    F: FnMut(T) -> Result<Value<T>, Error>,
{
    if n == 0 {
        return term(nu);
    }
    if n > MAX_DERIVATIVE {
        return Err(Error::Domain);
    }

    let scale = T::from_f64(0.5).powi(n as i32);
    let mut sum = Complex::new(T::zero(), T::zero());
    let mut all_real = true;
    for j in 0..=n {
        let shift = 2.0 * j as f64 - n as f64;
        let order = nu + T::from_f64(shift);
        let w = T::from_f64(weight(family, n, j) as f64) * scale;
        trace!("{family}^({n}) term j={j}: order {order:?}, weight {w:?}");
        let value = term(order)?;
        if let Value::Complex(_) = value {
            all_real = false;
        }
        sum = sum + value.to_complex() * w;
    }

    Ok(if all_real {
        Value::Real(sum.re)
    } else {
        Value::Complex(sum)
    })
}
