//! Internal routines for non-negative orders.
//!
//! All functions are `pub(crate)`. Each returns the value itself (or a pair
//! of consecutive orders for `zbknu`) and reports trouble through
//! [`Error`](crate::types::Error):
//!
//! - `Underflow`: the result is below the representable range
//! - `Overflow`: an intermediate or the result left the range
//! - `ConvergenceFailure`: a series or continued fraction hit the
//!   iteration cap

pub(crate) mod constants;
pub(crate) mod gamln;

// I: power series, asymptotic expansion, ratio continued fraction
pub(crate) mod asyi;
pub(crate) mod rati;
pub(crate) mod seri;

// K and the Wronskian for I
pub(crate) mod bknu;
pub(crate) mod wrsk;

// region selection and left half-plane continuation
pub(crate) mod acon;
pub(crate) mod binu;
