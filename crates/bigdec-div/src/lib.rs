//! Fast division with remainder for `bigdec` decimals.
//!
//! The dividend is split into fixed-size blocks and each block is reduced
//! against a Newton–Raphson approximation of the divisor's reciprocal, so the
//! cost is dominated by multiplications (which dispatch to the NTT kernel for
//! large operands) instead of schoolbook division.
//!
//! - [`newton_raphson_inverse`]: the reciprocal, accurate to a requested
//!   digit count.
//! - [`divmod_newton`]: non-negative integer divmod, `x = q·y + r` with
//!   `0 ≤ r < y`.
//! - [`divd_newton`]: the signed, fraction-aware front door with scoped
//!   precision-limit suspension.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod divd;
pub mod divmod;
pub mod newton;

pub use divd::divd_newton;
pub use divmod::{divmod_by_inv_mul, divmod_newton};
pub use newton::newton_raphson_inverse;
