// crates/bigdec-div/src/divmod.rs

//! Block-wise divmod against a precomputed reciprocal.
//!
//! With `x_digits = remaining(≤ y_digits) + block_digits · num_blocks`, the
//! dividend is consumed one block at a time from the most significant end:
//!
//! ```text
//! xxx_xxxxx_xxxxx_xxxxx (18 digits) / yyyyy (5 digits)
//! remaining = 3, block_digits = 5, num_blocks = 3
//! ```
//!
//! Each step divides an at most `y_digits + block_digits`-digit dividend by
//! `y` via one multiply by the reciprocal, so the reciprocal only ever needs
//! `block_digits + 1` digits.

use crate::newton::newton_raphson_inverse;
use bigdec_core::{Decimal, FIGS_PER_LIMB};

/// Copy the window of `src`'s fraction covering limb positions
/// `[exponent − rshift − length, exponent − rshift)` into `dest`, clipping at
/// both ends. Uncovered `dest` positions keep their prior value; fully
/// out-of-range calls are no-ops.
fn slice_copy(dest: &mut [u32], src: &Decimal, rshift: i64, length: usize) {
    let mut start = src.exponent - rshift - length as i64;
    if start >= src.frac.len() as i64 {
        return;
    }
    let mut dpos = 0usize;
    let mut len = length;
    if start < 0 {
        let shift = (-start) as usize;
        if shift >= len {
            return;
        }
        dpos = shift;
        len -= shift;
        start = 0;
    }
    let start = start as usize;
    let n = len
        .min(src.frac.len() - start)
        .min(dest.len().saturating_sub(dpos));
    dest[dpos..dpos + n].copy_from_slice(&src.frac[start..start + n]);
}

/// `x.divmod(y)` using the approximate reciprocal `inv ≈ 1/y`.
///
/// The multiplicative estimate is within a couple of units of the true
/// quotient, so the correction loops run O(1) times.
#[must_use]
pub fn divmod_by_inv_mul(x: &Decimal, y: &Decimal, inv: &Decimal) -> (Decimal, Decimal) {
    let (div, modulo, _) = divmod_by_inv_mul_counted(x, y, inv);
    (div, modulo)
}

/// As [`divmod_by_inv_mul`], also reporting how many ±1 corrections ran.
fn divmod_by_inv_mul_counted(
    x: &Decimal,
    y: &Decimal,
    inv: &Decimal,
) -> (Decimal, Decimal, usize) {
    let one = Decimal::one();
    let zero = Decimal::zero();
    let mut div = (x * inv).trunc();
    let mut modulo = x - &(&div * y);
    let mut steps = 0usize;
    while modulo < zero {
        modulo = &modulo + y;
        div = &div - &one;
        steps += 1;
    }
    while modulo >= *y {
        modulo = &modulo - y;
        div = &div + &one;
        steps += 1;
    }
    (div, modulo, steps)
}

/// Divmod of non-negative integer decimals: `x = q·y + r`, `0 ≤ r < y`.
///
/// `y` must be a positive integer; `x` a non-negative integer. Short
/// dividends are promoted so at least one block runs and `q = 0` falls out
/// naturally.
#[must_use]
pub fn divmod_newton(x: &Decimal, y: &Decimal) -> (Decimal, Decimal) {
    let mut x_digits = x.digit_count().max(0) as usize;
    let y_digits = y.digit_count() as usize;
    if x_digits <= y_digits {
        x_digits = y_digits + 1;
    }

    let n = x_digits / y_digits;
    let block_figs = (x_digits - y_digits) / n / FIGS_PER_LIMB + 1;
    let block_digits = block_figs * FIGS_PER_LIMB;
    let num_blocks = (x_digits - y_digits).div_ceil(block_digits);
    let y_figs = (y_digits - 1) / FIGS_PER_LIMB + 1;
    let yinv = newton_raphson_inverse(y, block_digits + 1);

    let mut quot = vec![0u32; num_blocks * block_figs + 1];
    // Running remainder starts as the part of x above all blocks.
    let mut modulo = x
        .decimal_shift(-((num_blocks * block_digits) as i64))
        .trunc();
    for i in (0..num_blocks).rev() {
        // Running remainder on top, the next block of x below it.
        let mut dividend = vec![0u32; y_figs + block_figs];
        slice_copy(&mut dividend[..y_figs], &modulo, 0, y_figs);
        slice_copy(
            &mut dividend[y_figs..],
            x,
            (i * block_figs) as i64,
            block_figs,
        );
        let mut dividend = Decimal {
            sign: 1,
            exponent: (y_figs + block_figs) as i64,
            frac: dividend,
        };
        dividend.normalize();

        let (div, m) = divmod_by_inv_mul(&dividend, y, &yinv);
        modulo = m;
        // One limb of headroom: the very first block can carry a quotient of
        // block_figs + 1 limbs when the initial running remainder exceeds y.
        let off = (num_blocks - 1 - i) * block_figs;
        slice_copy(&mut quot[off..off + block_figs + 1], &div, 0, block_figs + 1);
    }
    let mut q = Decimal {
        sign: 1,
        exponent: (num_blocks * block_figs + 1) as i64,
        frac: quot,
    };
    q.normalize();
    (q, modulo)
}
