// crates/bigdec-div/src/newton.rs

//! Newton–Raphson reciprocal approximation.

use bigdec_core::{Decimal, DEC_BASE};

/// Approximate `1/x` to roughly `prec` significant decimal digits.
///
/// `x` must be positive. The result carries at most one unit of error in its
/// last digit, so callers that need `d` exact digits ask for `d + 1`.
///
/// The seed comes from the top two limbs of `x` as a 2-limb rational
/// approximation; each iteration of `inv ← inv + inv·(1 − x·inv)` then
/// roughly doubles the correct digit count, with working precision
/// `n_i = min(prec, prec/2^i + 2)` on a descending schedule so only the last
/// step runs at full width.
#[must_use]
pub fn newton_raphson_inverse(x: &Decimal, prec: usize) -> Decimal {
    debug_assert!(!x.is_zero() && x.sign > 0, "reciprocal of a positive value");
    let one = Decimal::one();
    let base = u64::from(DEC_BASE);

    // Initial approximation in 2 limbs: 1/x ≈ (d0·B + d1) · B^(−1−exponent).
    let f0 = u64::from(x.frac[0]);
    let f1 = x.frac.get(1).map_or(0, |&l| u64::from(l));
    let numerator = base * 100;
    let denominator = f0 * 100 + f1 * 100 / base;
    let d0 = numerator / denominator;
    let d1 = (numerator % denominator) * (base / 100) / denominator * 100;
    let mut inv = Decimal::from_u64(d0 * base + d1);
    inv.exponent += -1 - x.exponent;
    inv.normalize();

    let mut bl = 1usize;
    while (1usize << bl) < prec {
        bl += 1;
    }
    for i in (0..=bl).rev() {
        let n = ((prec >> i) + 2).min(prec);
        // inv ← inv + inv·(1 − x·inv); the product runs at n + 1 digits and
        // the outer sum at n.
        let xt = x.mul_prec(&one, n + 1);
        let residual = one.sub_prec(&(&xt * &inv), n + 1);
        inv = inv.add_prec(&(&inv * &residual), n);
    }
    inv
}
