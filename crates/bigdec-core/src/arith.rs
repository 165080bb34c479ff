// crates/bigdec-core/src/arith.rs

//! Schoolbook signed arithmetic over [`Decimal`] with exponent alignment.
//!
//! The operator impls (`+`, `-`, `*` on references) are exact except for the
//! process-wide precision limit (see [`crate::limit`]), which truncates their
//! results when set. The `*_prec` methods compute exactly and then truncate
//! to an explicit digit count, ignoring the global limit; `prec = 0` means
//! exact. Large limb products are handed to the three-prime NTT kernel.

use crate::decimal::Decimal;
use crate::limit::get_prec_limit;
use crate::{DEC_BASE, NTT_MUL_THRESHOLD};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

/// Sum of magnitudes; `sign` is the sign of the result.
fn add_mag(a: &Decimal, b: &Decimal, sign: i8) -> Decimal {
    let hi = a.exponent.max(b.exponent) - 1;
    let lo = (a.exponent - a.frac.len() as i64).min(b.exponent - b.frac.len() as i64);
    let n = (hi - lo + 1) as usize;
    let mut out = vec![0u32; n + 1];
    let mut carry = 0u64;
    for (k, p) in (lo..=hi).enumerate() {
        let s = u64::from(a.limb_at(p)) + u64::from(b.limb_at(p)) + carry;
        out[n - k] = (s % u64::from(DEC_BASE)) as u32;
        carry = s / u64::from(DEC_BASE);
    }
    out[0] = carry as u32;
    let mut d = Decimal {
        sign,
        exponent: hi + 2,
        frac: out,
    };
    d.normalize();
    d
}

/// Difference of magnitudes; requires `|a| ≥ |b|`.
fn sub_mag(a: &Decimal, b: &Decimal, sign: i8) -> Decimal {
    let hi = a.exponent - 1;
    let lo = (a.exponent - a.frac.len() as i64).min(b.exponent - b.frac.len() as i64);
    let n = (hi - lo + 1) as usize;
    let mut out = vec![0u32; n];
    let mut borrow = 0i64;
    for (k, p) in (lo..=hi).enumerate() {
        let mut s = i64::from(a.limb_at(p)) - i64::from(b.limb_at(p)) - borrow;
        if s < 0 {
            s += i64::from(DEC_BASE);
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[n - 1 - k] = s as u32;
    }
    debug_assert_eq!(borrow, 0, "sub_mag requires |a| >= |b|");
    let mut d = Decimal {
        sign,
        exponent: hi + 1,
        frac: out,
    };
    d.normalize();
    d
}

/// Signed addition of `a` and `±b` (`b` taken with sign `b_sign`).
fn add_impl(a: &Decimal, b: &Decimal, b_sign: i8) -> Decimal {
    if a.is_zero() {
        let mut d = b.clone();
        d.set_sign(if b.is_zero() { 1 } else { b_sign });
        return d;
    }
    if b.is_zero() {
        return a.clone();
    }
    if a.sign == b_sign {
        return add_mag(a, b, a.sign);
    }
    match a.cmp_abs(b) {
        Ordering::Equal => Decimal::zero(),
        Ordering::Greater => sub_mag(a, b, a.sign),
        Ordering::Less => sub_mag(b, a, b_sign),
    }
}

/// Limb product, most-significant first, `a.len() + b.len()` limbs.
///
/// Dispatches to the NTT kernel once both operands clear the threshold; the
/// kernel can only refuse sizes far beyond anything schoolbook could finish,
/// so the fallback is effectively the small-operand path.
pub(crate) fn mul_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.len().min(b.len()) >= NTT_MUL_THRESHOLD {
        if let Ok(c) = bigdec_ntt::ntt_multiply(a, b) {
            return c;
        }
    }
    let (m, n) = (a.len(), b.len());
    let mut out = vec![0u32; m + n];
    let base = u64::from(DEC_BASE);
    for i in (0..m).rev() {
        let ai = u64::from(a[i]);
        let mut carry = 0u64;
        for j in (0..n).rev() {
            let cur = u64::from(out[i + j + 1]) + ai * u64::from(b[j]) + carry;
            out[i + j + 1] = (cur % base) as u32;
            carry = cur / base;
        }
        out[i] = carry as u32;
    }
    out
}

fn mul_impl(a: &Decimal, b: &Decimal) -> Decimal {
    if a.is_zero() || b.is_zero() {
        return Decimal::zero();
    }
    let mut d = Decimal {
        sign: a.sign * b.sign,
        exponent: a.exponent + b.exponent,
        frac: mul_limbs(&a.frac, &b.frac),
    };
    d.normalize();
    d
}

/// Truncate to the process-wide precision limit, when one is set.
fn limited(mut d: Decimal) -> Decimal {
    let limit = get_prec_limit();
    if limit > 0 {
        d.truncate_digits(limit);
    }
    d
}

impl Decimal {
    /// `self + rhs` truncated to `prec` significant digits (0 = exact).
    #[must_use]
    pub fn add_prec(&self, rhs: &Self, prec: usize) -> Self {
        let mut d = add_impl(self, rhs, rhs.sign);
        d.truncate_digits(prec);
        d
    }

    /// `self − rhs` truncated to `prec` significant digits (0 = exact).
    #[must_use]
    pub fn sub_prec(&self, rhs: &Self, prec: usize) -> Self {
        let mut d = add_impl(self, rhs, -rhs.sign);
        d.truncate_digits(prec);
        d
    }

    /// `self · rhs` truncated to `prec` significant digits (0 = exact).
    #[must_use]
    pub fn mul_prec(&self, rhs: &Self, prec: usize) -> Self {
        let mut d = mul_impl(self, rhs);
        d.truncate_digits(prec);
        d
    }
}

impl Add for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: &Decimal) -> Decimal {
        limited(add_impl(self, rhs, rhs.sign))
    }
}

impl Sub for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: &Decimal) -> Decimal {
        limited(add_impl(self, rhs, -rhs.sign))
    }
}

impl Mul for &Decimal {
    type Output = Decimal;
    fn mul(self, rhs: &Decimal) -> Decimal {
        limited(mul_impl(self, rhs))
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        let mut d = self.clone();
        d.set_sign(-d.sign);
        d
    }
}
