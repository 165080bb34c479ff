// crates/bigdec-core/src/decimal.rs

//! The decimal value type.
//!
//! A value is `sign · 0.frac · B^exponent` with `B = 10⁹`: `frac` holds
//! base-B limbs most-significant first and `exponent` counts limbs left of
//! the decimal point. Canonical form has `frac[0] ≠ 0` and no trailing zero
//! limbs; zero is the empty fraction with positive sign. Every constructor
//! and arithmetic entry point returns canonical values.

use crate::{DEC_BASE, FIGS_PER_LIMB};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An arbitrary-precision decimal number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decimal {
    /// −1 or +1. Zero is stored with positive sign.
    pub sign: i8,
    /// Position of the decimal point, in limbs.
    pub exponent: i64,
    /// Base-10⁹ limbs, most-significant first.
    pub frac: Vec<u32>,
}

/// Decimal digit count of a single limb (1..=9; 1 for zero).
#[inline]
#[must_use]
pub fn limb_digits(limb: u32) -> usize {
    let mut d = 1;
    let mut v = limb / 10;
    while v > 0 {
        d += 1;
        v /= 10;
    }
    d
}

impl Decimal {
    /// Zero.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sign: 1,
            exponent: 0,
            frac: Vec::new(),
        }
    }

    /// One.
    #[inline]
    #[must_use]
    pub fn one() -> Self {
        Self {
            sign: 1,
            exponent: 1,
            frac: vec![1],
        }
    }

    /// Construct from an unsigned integer.
    #[must_use]
    pub fn from_u64(mut v: u64) -> Self {
        let mut limbs = Vec::new();
        while v > 0 {
            limbs.push((v % u64::from(DEC_BASE)) as u32);
            v /= u64::from(DEC_BASE);
        }
        limbs.reverse();
        let mut d = Self {
            sign: 1,
            exponent: limbs.len() as i64,
            frac: limbs,
        };
        d.normalize();
        d
    }

    /// Construct from a signed integer.
    #[must_use]
    pub fn from_i64(v: i64) -> Self {
        let mut d = Self::from_u64(v.unsigned_abs());
        if v < 0 {
            d.sign = -1;
        }
        d
    }

    /// `true` for the canonical zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.frac.is_empty()
    }

    /// Set the sign. No-op on zero, which stays positive.
    #[inline]
    pub fn set_sign(&mut self, sign: i8) {
        debug_assert!(sign == 1 || sign == -1);
        if !self.is_zero() {
            self.sign = sign;
        }
    }

    /// Overwrite with one.
    #[inline]
    pub fn set_one(&mut self) {
        *self = Self::one();
    }

    /// Canonicalize in place: strip leading zero limbs (adjusting the
    /// exponent), strip trailing zero limbs, normalize zero.
    pub fn normalize(&mut self) {
        let lead = self.frac.iter().take_while(|&&l| l == 0).count();
        if lead > 0 {
            self.frac.drain(..lead);
            self.exponent -= lead as i64;
        }
        while self.frac.last() == Some(&0) {
            self.frac.pop();
        }
        if self.frac.is_empty() {
            self.sign = 1;
            self.exponent = 0;
        }
    }

    /// The limb with weight `B^pos`, zero outside the stored window.
    #[inline]
    #[must_use]
    pub fn limb_at(&self, pos: i64) -> u32 {
        let i = self.exponent - 1 - pos;
        if i >= 0 && (i as usize) < self.frac.len() {
            self.frac[i as usize]
        } else {
            0
        }
    }

    /// Decimal position of the leading digit: the count of digits before the
    /// decimal point for integers, ≤ 0 for purely fractional values, 0 for
    /// zero.
    #[must_use]
    pub fn digit_count(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        (self.exponent - 1) * FIGS_PER_LIMB as i64 + limb_digits(self.frac[0]) as i64
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub fn trunc(&self) -> Self {
        if self.is_zero() || self.exponent <= 0 {
            return Self::zero();
        }
        let keep = (self.exponent as usize).min(self.frac.len());
        let mut d = Self {
            sign: self.sign,
            exponent: self.exponent,
            frac: self.frac[..keep].to_vec(),
        };
        d.normalize();
        d
    }

    /// Fractional part; keeps the sign of `self`.
    #[must_use]
    pub fn fract(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        if self.exponent < 0 {
            return self.clone();
        }
        let e = self.exponent as usize;
        if e >= self.frac.len() {
            return Self::zero();
        }
        let mut d = Self {
            sign: self.sign,
            exponent: 0,
            frac: self.frac[e..].to_vec(),
        };
        d.normalize();
        d
    }

    /// Truncate toward zero at the decimal point, in place.
    pub fn round_down_mid(&mut self) {
        *self = self.trunc();
    }

    /// `self · 10^k` for any integer `k`.
    #[must_use]
    pub fn decimal_shift(&self, k: i64) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let q = k.div_euclid(FIGS_PER_LIMB as i64);
        let r = k.rem_euclid(FIGS_PER_LIMB as i64);
        if r == 0 {
            return Self {
                sign: self.sign,
                exponent: self.exponent + q,
                frac: self.frac.clone(),
            };
        }
        // In-limb scale by 10^r, shifting the whole array one limb down.
        let s = 10u64.pow(r as u32);
        let mut out = vec![0u32; self.frac.len() + 1];
        let mut carry = 0u64;
        for i in (0..self.frac.len()).rev() {
            let cur = u64::from(self.frac[i]) * s + carry;
            out[i + 1] = (cur % u64::from(DEC_BASE)) as u32;
            carry = cur / u64::from(DEC_BASE);
        }
        out[0] = carry as u32;
        let mut d = Self {
            sign: self.sign,
            exponent: self.exponent + q + 1,
            frac: out,
        };
        d.normalize();
        d
    }

    /// Truncate to `prec` significant decimal digits, in place. `prec = 0`
    /// means exact (no-op).
    pub fn truncate_digits(&mut self, prec: usize) {
        if prec == 0 || self.is_zero() {
            return;
        }
        let lead = limb_digits(self.frac[0]);
        let total = lead + FIGS_PER_LIMB * (self.frac.len() - 1);
        if prec >= total {
            return;
        }
        if prec <= lead {
            // The cut lands inside the leading limb.
            self.frac.truncate(1);
            if prec < lead {
                let m = 10u32.pow((lead - prec) as u32);
                self.frac[0] -= self.frac[0] % m;
            }
        } else {
            let keep = prec - lead; // digits kept beyond the first limb
            let full = 1 + keep / FIGS_PER_LIMB;
            let rem = keep % FIGS_PER_LIMB;
            if rem == 0 {
                self.frac.truncate(full);
            } else {
                self.frac.truncate(full + 1);
                let m = 10u32.pow((FIGS_PER_LIMB - rem) as u32);
                let last = self.frac.len() - 1;
                self.frac[last] -= self.frac[last] % m;
            }
        }
        self.normalize();
    }

    /// Magnitude comparison, ignoring signs.
    #[must_use]
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                if self.exponent != other.exponent {
                    return self.exponent.cmp(&other.exponent);
                }
                let n = self.frac.len().max(other.frac.len());
                for i in 0..n {
                    let x = self.frac.get(i).copied().unwrap_or(0);
                    let y = other.frac.get(i).copied().unwrap_or(0);
                    if x != y {
                        return x.cmp(&y);
                    }
                }
                Ordering::Equal
            }
        }
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => {
                if other.sign > 0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, true) => {
                if self.sign > 0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, false) => {
                if self.sign != other.sign {
                    return self.sign.cmp(&other.sign);
                }
                let mag = self.cmp_abs(other);
                if self.sign > 0 {
                    mag
                } else {
                    mag.reverse()
                }
            }
        }
    }
}
