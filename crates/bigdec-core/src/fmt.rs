// crates/bigdec-core/src/fmt.rs

//! Plain decimal string parsing and formatting.
//!
//! Accepted input is `[+-]? digits [. digits]?`; scientific notation is not
//! part of the surface. Output never uses an exponent either: values print
//! exactly, with the minimal digit string.

use crate::decimal::Decimal;
use crate::FIGS_PER_LIMB;
use anyhow::{ensure, Error, Result};
use std::fmt;
use std::str::FromStr;

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let (sign, rest) = match t.strip_prefix('-') {
            Some(r) => (-1i8, r),
            None => (1i8, t.strip_prefix('+').unwrap_or(t)),
        };
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };
        ensure!(
            !int_part.is_empty() || !frac_part.is_empty(),
            "empty decimal literal {s:?}"
        );
        ensure!(
            int_part.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit()),
            "invalid decimal literal {s:?}"
        );

        // Left-pad so the decimal point falls on a limb boundary, right-pad
        // to a whole number of limbs.
        let point = int_part.len();
        let pad_left = (FIGS_PER_LIMB - point % FIGS_PER_LIMB) % FIGS_PER_LIMB;
        let total = pad_left + point + frac_part.len();
        let pad_right = (FIGS_PER_LIMB - total % FIGS_PER_LIMB) % FIGS_PER_LIMB;

        let mut digits = String::with_capacity(total + pad_right);
        for _ in 0..pad_left {
            digits.push('0');
        }
        digits.push_str(int_part);
        digits.push_str(frac_part);
        for _ in 0..pad_right {
            digits.push('0');
        }

        let frac = digits
            .as_bytes()
            .chunks(FIGS_PER_LIMB)
            .map(|chunk| chunk.iter().fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0')))
            .collect();
        let mut d = Self {
            sign,
            exponent: ((pad_left + point) / FIGS_PER_LIMB) as i64,
            frac,
        };
        d.normalize();
        Ok(d)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.sign < 0 {
            f.write_str("-")?;
        }
        let e = self.exponent;
        let len = self.frac.len() as i64;
        if e >= len {
            // Pure integer, possibly with trailing zero limbs.
            write!(f, "{}", self.frac[0])?;
            for &l in &self.frac[1..] {
                write!(f, "{l:09}")?;
            }
            for _ in 0..(e - len) {
                f.write_str("000000000")?;
            }
        } else if e >= 1 {
            write!(f, "{}", self.frac[0])?;
            for &l in &self.frac[1..e as usize] {
                write!(f, "{l:09}")?;
            }
            let mut tail = String::new();
            for &l in &self.frac[e as usize..] {
                tail.push_str(&format!("{l:09}"));
            }
            write!(f, ".{}", tail.trim_end_matches('0'))?;
        } else {
            f.write_str("0.")?;
            for _ in 0..(-e) {
                f.write_str("000000000")?;
            }
            let mut tail = String::new();
            for &l in &self.frac {
                tail.push_str(&format!("{l:09}"));
            }
            write!(f, "{}", tail.trim_end_matches('0'))?;
        }
        Ok(())
    }
}
