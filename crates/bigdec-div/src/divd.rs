// crates/bigdec-div/src/divd.rs

//! Signed, fraction-aware division front door.

use crate::divmod::divmod_newton;
use anyhow::{bail, Result};
use bigdec_core::{Decimal, PrecLimitGuard};

/// Divide `a` by `b`, producing a quotient of up to `max_prec` limbs of
/// precision and the matching remainder, with `a = q·b + r`.
///
/// The quotient carries `sign(a)·sign(b)`, the remainder `sign(a)`. The
/// process-wide precision limit is suspended for the duration of the call and
/// restored on every exit path.
///
/// Operands are rescaled to integers: `a` to `base_prec + div_prec` limbs of
/// integer digits and `b` to exactly `base_prec = b.prec` limbs, with
/// `div_prec = max_prec − 1`. Any fractional residue left on the rescaled `a`
/// is extracted up front, the integer part rounded down, and the residue
/// added back to the remainder afterwards.
///
/// # Errors
///
/// Fails when `b` is zero; failures from the arithmetic layer propagate
/// unchanged.
pub fn divd_newton(a: &Decimal, b: &Decimal, max_prec: usize) -> Result<(Decimal, Decimal)> {
    if b.is_zero() {
        bail!("divide by zero");
    }
    let _guard = PrecLimitGuard::clear();

    let div_prec = max_prec.saturating_sub(1) as i64;
    let base_prec = b.frac.len() as i64;

    let mut a2 = a.clone();
    a2.set_sign(1);
    a2.exponent = base_prec + div_prec;
    let mut b2 = b.clone();
    b2.set_sign(1);
    b2.exponent = base_prec;

    let mut a2_frac = None;
    if a2.frac.len() as i64 > a2.exponent {
        a2_frac = Some(a2.fract());
        a2.round_down_mid();
    }
    let (div, mut modulo) = divmod_newton(&a2, &b2);
    if let Some(frac) = a2_frac {
        modulo = &modulo + &frac;
    }

    let mut c = div;
    c.set_sign(a.sign * b.sign);
    if !c.is_zero() {
        c.exponent += a.exponent - b.exponent - div_prec;
    }
    let mut r = modulo;
    r.set_sign(a.sign);
    if !r.is_zero() {
        r.exponent += a.exponent - base_prec - div_prec;
    }
    Ok((c, r))
}
