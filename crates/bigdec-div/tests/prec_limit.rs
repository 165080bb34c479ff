//! Signed division front door: sign law, exponent bookkeeping, and
//! precision-limit restoration.
//!
//! The precision limit is process-wide state, so this file keeps all of its
//! assertions in one sequential test.

use bigdec_core::{get_prec_limit, set_prec_limit, Decimal};
use bigdec_div::divd_newton;

#[test]
fn signed_divide_restores_limit_on_all_paths() {
    // Raise a temporary limit; the wrapper must suspend and restore it.
    set_prec_limit(40);

    // -1 / 3 with a 6-limb quotient: 45 digits of precision.
    let a = Decimal::from_i64(-1);
    let b = Decimal::from_u64(3);
    let (q, r) = divd_newton(&a, &b, 6).unwrap();

    let mut expect_q: Decimal = format!("0.{}", "3".repeat(45)).parse().unwrap();
    expect_q.set_sign(-1);
    assert_eq!(q, expect_q);
    let mut expect_r = Decimal::one().decimal_shift(-45);
    expect_r.set_sign(-1);
    assert_eq!(r, expect_r);
    assert_eq!(q.sign, -1, "quotient sign is sign(a)·sign(b)");
    assert_eq!(r.sign, -1, "remainder sign is sign(a)");
    // a = q·b + r holds exactly.
    assert_eq!(&(&q * &b) + &r, a);
    assert_eq!(get_prec_limit(), 40, "limit restored after success");

    // Sign grid.
    for (av, bv) in [(7i64, 2i64), (-7, 2), (7, -2), (-7, -2)] {
        let (q, r) = divd_newton(&Decimal::from_i64(av), &Decimal::from_i64(bv), 4).unwrap();
        let prod = &(&q * &Decimal::from_i64(bv)) + &r;
        assert_eq!(prod, Decimal::from_i64(av), "{av} / {bv}");
        if !q.is_zero() {
            assert_eq!(i64::from(q.sign), (av.signum() * bv.signum()), "{av} / {bv}");
        }
        if !r.is_zero() {
            assert_eq!(i64::from(r.sign), av.signum(), "{av} / {bv}");
        }
    }
    assert_eq!(get_prec_limit(), 40);

    // Fractional operands.
    let a: Decimal = "7.25".parse().unwrap();
    let b: Decimal = "0.5".parse().unwrap();
    let (q, r) = divd_newton(&a, &b, 5).unwrap();
    assert_eq!(&(&q * &b) + &r, a);
    assert_eq!(q, "14.5".parse().unwrap());
    // With a 1-limb quotient the rescaled dividend keeps a fractional
    // residue, which must flow into the remainder.
    let (q, r) = divd_newton(&a, &b, 1).unwrap();
    assert_eq!(&(&q * &b) + &r, a);
    assert_eq!(get_prec_limit(), 40);

    // Failure path: divide by zero restores the limit too.
    let err = divd_newton(&a, &Decimal::zero(), 5);
    assert!(err.is_err());
    assert_eq!(get_prec_limit(), 40, "limit restored after failure");

    set_prec_limit(0);
}
