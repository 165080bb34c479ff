//! Divmod law, reciprocal accuracy, and directed division scenarios.

use bigdec_core::{Decimal, DEC_BASE};
use bigdec_div::{divmod_newton, newton_raphson_inverse};
use proptest::prelude::*;

/// Non-negative integer decimal from limbs (most-significant first).
fn int_from_limbs(limbs: Vec<u32>) -> Decimal {
    let mut d = Decimal {
        sign: 1,
        exponent: limbs.len() as i64,
        frac: limbs,
    };
    d.normalize();
    d
}

#[test]
fn fifty_zeros_over_seven() {
    let x: Decimal = ("1".to_owned() + &"0".repeat(50)).parse().unwrap();
    let y = Decimal::from_u64(7);
    let (q, r) = divmod_newton(&x, &y);
    assert_eq!(
        q.to_string(),
        "14285714285714285714285714285714285714285714285714"
    );
    assert_eq!(r, Decimal::from_u64(2));
}

#[test]
fn equal_digit_counts_promote_to_one_block() {
    for (x, y) in [(5u64, 7u64), (99, 10), (999_999_999, 999_999_998), (7, 7)] {
        let (q, r) = divmod_newton(&Decimal::from_u64(x), &Decimal::from_u64(y));
        assert_eq!(q, Decimal::from_u64(x / y), "{x} / {y}");
        assert_eq!(r, Decimal::from_u64(x % y), "{x} % {y}");
    }
}

#[test]
fn first_block_quotient_can_spill_a_limb() {
    // The promoted top of x exceeds y, so the leading block quotient needs
    // block_figs + 1 limbs.
    let x = Decimal::from_u64(95_000_000_005);
    let y = Decimal::from_u64(15);
    let (q, r) = divmod_newton(&x, &y);
    assert_eq!(q, Decimal::from_u64(95_000_000_005 / 15));
    assert_eq!(r, Decimal::from_u64(95_000_000_005 % 15));
}

#[test]
fn zero_dividend() {
    let (q, r) = divmod_newton(&Decimal::zero(), &Decimal::from_u64(12_345));
    assert_eq!(q, Decimal::zero());
    assert_eq!(r, Decimal::zero());
}

#[test]
fn thousand_digit_dividend() {
    // x = 10^999 + 1, y = 10^299 + 7: many blocks, multi-limb divisor.
    let x: Decimal = ("1".to_owned() + &"0".repeat(998) + "1").parse().unwrap();
    let y: Decimal = ("1".to_owned() + &"0".repeat(298) + "7").parse().unwrap();
    let (q, r) = divmod_newton(&x, &y);
    assert_eq!(&(&q * &y) + &r, x);
    assert!(r >= Decimal::zero() && r < y);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    #[test]
    fn divmod_law(
        xl in proptest::collection::vec(0u32..DEC_BASE, 1..24),
        yl in proptest::collection::vec(0u32..DEC_BASE, 1..12),
    ) {
        let x = int_from_limbs(xl);
        let y = int_from_limbs(yl);
        prop_assume!(!y.is_zero());
        let (q, r) = divmod_newton(&x, &y);
        prop_assert!(q >= Decimal::zero());
        prop_assert!(r >= Decimal::zero());
        prop_assert!(r < y);
        prop_assert_eq!(&(&q * &y) + &r, x);
    }

    #[test]
    fn reciprocal_accuracy(x in 1u32..DEC_BASE, prec in 2usize..40) {
        let d = Decimal::from_u64(u64::from(x));
        let inv = newton_raphson_inverse(&d, prec);
        let one = Decimal::one();
        let mut defect = &one - &(&inv * &d);
        defect.set_sign(1);
        // Within two units of the prec-th significant digit of the product.
        let bound = Decimal::from_u64(2).decimal_shift(1 - prec as i64);
        prop_assert!(defect < bound, "x = {}, prec = {}, defect = {}", x, prec, defect);
    }
}
