//! Precision-limit behavior.
//!
//! The limit is process-wide state, so everything lives in one sequential
//! test; the other integration suites run in their own processes.

use bigdec_core::{get_prec_limit, set_prec_limit, Decimal, PrecLimitGuard};

#[test]
fn limit_truncates_and_guard_restores() {
    assert_eq!(get_prec_limit(), 0);
    let a = Decimal::from_u64(123_456_789_987);

    // Unlimited: operators are exact.
    assert_eq!(&a + &Decimal::zero(), a);

    // Limited: results are truncated to the digit count.
    set_prec_limit(4);
    assert_eq!(&a + &Decimal::zero(), Decimal::from_u64(123_400_000_000));
    assert_eq!(
        &a * &Decimal::one(),
        Decimal::from_u64(123_400_000_000)
    );

    // Explicit-precision methods ignore the global limit.
    assert_eq!(a.add_prec(&Decimal::zero(), 0), a);
    assert_eq!(a.mul_prec(&Decimal::one(), 6), Decimal::from_u64(123_456_000_000));

    // The guard clears for its scope and restores afterward.
    {
        let _guard = PrecLimitGuard::clear();
        assert_eq!(get_prec_limit(), 0);
        assert_eq!(&a + &Decimal::zero(), a);
    }
    assert_eq!(get_prec_limit(), 4);

    // Restoration also runs on unwinding.
    let panicked = std::panic::catch_unwind(|| {
        let _guard = PrecLimitGuard::clear();
        panic!("boom");
    });
    assert!(panicked.is_err());
    assert_eq!(get_prec_limit(), 4);

    set_prec_limit(0);
}
