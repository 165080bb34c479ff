//! Property tests pinning the schoolbook layer to native integer arithmetic.

use bigdec_core::Decimal;
use proptest::prelude::*;

fn from_i128(v: i128) -> Decimal {
    let mut d: Decimal = v.abs().to_string().parse().unwrap();
    if v < 0 {
        d.set_sign(-1);
    }
    d
}

fn to_i128(d: &Decimal) -> i128 {
    let v: i128 = d.to_string().parse().unwrap();
    v
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn add_sub_match_i128(a in -(1i128 << 100)..(1i128 << 100), b in -(1i128 << 100)..(1i128 << 100)) {
        let (da, db) = (from_i128(a), from_i128(b));
        prop_assert_eq!(to_i128(&(&da + &db)), a + b);
        prop_assert_eq!(to_i128(&(&da - &db)), a - b);
    }

    #[test]
    fn mul_matches_i128(a in -(1i128 << 60)..(1i128 << 60), b in -(1i128 << 60)..(1i128 << 60)) {
        let (da, db) = (from_i128(a), from_i128(b));
        prop_assert_eq!(to_i128(&(&da * &db)), a * b);
    }

    #[test]
    fn ordering_matches_i128(a in -(1i128 << 100)..(1i128 << 100), b in -(1i128 << 100)..(1i128 << 100)) {
        let (da, db) = (from_i128(a), from_i128(b));
        prop_assert_eq!(da.cmp(&db), a.cmp(&b));
    }

    #[test]
    fn parse_display_roundtrip(v in -(1i128 << 110)..(1i128 << 110), shift in -6i64..6) {
        let d = from_i128(v).decimal_shift(shift * 3);
        let s = d.to_string();
        let back: Decimal = s.parse().unwrap();
        prop_assert_eq!(back, d);
    }

    #[test]
    fn trunc_fract_recompose(v in -(1i128 << 90)..(1i128 << 90), shift in -4i64..4) {
        let d = from_i128(v).decimal_shift(shift * 5);
        let sum = &d.trunc() + &d.fract();
        prop_assert_eq!(sum, d);
    }
}
