// ============================================================================
// Decimal Property Tests
// Round trips, ordering laws and overflow boundaries across both widths
// ============================================================================

use columnar_decimal::prelude::*;
use proptest::prelude::*;

/// A value that fits its declared precision.
fn valid_decimal() -> impl Strategy<Value = Decimal> {
    (1u8..=38)
        .prop_flat_map(|precision| (Just(precision), 0u8..=precision))
        .prop_flat_map(|(precision, scale)| {
            let ty = DecimalType::new(precision, scale).unwrap();
            let max = ty.max_raw().unwrap();
            (Just(ty), -max..=max)
        })
        .prop_map(|(ty, raw)| Decimal::from_raw(raw, ty).unwrap())
}

fn any_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (any::<i64>(), 0u8..=18).prop_map(|(v, s)| Decimal::narrow(v, s, 18).unwrap()),
        (any::<i128>(), 0u8..=38).prop_map(|(v, s)| Decimal::wide(v, s, 38).unwrap()),
    ]
}

proptest! {
    #[test]
    fn prop_text_round_trip(d in valid_decimal()) {
        let text = d.to_string();
        let parsed = Decimal::parse(&text, d.decimal_type()).unwrap();
        prop_assert_eq!(parsed, d);
        prop_assert_eq!(parsed.raw(), d.raw());

        let inferred: Decimal = text.parse().unwrap();
        prop_assert_eq!(inferred, d);
    }

    #[test]
    fn prop_same_scale_matches_integer_order(a in any::<i128>(), b in any::<i128>(), scale in 0u8..=38) {
        let l = Decimal::wide(a, scale, 38).unwrap();
        let r = Decimal::wide(b, scale, 38).unwrap();
        prop_assert_eq!(compare(&l, &r), a.cmp(&b) as i32);
        prop_assert_eq!(l.cmp(&r), a.cmp(&b));
    }

    #[test]
    fn prop_compare_antisymmetric(a in any_decimal(), b in any_decimal()) {
        prop_assert_eq!(compare(&a, &b), -compare(&b, &a));
    }

    #[test]
    fn prop_compare_transitive(a in any_decimal(), b in any_decimal(), c in any_decimal()) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert!(compare(&sorted[0], &sorted[1]) <= 0);
        prop_assert!(compare(&sorted[1], &sorted[2]) <= 0);
        prop_assert!(compare(&sorted[0], &sorted[2]) <= 0);
    }

    #[test]
    fn prop_add_subtract_recovers(a in any::<i64>(), b in any::<i64>(), scale in 0u8..=18) {
        let ty = DecimalType::wide_max(scale);
        let l = Decimal::narrow(a, scale, 18).unwrap();
        let r = Decimal::narrow(b, scale, 18).unwrap();
        let sum = add::<i128, Checked>(l, r, ty).unwrap();
        let back = subtract::<i128, Checked>(sum, r, ty).unwrap();
        prop_assert_eq!(back.raw(), l.raw());
    }

    #[test]
    fn prop_narrow_add_subtract_recovers_when_no_overflow(a in any::<i64>(), b in any::<i64>()) {
        let ty = DecimalType::narrow_max(2);
        let l = Decimal::narrow(a, 2, 18).unwrap();
        let r = Decimal::narrow(b, 2, 18).unwrap();
        match add::<i64, Checked>(l, r, ty) {
            Ok(sum) => {
                let back = subtract::<i64, Checked>(sum, r, ty).unwrap();
                prop_assert_eq!(back.value(), a);
            }
            Err(e) => {
                prop_assert!(e.is_overflow());
                prop_assert!(a.checked_add(b).is_none());
            }
        }
    }

    #[test]
    fn prop_divide_by_zero_is_zero(d in any_decimal(), scale in 0u8..=18) {
        let zero = Decimal::narrow(0, scale, 18).unwrap();
        let q = divide::<i128, Checked>(d, zero, DecimalType::wide_max(scale)).unwrap();
        prop_assert!(q.is_zero());
        let q = divide::<i128, Unchecked>(d, zero, DecimalType::wide_max(0)).unwrap();
        prop_assert!(q.is_zero());
    }

    #[test]
    fn prop_checked_wide_results_avoid_sentinels(a in any::<i128>(), b in any::<i128>()) {
        let l = Decimal::wide(a, 0, 38).unwrap();
        let r = Decimal::wide(b, 0, 38).unwrap();
        let ty = DecimalType::wide_max(0);
        for result in [
            add::<i128, Checked>(l, r, ty),
            subtract::<i128, Checked>(l, r, ty),
            multiply::<i128, Checked>(l, r, ty),
            divide::<i128, Checked>(l, r, ty),
        ] {
            if let Ok(d) = result {
                prop_assert!(!d.is_null() && !d.is_empty());
            }
        }
    }
}

#[test]
fn test_add_overflow_boundaries_both_widths() {
    let nty = DecimalType::narrow_max(0);
    let one = Decimal::narrow(1, 0, 18).unwrap();
    let minus_one = Decimal::narrow(-1, 0, 18).unwrap();
    let nmax = Decimal::narrow(i64::MAX, 0, 18).unwrap();
    let nmin = Decimal::narrow(i64::MIN, 0, 18).unwrap();
    assert!(add::<i64, Checked>(nmax, one, nty).unwrap_err().is_overflow());
    assert!(add::<i64, Checked>(nmin, minus_one, nty).unwrap_err().is_overflow());

    let wty = DecimalType::wide_max(0);
    let wmax = Decimal::wide(i128::MAX, 0, 38).unwrap();
    let wmin = Decimal::wide(i128::MIN, 0, 38).unwrap();
    assert!(add::<i128, Checked>(wmax, one, wty).unwrap_err().is_overflow());
    assert!(add::<i128, Checked>(wmin, minus_one, wty).unwrap_err().is_overflow());
}
