//! Property tests for the bounded scalar and its tree bridge.

use json_scalar_bound::{
    add_signed, from_value_node, to_value_node, BoundedU64, BoundedValue, OutOfBound, SIGNED_MAX,
};
use proptest::prelude::*;

fn in_bound() -> impl Strategy<Value = u64> {
    0..SIGNED_MAX
}

fn out_of_bound() -> impl Strategy<Value = u64> {
    SIGNED_MAX..=u64::MAX
}

proptest! {
    #[test]
    fn accepts_every_in_bound_magnitude(v in in_bound()) {
        let b = BoundedU64::new(v).unwrap();
        prop_assert_eq!(b.get(), v);

        let mut assigned = BoundedU64::default();
        assigned.assign(v).unwrap();
        prop_assert_eq!(assigned, b);
    }

    #[test]
    fn rejects_every_out_of_bound_magnitude(prev in in_bound(), v in out_of_bound()) {
        let err = BoundedU64::new(v).unwrap_err();
        prop_assert_eq!(err.value(), v);
        prop_assert_eq!(err.to_string(), format!("Value {v} out of bound."));

        let mut b = BoundedU64::new(prev).unwrap();
        prop_assert!(b.assign(v).is_err());
        prop_assert_eq!(b.get(), prev);
    }

    #[test]
    fn node_round_trip(v in in_bound()) {
        let b = BoundedU64::new(v).unwrap();
        let node: BoundedValue = to_value_node(b);
        prop_assert_eq!(from_value_node(&node).unwrap(), b);
    }

    #[test]
    fn division_stays_in_bound(v in in_bound(), d in 1u64..=u64::MAX) {
        let q = BoundedU64::new(v).unwrap() / d;
        prop_assert_eq!(q.get(), v / d);
        prop_assert!(q < SIGNED_MAX);

        let mut b = BoundedU64::new(v).unwrap();
        b /= d;
        prop_assert_eq!(b, q);
    }

    #[test]
    fn signed_addition_fails_exactly_past_i64_max(v in in_bound(), x in 1i64..=i64::MAX) {
        let b = BoundedU64::new(v).unwrap();
        let sum = u128::from(v) + x as u128;
        match add_signed(x, b) {
            Ok(n) => {
                prop_assert!(sum <= i64::MAX as u128);
                prop_assert_eq!(n as u128, sum);
            }
            Err(err) => {
                prop_assert!(sum > i64::MAX as u128);
                prop_assert_eq!(err, err_for(sum));
            }
        }
    }

    #[test]
    fn serialized_numeral_matches_display(v in in_bound()) {
        let node = BoundedValue::unsigned(v).unwrap();
        prop_assert_eq!(node.to_string(), v.to_string());
    }
}

fn err_for(sum: u128) -> OutOfBound {
    match BoundedU64::new(sum as u64) {
        Err(err) => err,
        Ok(_) => unreachable!("sum {sum} is past the bound"),
    }
}
