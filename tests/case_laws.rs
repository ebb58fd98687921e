#![cfg(feature = "control")]
//! Property-based tests for the `Case` laws.
//!
//! Two matchers are equal when they produce equal results for every key.

use lambda_effect::compose::identity;
use lambda_effect::control::{Case, Pattern};
use lambda_effect::typeclass::{Functor, Monad};
use proptest::prelude::*;

fn table() -> impl Strategy<Value = (Vec<(u8, i32)>, Option<i32>)> {
    (
        proptest::collection::vec((0_u8..16, any::<i32>()), 0..8),
        proptest::option::of(any::<i32>()),
    )
}

fn build(entries: Vec<(u8, i32)>, wildcard: Option<i32>) -> Case<u8, i32> {
    Case::from_patterns(
        entries
            .into_iter()
            .map(|(key, value)| (Pattern::Key(key), value))
            .chain(wildcard.map(|value| (Pattern::Wildcard, value))),
    )
}

proptest! {
    #[test]
    fn prop_case_lookup_prefers_the_last_entry((entries, wildcard) in table(), key in 0_u8..16) {
        let expected = entries
            .iter()
            .rev()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| *value)
            .or(wildcard);

        prop_assert_eq!(build(entries, wildcard).match_key(&key), expected);
    }

    #[test]
    fn prop_case_functor_identity((entries, wildcard) in table(), key in 0_u8..16) {
        let matcher = build(entries, wildcard);
        prop_assert_eq!(matcher.clone().map(identity).match_key(&key), matcher.match_key(&key));
    }

    #[test]
    fn prop_case_functor_composition((entries, wildcard) in table(), key in 0_u8..16) {
        let function1 = |n: i32| n.wrapping_add(2);
        let function2 = |n: i32| n.wrapping_mul(3);
        let matcher = build(entries, wildcard);

        let left_result = matcher.clone().fmap(function1).fmap(function2).match_key(&key);
        let right_result = matcher.map(move |x| function2(function1(x))).match_key(&key);

        prop_assert_eq!(left_result, right_result);
    }

    #[test]
    fn prop_case_flat_map_matches_the_same_key((entries, wildcard) in table(), key in 0_u8..16) {
        let matcher = build(entries, wildcard);
        let offsets = |value: i32| Case::with_wildcard([(0_u8, value.wrapping_neg())], value);

        let chained = Monad::flat_map(matcher.clone(), offsets).match_key(&key);
        let expected = matcher
            .match_key(&key)
            .and_then(|value| offsets(value).match_key(&key));

        prop_assert_eq!(chained, expected);
    }
}
