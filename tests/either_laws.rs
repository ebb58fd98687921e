#![cfg(feature = "control")]
//! Property-based tests for the `Either` laws.
//!
//! `Left` values take part in every law: they must pass through each
//! transform unchanged.

use lambda_effect::compose::identity;
use lambda_effect::control::Either;
use lambda_effect::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn any_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,6}".prop_map(Either::Left),
    ]
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_either_functor_identity(either in any_either()) {
        prop_assert_eq!(either.clone().map(identity), either);
    }

    #[test]
    fn prop_either_functor_composition(either in any_either()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left_result = either.clone().fmap(function1).fmap(function2);
        let right_result = either.map(|x| function2(function1(x)));

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value: i32) {
        let function = |n: i32| {
            if n >= 0 { Either::Right(n) } else { Either::Left(format!("negative: {n}")) }
        };

        prop_assert_eq!(Either::of(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_either_right_identity(either in any_either()) {
        prop_assert_eq!(either.clone().flat_map(Either::of), either);
    }

    #[test]
    fn prop_either_associativity(either in any_either()) {
        let function1 = |n: i32| Either::<String, i32>::Right(n.wrapping_sub(3));
        let function2 = |n: i32| {
            if n % 2 == 0 { Either::Right(n) } else { Either::Left("odd".to_string()) }
        };

        let left_result = Monad::flat_map(either.clone().flat_map(function1), function2);
        let right_result = either.flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_either_homomorphism(value: i32) {
        let function = |n: i32| n.wrapping_mul(5);

        let left_result: Either<String, i32> = Either::of(function).ap(Either::of(value));
        prop_assert_eq!(left_result, Either::of(function(value)));
    }

    #[test]
    fn prop_either_map2_keeps_first_left(first in any_either(), second in any_either()) {
        let combined = first.clone().map2(second.clone(), |a: i32, b: i32| a.wrapping_add(b));

        let expected = match (first, second) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => Either::Left(error),
            (Either::Right(a), Either::Right(b)) => Either::Right(a.wrapping_add(b)),
        };
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn prop_either_result_conversion_preserves_tag(either in any_either()) {
        let result: Result<i32, String> = either.clone().into();
        prop_assert_eq!(result.is_ok(), either.is_right());
        prop_assert_eq!(Either::from(result), either);
    }
}
