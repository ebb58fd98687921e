#![cfg(feature = "effect")]
//! Property-based tests for the `AsyncEffect` laws.
//!
//! Effects are compared by triggering them with recording continuations and
//! comparing how they settled.

use std::cell::RefCell;
use std::rc::Rc;

use lambda_effect::compose::identity;
use lambda_effect::effect::AsyncEffect;
use lambda_effect::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn settle<A: 'static>(effect: &AsyncEffect<String, A>) -> Option<Result<A, String>> {
    let outcome = Rc::new(RefCell::new(None));
    let (rejected, resolved) = (Rc::clone(&outcome), Rc::clone(&outcome));
    effect.trigger(
        move |error| *rejected.borrow_mut() = Some(Err(error)),
        move |value| *resolved.borrow_mut() = Some(Ok(value)),
    );
    outcome.take()
}

fn any_effect() -> impl Strategy<Value = AsyncEffect<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(AsyncEffect::wrap),
        "[a-z]{1,6}".prop_map(AsyncEffect::rejected),
    ]
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_async_effect_functor_identity(effect in any_effect()) {
        prop_assert_eq!(settle(&effect.clone().map(identity)), settle(&effect));
    }

    #[test]
    fn prop_async_effect_functor_composition(effect in any_effect()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left_result = settle(&effect.clone().fmap(function1).fmap(function2));
        let right_result = settle(&effect.map(move |x| function2(function1(x))));

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_async_effect_left_identity(value: i32) {
        let function = |n: i32| {
            if n % 3 == 0 {
                AsyncEffect::rejected(format!("{n} is divisible by three"))
            } else {
                AsyncEffect::wrap(n.wrapping_mul(2))
            }
        };

        let left_result = settle(&AsyncEffect::wrap(value).flat_map(function));
        let right_result = settle(&function(value));

        prop_assert_eq!(left_result, right_result);
    }

    #[test]
    fn prop_async_effect_right_identity(effect in any_effect()) {
        let left_result = settle(&effect.clone().flat_map(AsyncEffect::wrap));
        prop_assert_eq!(left_result, settle(&effect));
    }

    #[test]
    fn prop_async_effect_associativity(effect in any_effect()) {
        let function1 = |n: i32| AsyncEffect::<String, i32>::wrap(n.wrapping_add(1));
        let function2 = |n: i32| {
            AsyncEffect::of(move |reject, resolve| {
                if n > 0 { resolve.call(n) } else { reject.call("not positive".to_string()) }
            })
        };

        let left_result = settle(&Monad::flat_map(effect.clone().flat_map(function1), function2));
        let right_result = settle(&effect.flat_map(move |x| function1(x).flat_map(function2)));

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_async_effect_homomorphism(value: i32) {
        let function = |n: i32| n.wrapping_sub(4);

        let left_result = settle(&AsyncEffect::wrap(function).ap(AsyncEffect::wrap(value)));
        prop_assert_eq!(left_result, Some(Ok(function(value))));
    }

    #[test]
    fn prop_async_effect_map2_keeps_first_rejection(first in any_effect(), second in any_effect()) {
        let combined = settle(&first.clone().map2(second.clone(), |a: i32, b: i32| a.wrapping_add(b)));

        let expected = match (settle(&first), settle(&second)) {
            (Some(Err(error)), _) | (Some(Ok(_)), Some(Err(error))) => Some(Err(error)),
            (Some(Ok(a)), Some(Ok(b))) => Some(Ok(a.wrapping_add(b))),
            _ => None,
        };
        prop_assert_eq!(combined, expected);
    }
}
