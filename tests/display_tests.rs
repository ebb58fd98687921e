//! Integration tests for debug rendering and `Display` implementations.
//!
//! Every wrapper's `Display` output is its `Inspect` rendering.

#![cfg(all(feature = "control", feature = "effect"))]

use std::collections::{BTreeMap, HashMap};

use lambda_effect::control::{Case, Either, Maybe};
use lambda_effect::effect::{AsyncEffect, SyncEffect};
use lambda_effect::predicate::{Inspect, deep_inspect, inspect_function};
use rstest::rstest;

// =============================================================================
// Plain Values
// =============================================================================

#[rstest]
#[case::integer(deep_inspect(&42), "42")]
#[case::float(deep_inspect(&1.5), "1.5")]
#[case::boolean(deep_inspect(&false), "false")]
#[case::text(deep_inspect("hi"), "'hi'")]
#[case::owned_text(deep_inspect(&"hi".to_string()), "'hi'")]
#[case::unit(deep_inspect(&()), "undefined")]
#[case::none(deep_inspect(&None::<i32>), "null")]
#[case::some(deep_inspect(&Some(3)), "3")]
#[case::sequence(deep_inspect(&vec![1, 2, 3]), "[1, 2, 3]")]
#[case::pair(deep_inspect(&("a", 1)), "['a', 1]")]
fn plain_values_render_deterministically(#[case] rendered: String, #[case] expected: &str) {
    assert_eq!(rendered, expected);
}

#[rstest]
fn maps_render_sorted_by_key() {
    let hashed: HashMap<&str, i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
    let ordered: BTreeMap<&str, i32> = hashed.clone().into_iter().collect();

    assert_eq!(hashed.inspect(), "{a: 1, b: 2, c: 3}");
    assert_eq!(ordered.inspect(), hashed.inspect());
}

#[rstest]
fn named_functions_render_by_path() {
    fn parse_header(line: &str) -> usize {
        line.len()
    }

    assert!(inspect_function(&parse_header).ends_with("parse_header"));
}

// =============================================================================
// Wrappers
// =============================================================================

#[rstest]
fn maybe_renders_its_tag() {
    assert_eq!(Maybe::of(5).to_string(), "Just(5)");
    assert_eq!(Maybe::of("five").to_string(), "Just('five')");
    assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
}

#[rstest]
fn either_renders_its_tag() {
    let left: Either<String, i32> = Either::Left("boom".to_string());
    let right: Either<String, i32> = Either::Right(1);

    assert_eq!(left.to_string(), "Left('boom')");
    assert_eq!(right.to_string(), "Right(1)");
}

#[rstest]
fn nested_wrappers_render_recursively() {
    let nested = Maybe::of(Either::<String, Vec<i32>>::Right(vec![1, 2]));
    assert_eq!(nested.inspect(), "Just(Right([1, 2]))");

    let inner_nothing = Maybe::of(Maybe::<i32>::Nothing);
    assert_eq!(inner_nothing.inspect(), "Just(Nothing)");
}

#[rstest]
fn effects_render_with_their_function_name() {
    fn read_clock() -> u64 {
        0
    }

    let sync_effect = SyncEffect::of(read_clock);
    assert!(sync_effect.to_string().starts_with("SyncEffect("));
    assert!(sync_effect.to_string().ends_with("read_clock)"));

    let async_effect: AsyncEffect<String, u64> = AsyncEffect::wrap(0);
    assert!(async_effect.to_string().starts_with("AsyncEffect("));
}

#[rstest]
fn case_renders_its_table_type() {
    let matcher = Case::of([(1_u8, "one")]);
    let rendered = matcher.to_string();

    assert!(rendered.starts_with("Case("));
    assert!(rendered.contains("HashMap"));
}

#[rstest]
fn debug_output_of_deferred_values_names_the_kind() {
    let effect = SyncEffect::wrap(1);
    assert!(format!("{effect:?}").starts_with("SyncEffect("));
}
