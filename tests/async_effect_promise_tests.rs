#![cfg(feature = "async")]
//! Tests for awaiting `AsyncEffect` values as futures.
//!
//! Effects hold `Rc` state, so delayed continuations are driven from a
//! `LocalSet` on the current-thread runtime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use lambda_effect::effect::{AsyncEffect, PromiseError};
use rstest::rstest;
use tokio::task::{LocalSet, spawn_local};
use tokio::time::sleep;

fn delayed<A: Clone + 'static>(millis: u64, value: A) -> AsyncEffect<String, A> {
    AsyncEffect::of(move |_, resolve| {
        let value = value.clone();
        spawn_local(async move {
            sleep(Duration::from_millis(millis)).await;
            resolve.call(value);
        });
    })
}

// =============================================================================
// Settlement
// =============================================================================

#[rstest]
#[tokio::test]
async fn promise_resolves_with_the_value() {
    let effect: AsyncEffect<String, i32> = AsyncEffect::wrap(42);
    assert_eq!(effect.promise().await, Ok(42));
}

#[rstest]
#[tokio::test]
async fn promise_rejects_with_the_error() {
    let effect: AsyncEffect<String, i32> = AsyncEffect::rejected("timeout".to_string());
    let error = effect.promise().await.unwrap_err();

    assert_eq!(error, PromiseError::Rejected("timeout".to_string()));
    assert_eq!(error.to_string(), "effect rejected: timeout");
}

#[rstest]
#[tokio::test]
async fn promise_reports_abandoned_continuations() {
    let effect: AsyncEffect<String, i32> = AsyncEffect::of(|reject, resolve| {
        drop(reject);
        drop(resolve);
    });
    assert_eq!(effect.promise().await, Err(PromiseError::Abandoned));
}

#[rstest]
#[tokio::test]
async fn promise_keeps_the_first_settlement() {
    let effect: AsyncEffect<String, i32> = AsyncEffect::of(|reject, resolve| {
        reject.call("first".to_string());
        resolve.call(2);
    });
    assert_eq!(
        effect.promise().await,
        Err(PromiseError::Rejected("first".to_string()))
    );
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
#[tokio::test]
async fn promise_triggers_only_when_polled() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let effect: AsyncEffect<String, i32> = AsyncEffect::of(move |_, resolve| {
        counter.set(counter.get() + 1);
        resolve.call(1);
    });

    let first = effect.promise();
    let second = effect.promise();
    assert_eq!(runs.get(), 0);

    assert_eq!(first.await, Ok(1));
    assert_eq!(second.await, Ok(1));
    assert_eq!(runs.get(), 2);
}

// =============================================================================
// Delayed Continuations
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn promise_waits_for_a_delayed_resolve() {
    LocalSet::new()
        .run_until(async {
            let effect = delayed(50, "ready".to_string()).map(|text: String| text.len());
            assert_eq!(effect.promise().await, Ok(5));
        })
        .await;
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delayed_flat_map_links_run_in_order() {
    LocalSet::new()
        .run_until(async {
            let order = Rc::new(RefCell::new(Vec::new()));
            let step = |name: &'static str, millis: u64| {
                let order = Rc::clone(&order);
                delayed(millis, name).map(move |name: &'static str| {
                    order.borrow_mut().push(name);
                    name
                })
            };

            let (second, third) = (step("second", 5), step("third", 1));
            let chain = step("first", 30)
                .flat_map(move |_| second.clone())
                .flat_map(move |_| third.clone());

            assert_eq!(chain.promise().await, Ok("third"));
            assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
        })
        .await;
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delayed_rejection_stops_the_chain() {
    LocalSet::new()
        .run_until(async {
            let reached = Rc::new(Cell::new(false));
            let flag = Rc::clone(&reached);
            let failing: AsyncEffect<String, i32> = AsyncEffect::of(|reject, _| {
                spawn_local(async move {
                    sleep(Duration::from_millis(10)).await;
                    reject.call("upstream failed".to_string());
                });
            });

            let chain = failing.flat_map(move |value: i32| {
                flag.set(true);
                AsyncEffect::wrap(value)
            });

            assert_eq!(
                chain.promise().await,
                Err(PromiseError::Rejected("upstream failed".to_string()))
            );
            assert!(!reached.get());
        })
        .await;
}
