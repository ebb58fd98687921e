//! Small combinators: identity, pass-through, spying and memoization.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use tracing::debug;

use crate::predicate::{Inspect, deep_inspect};

/// Returns the value unchanged.
///
/// The unit element of composition: `compose!(identity, f)` behaves as `f`.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Runs `function` on a borrowed value for its side effect, then returns the
/// value itself.
///
/// Used to tap into a pipeline (logging, writing a header) without breaking
/// the flow of data.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use lambda_effect::compose::pass_through;
///
/// let seen = RefCell::new(Vec::new());
/// let tap = pass_through(|value: &i32| seen.borrow_mut().push(*value));
///
/// assert_eq!(tap(3), 3);
/// assert_eq!(*seen.borrow(), vec![3]);
/// ```
#[inline]
pub fn pass_through<A, R, F>(function: F) -> impl Fn(A) -> A
where
    F: Fn(&A) -> R,
{
    move |value| {
        function(&value);
        value
    }
}

/// Emits the rendering of `value` as a debug event and returns `value`.
///
/// The pass-through of choice for looking inside a pipeline while debugging.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::compose::spy;
/// use lambda_effect::pipe;
///
/// let pipeline = pipe!(|x: i32| vec![x, x + 1], spy, |pair: Vec<i32>| pair.len());
/// assert_eq!(pipeline(1), 2);
/// ```
#[inline]
pub fn spy<A: Inspect>(value: A) -> A {
    debug!(value = %deep_inspect(&value), "spy");
    value
}

/// Caches the results of a pure function in a caller-owned map.
///
/// The returned closure looks up its argument first and only calls `function`
/// on a miss, storing the result. The cache outlives the closure, so it can
/// be inspected, pre-filled or shared between successive memoized closures.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::collections::HashMap;
/// use lambda_effect::compose::memoize;
///
/// let calls = Cell::new(0);
/// let mut cache = HashMap::new();
/// {
///     let mut square = memoize(&mut cache, |x: u64| {
///         calls.set(calls.get() + 1);
///         x * x
///     });
///     assert_eq!(square(4), 16);
///     assert_eq!(square(4), 16);
/// }
/// assert_eq!(calls.get(), 1);
/// assert_eq!(cache.get(&4), Some(&16));
/// ```
pub fn memoize<A, B, S, F>(cache: &mut HashMap<A, B, S>, function: F) -> impl FnMut(A) -> B
where
    A: Eq + Hash + Clone,
    B: Clone,
    S: BuildHasher,
    F: Fn(A) -> B,
{
    move |argument| {
        if let Some(cached) = cache.get(&argument) {
            return cached.clone();
        }
        let result = function(argument.clone());
        cache.insert(argument, result.clone());
        result
    }
}
