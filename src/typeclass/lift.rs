//! Generic combinators over any wrapper implementing the type classes.
//!
//! These are the point-free counterparts of the wrapper methods: they let a
//! transform be written once and applied to `Maybe`, `Either`, `SyncEffect`,
//! `AsyncEffect` or `Case` alike.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::{Either, Maybe};
//! use lambda_effect::typeclass::{functor_map, lift_a2};
//!
//! assert_eq!(functor_map(|x: i32| x * 2, Maybe::of(21)), Maybe::Just(42));
//!
//! let left: Either<String, i32> = Either::Left("no".to_string());
//! let right: Either<String, i32> = Either::Right(1);
//! assert_eq!(lift_a2(|a: i32, b: i32| a + b, left.clone(), right), left);
//! ```

use super::applicative::{Applicative, Applicative3};
use super::functor::Functor;
use super::monad::Monad;

/// Maps `function` over `wrapper`.
///
/// Equivalent to `wrapper.fmap(function)`.
#[inline]
pub fn functor_map<W, B, F>(function: F, wrapper: W) -> W::WithType<B>
where
    W: Functor<B>,
    F: Fn(W::Inner) -> B + 'static,
{
    wrapper.fmap(function)
}

/// Curried form of [`functor_map`]: fixes the function, waits for the wrapper.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::control::Maybe;
/// use lambda_effect::typeclass::{functor_map, functor_map_with};
///
/// let double = |x: i32| x * 2;
/// assert_eq!(
///     functor_map_with(double)(Maybe::of(4)),
///     functor_map(double, Maybe::of(4)),
/// );
/// ```
#[inline]
pub fn functor_map_with<W, B, F>(function: F) -> impl FnOnce(W) -> W::WithType<B>
where
    W: Functor<B>,
    F: Fn(W::Inner) -> B + 'static,
{
    move |wrapper| wrapper.fmap(function)
}

/// Flat-maps `function` over `wrapper`.
///
/// Equivalent to `wrapper.flat_map(function)` through the [`Monad`] trait.
#[inline]
pub fn functor_flat_map<W, B, F>(function: F, wrapper: W) -> W::WithType<B>
where
    W: Monad<B>,
    F: Fn(W::Inner) -> W::WithType<B> + 'static,
{
    Monad::flat_map(wrapper, function)
}

/// Curried form of [`functor_flat_map`].
#[inline]
pub fn functor_flat_map_with<W, B, F>(function: F) -> impl FnOnce(W) -> W::WithType<B>
where
    W: Monad<B>,
    F: Fn(W::Inner) -> W::WithType<B> + 'static,
{
    move |wrapper| Monad::flat_map(wrapper, function)
}

/// Applies a binary function across two wrapped values.
///
/// The result is negative as soon as either input is; `function` then never
/// runs.
#[inline]
pub fn lift_a2<W, B, C, F>(function: F, first: W, second: W::WithType<B>) -> W::WithType<C>
where
    W: Applicative<B, C>,
    F: Fn(W::Inner, B) -> C + 'static,
{
    first.map2(second, function)
}

/// Applies a ternary function across three wrapped values.
#[inline]
pub fn lift_a3<W, B, C, D, F>(
    function: F,
    first: W,
    second: W::WithType<B>,
    third: W::WithType<C>,
) -> W::WithType<D>
where
    W: Applicative3<B, C, D>,
    F: Fn(W::Inner, B, C) -> D + 'static,
{
    first.map3(second, third, function)
}
