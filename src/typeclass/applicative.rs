//! Applicative type class - combining independent wrapped values.
//!
//! Each wrapper also exposes an inherent `ap` that applies a wrapped function
//! to a wrapped value. Rust closures cannot be partially applied inside a
//! wrapper without boxing, so the traits here are phrased as `map2`/`map3`,
//! which is what `lift_a2`/`lift_a3` need.
//!
//! # Laws
//!
//! ## Homomorphism Law
//!
//! ```text
//! W::of(f).ap(W::of(x)) == W::of(f(x))
//! ```
//!
//! ## Identity Law
//!
//! ```text
//! W::of(|x| x).ap(v) == v
//! ```
//!
//! ## map2 coherence
//!
//! ```text
//! fa.map2(fb, f) == fa.fmap(curry(f)).ap(fb)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Maybe;
//! use lambda_effect::typeclass::Applicative;
//!
//! let sum = Maybe::of(1).map2(Maybe::of(2), |x: i32, y: i32| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//!
//! let missing = Maybe::of(1).map2(Maybe::<i32>::Nothing, |x: i32, y: i32| x + y);
//! assert!(missing.is_nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for wrappers whose values can be combined with a binary function.
///
/// The type parameters are the payload of the second wrapper (`B`) and the
/// payload of the result (`C`).
pub trait Applicative<B, C>: TypeConstructor {
    /// Combines two wrapped values using a binary function.
    ///
    /// If either side is in its negative state the result is negative and
    /// `function` is never invoked. Deferred wrappers run `self` before
    /// `other` when triggered.
    fn map2<F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static;
}

/// A type class for wrappers whose values can be combined with a ternary function.
pub trait Applicative3<B, C, D>: TypeConstructor {
    /// Combines three wrapped values using a ternary function.
    ///
    /// Evaluation order and short-circuiting follow [`Applicative::map2`].
    fn map3<F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: Fn(Self::Inner, B, C) -> D + 'static;
}
