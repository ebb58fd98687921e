//! Functor type class - mapping over wrapped values.
//!
//! `Functor<B>` is parameterized by the output type instead of making `fmap`
//! generic over it. That lets each wrapper constrain what it can hold after a
//! map: `Maybe` re-classifies the transformed value and therefore needs
//! `B: IsNothing`, while the deferred effects accept any `'static` output.
//!
//! Transforms are `Fn + 'static` because deferred effects keep them and call
//! them again on every trigger.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Maybe;
//! use lambda_effect::typeclass::Functor;
//!
//! let length = Maybe::of("hello".to_string()).fmap(|text: String| text.len());
//! assert_eq!(length, Maybe::Just(5));
//!
//! // An empty result collapses to Nothing
//! let emptied = Maybe::of("hello".to_string()).fmap(|_: String| String::new());
//! assert!(emptied.is_nothing());
//! ```

use super::higher::TypeConstructor;

/// A type class for wrappers that can have a function mapped over their contents.
pub trait Functor<B>: TypeConstructor {
    /// Applies a function to the wrapped value, producing a wrapper of `B`.
    ///
    /// Negative states (`Nothing`, `Left`) and deferred states never invoke
    /// `function` here; deferred wrappers invoke it only when triggered.
    fn fmap<F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static;

    /// Replaces the wrapped value with a constant.
    ///
    /// Equivalent to `fmap(|_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    /// use lambda_effect::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// assert_eq!(right.replace("replaced"), Either::Right("replaced"));
    /// ```
    #[inline]
    fn replace(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }
}
