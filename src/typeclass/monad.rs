//! Monad type class - sequencing computations within a wrapper.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! W::of(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(W::of) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Either;
//! use lambda_effect::typeclass::Monad;
//!
//! fn halve(value: i32) -> Either<String, i32> {
//!     if value % 2 == 0 {
//!         Either::Right(value / 2)
//!     } else {
//!         Either::Left(format!("{value} is odd"))
//!     }
//! }
//!
//! let right: Either<String, i32> = Either::Right(8);
//! assert_eq!(Monad::flat_map(right, halve), Either::Right(4));
//!
//! let odd: Either<String, i32> = Either::Right(3);
//! assert_eq!(Monad::flat_map(odd, halve), Either::Left("3 is odd".to_string()));
//! ```

use super::functor::Functor;

/// A type class for wrappers that support dependent sequencing.
pub trait Monad<B>: Functor<B> {
    /// Applies a wrapper-producing function to the wrapped value and flattens
    /// one level of nesting.
    fn flat_map<F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static;
}
