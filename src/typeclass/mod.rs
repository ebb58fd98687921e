//! Type class traits shared by every wrapper kind.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over wrapped values
//! - [`Applicative`], [`Applicative3`]: Combining independent wrapped values
//! - [`Monad`]: Sequencing dependent computations
//!
//! ## Generic combinators
//!
//! - [`functor_map`], [`functor_map_with`]
//! - [`functor_flat_map`], [`functor_flat_map_with`]
//! - [`lift_a2`], [`lift_a3`]
//!
//! ## Parameterized outputs
//!
//! Unlike the textbook encoding, the output payload is a parameter of the
//! trait (`Functor<B>`) rather than of the method. A wrapper can then require
//! something of what it will hold, which `Maybe` needs to re-classify mapped
//! values as present or absent.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Maybe;
//! use lambda_effect::typeclass::lift_a3;
//!
//! let total = lift_a3(
//!     |a: i32, b: i32, c: i32| a + b + c,
//!     Maybe::of(1),
//!     Maybe::of(2),
//!     Maybe::of(3),
//! );
//! assert_eq!(total, Maybe::Just(6));
//! ```

mod applicative;
mod functor;
mod higher;
mod lift;
mod monad;

pub use applicative::{Applicative, Applicative3};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use lift::{
    functor_flat_map, functor_flat_map_with, functor_map, functor_map_with, lift_a2, lift_a3,
};
pub use monad::Monad;
