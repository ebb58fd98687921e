//! # lambda-effect
//!
//! Optional values, results, deferred effects and pattern dispatch for Rust,
//! all sharing one set of functor, applicative and monad laws.
//!
//! ## Overview
//!
//! - **Predicates**: emptiness classification ([`IsNothing`](predicate::IsNothing)),
//!   curried equality/ordering predicates and a deterministic debug renderer
//!   ([`Inspect`](predicate::Inspect))
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and the generic
//!   combinators `functor_map`, `functor_flat_map`, `lift_a2`, `lift_a3`
//! - **Function Composition**: `compose!`, `pipe!`, the `nary!` curry adapter
//!   and `memoize` over a caller-owned cache
//! - **Control Structures**: [`Maybe`](control::Maybe), [`Either`](control::Either)
//!   and the [`Case`](control::Case) pattern matcher
//! - **Effects**: [`SyncEffect`](effect::SyncEffect) and
//!   [`AsyncEffect`](effect::AsyncEffect), lazily triggered computations
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and generic combinators
//! - `compose`: Function composition utilities
//! - `control`: `Maybe`, `Either`, `Case`
//! - `effect`: `SyncEffect`, `AsyncEffect`
//! - `async`: `Future` interop for `AsyncEffect`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambda_effect::prelude::*;
//!
//! let sum = lift_a2(|a: i32, b: i32| a + b, Maybe::of(2), Maybe::of(3));
//! assert_eq!(sum, Maybe::Just(5));
//!
//! let missing = lift_a2(|a: i32, b: i32| a + b, Maybe::<i32>::Nothing, Maybe::of(3));
//! assert!(missing.is_nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and macros.
///
/// # Usage
///
/// ```rust
/// use lambda_effect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::predicate::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod predicate;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
