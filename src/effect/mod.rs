//! Deferred effects.
//!
//! Both effect types describe work without performing it. Work happens each
//! time the effect is triggered, and composing effects with `map`,
//! `flat_map` or `ap` only builds a larger description.
//!
//! - [`SyncEffect`]: a thunk producing a value when triggered
//! - [`AsyncEffect`]: a continuation-passing computation that eventually
//!   calls its [`Reject`] or its [`Resolve`] continuation, exactly once
//!
//! With the `async` feature an [`AsyncEffect`] can also be awaited through
//! [`AsyncEffect::promise`], failing with a [`PromiseError`].
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use lambda_effect::effect::{AsyncEffect, SyncEffect};
//!
//! let now = SyncEffect::of(|| 1_700_000_000_u64);
//! assert_eq!(now.map(|seconds: u64| seconds / 60).trigger(), 28_333_333);
//!
//! let pending = Rc::new(RefCell::new(Vec::new()));
//! let queue = Rc::clone(&pending);
//! let delayed: AsyncEffect<String, u32> = AsyncEffect::of(move |_, resolve| {
//!     queue.borrow_mut().push(resolve);
//! });
//!
//! let seen = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&seen);
//! delayed
//!     .map(|x: u32| x + 1)
//!     .trigger(|_| {}, move |x| *sink.borrow_mut() = Some(x));
//! assert_eq!(*seen.borrow(), None);
//!
//! let resolve = pending.borrow_mut().remove(0);
//! resolve.call(41);
//! assert_eq!(*seen.borrow(), Some(42));
//! ```

mod async_effect;
mod error;
mod sync_effect;

pub use async_effect::{AsyncEffect, Reject, Resolve};
pub use error::PromiseError;
pub use sync_effect::SyncEffect;
