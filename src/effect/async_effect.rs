//! `AsyncEffect` - deferred asynchronous side effects in continuation style.
//!
//! An `AsyncEffect<E, A>` holds a function that, when triggered, receives a
//! [`Reject<E>`] and a [`Resolve<A>`] continuation and eventually calls one of
//! them, now or at any later point. Nothing runs until
//! [`AsyncEffect::trigger`] is called, and each trigger runs the held function
//! again.
//!
//! # Settlement
//!
//! The two continuations handed to one trigger share a single settlement: the
//! first call to either of them delivers its value, and every later call, to
//! either handle, is ignored. A held function that drops both handles without
//! calling them leaves the trigger unsettled.
//!
//! # Ordering
//!
//! In a `flat_map` chain the next effect is only built and triggered from
//! inside the previous effect's resolve continuation, so links run strictly
//! one after another. A rejection at any link skips the rest of the chain and
//! reaches the outer reject continuation.
//!
//! # Panics
//!
//! A panic raised synchronously by the held function is not converted into a
//! rejection; it propagates to whoever called `trigger`. This holds for effects
//! built by `of`, `map`, `flat_map` and `ap` alike.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use lambda_effect::effect::AsyncEffect;
//!
//! let fetch_user = AsyncEffect::of(|reject, resolve| {
//!     let id = 7;
//!     if id > 0 {
//!         resolve.call(format!("user-{id}"));
//!     } else {
//!         reject.call(404);
//!     }
//! });
//!
//! let outcome = Rc::new(RefCell::new(String::new()));
//! let (on_error, on_success) = (Rc::clone(&outcome), Rc::clone(&outcome));
//!
//! fetch_user.map(|name: String| name.to_uppercase()).trigger(
//!     move |code: i32| *on_error.borrow_mut() = format!("failed with {code}"),
//!     move |name| *on_success.borrow_mut() = name,
//! );
//! assert_eq!(*outcome.borrow(), "USER-7");
//! ```

use std::any::type_name;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::predicate::{Inspect, IsNothing};
use crate::typeclass::{Applicative, Applicative3, Functor, Monad, TypeConstructor};

#[cfg(feature = "async")]
use super::error::PromiseError;

type Continuations<E, A> = (Box<dyn FnOnce(E)>, Box<dyn FnOnce(A)>);

/// The reject continuation of one trigger.
///
/// Clones share the settlement of the trigger they were created for.
pub struct Reject<E> {
    settle: Rc<dyn Fn(E)>,
    settled: Rc<dyn Fn() -> bool>,
}

/// The resolve continuation of one trigger.
///
/// Clones share the settlement of the trigger they were created for.
pub struct Resolve<A> {
    settle: Rc<dyn Fn(A)>,
    settled: Rc<dyn Fn() -> bool>,
}

impl<E> Reject<E> {
    /// Rejects the trigger with `error`, unless it is already settled.
    #[inline]
    pub fn call(&self, error: E) {
        (self.settle)(error);
    }

    /// Returns `true` once either continuation of this trigger was called.
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.settled)()
    }
}

impl<A> Resolve<A> {
    /// Resolves the trigger with `value`, unless it is already settled.
    #[inline]
    pub fn call(&self, value: A) {
        (self.settle)(value);
    }

    /// Returns `true` once either continuation of this trigger was called.
    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.settled)()
    }
}

impl<E> Clone for Reject<E> {
    fn clone(&self) -> Self {
        Self {
            settle: Rc::clone(&self.settle),
            settled: Rc::clone(&self.settled),
        }
    }
}

impl<A> Clone for Resolve<A> {
    fn clone(&self) -> Self {
        Self {
            settle: Rc::clone(&self.settle),
            settled: Rc::clone(&self.settled),
        }
    }
}

impl<E> fmt::Debug for Reject<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Reject")
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl<A> fmt::Debug for Resolve<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Resolve")
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// Creates the continuation pair of one trigger around a shared settlement.
fn settlement<E, A, R, S>(on_reject: R, on_resolve: S) -> (Reject<E>, Resolve<A>)
where
    E: 'static,
    A: 'static,
    R: FnOnce(E) + 'static,
    S: FnOnce(A) + 'static,
{
    let pending: Continuations<E, A> = (Box::new(on_reject), Box::new(on_resolve));
    let slot = Rc::new(RefCell::new(Some(pending)));

    let settled = {
        let slot = Rc::clone(&slot);
        Rc::new(move || slot.borrow().is_none()) as Rc<dyn Fn() -> bool>
    };
    let reject_slot = Rc::clone(&slot);
    let reject = Reject {
        settle: Rc::new(move |error| {
            let taken = reject_slot.borrow_mut().take();
            if let Some((on_reject, _)) = taken {
                on_reject(error);
            }
        }),
        settled: Rc::clone(&settled),
    };
    let resolve = Resolve {
        settle: Rc::new(move |value| {
            let taken = slot.borrow_mut().take();
            if let Some((_, on_resolve)) = taken {
                on_resolve(value);
            }
        }),
        settled,
    };
    (reject, resolve)
}

/// A deferred asynchronous computation that rejects with `E` or resolves
/// with `A`.
///
/// # Type Parameters
///
/// - `E`: The rejection payload.
/// - `A`: The resolution payload.
///
/// # Monad Laws
///
/// Two effects are equal when, for every pair of continuations, triggering
/// them settles the same way with equal payloads.
///
/// 1. **Left Identity**: `AsyncEffect::wrap(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(AsyncEffect::wrap) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct AsyncEffect<E, A> {
    run: Rc<dyn Fn(Reject<E>, Resolve<A>)>,
    label: &'static str,
}

static_assertions::assert_not_impl_any!(AsyncEffect<String, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Resolve<i32>: Send, Sync);

impl<E, A> Clone for AsyncEffect<E, A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
            label: self.label,
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<E: 'static, A: 'static> AsyncEffect<E, A> {
    /// Describes an asynchronous computation without running it.
    ///
    /// `function` receives the continuations of each trigger; it may call one
    /// of them immediately or keep them and call one later.
    pub fn of<F>(function: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<A>) + 'static,
    {
        Self::labelled(type_name::<F>(), function)
    }

    fn labelled<F>(label: &'static str, function: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<A>) + 'static,
    {
        Self {
            run: Rc::new(function),
            label,
        }
    }

    /// Describes a computation that resolves with a clone of `value`.
    pub fn wrap(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(move |_, resolve| resolve.call(value.clone()))
    }

    /// Describes a computation that rejects with a clone of `error`.
    pub fn rejected(error: E) -> Self
    where
        E: Clone,
    {
        Self::of(move |reject, _| reject.call(error.clone()))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Runs the held function now with fresh continuations wrapping
    /// `on_reject` and `on_resolve`.
    ///
    /// At most one of the two callbacks is ever invoked, at most once.
    pub fn trigger<R, S>(&self, on_reject: R, on_resolve: S)
    where
        R: FnOnce(E) + 'static,
        S: FnOnce(A) + 'static,
    {
        trace!(effect = self.label, "triggering async effect");
        let (reject, resolve) = settlement(on_reject, on_resolve);
        (self.run)(reject, resolve);
    }

    /// Returns a future that triggers this effect when first polled and
    /// completes when the trigger settles.
    ///
    /// The future completes with [`PromiseError::Abandoned`] if the held
    /// function drops both continuations without calling either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::effect::{AsyncEffect, PromiseError};
    ///
    /// let answer: AsyncEffect<String, i32> = AsyncEffect::wrap(42);
    /// assert_eq!(futures::executor::block_on(answer.promise()), Ok(42));
    ///
    /// let failure: AsyncEffect<String, i32> = AsyncEffect::rejected("no".to_string());
    /// assert_eq!(
    ///     futures::executor::block_on(failure.promise()),
    ///     Err(PromiseError::Rejected("no".to_string()))
    /// );
    /// ```
    #[cfg(feature = "async")]
    pub fn promise(&self) -> impl Future<Output = Result<A, PromiseError<E>>> + use<E, A> {
        use futures::channel::oneshot;

        let effect = self.clone();
        async move {
            let (sender, receiver) = oneshot::channel::<Result<A, E>>();
            let sender = Rc::new(RefCell::new(Some(sender)));
            let reject_sender = Rc::clone(&sender);
            effect.trigger(
                move |error| {
                    if let Some(sender) = reject_sender.borrow_mut().take() {
                        let _ = sender.send(Err(error));
                    }
                },
                move |value| {
                    if let Some(sender) = sender.borrow_mut().take() {
                        let _ = sender.send(Ok(value));
                    }
                },
            );
            match receiver.await {
                Ok(settled) => settled.map_err(PromiseError::Rejected),
                Err(oneshot::Canceled) => Err(PromiseError::Abandoned),
            }
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Describes running this effect and applying `function` to its
    /// resolution. Rejections pass through untouched.
    pub fn map<B, F>(self, function: F) -> AsyncEffect<E, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        AsyncEffect::labelled(self.label, move |reject: Reject<E>, resolve: Resolve<B>| {
            let function = Rc::clone(&function);
            self.trigger(
                move |error| reject.call(error),
                move |value| resolve.call(function(value)),
            );
        })
    }

    /// Describes running this effect and applying `function` to its
    /// rejection. Resolutions pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::effect::{AsyncEffect, PromiseError};
    ///
    /// let failing: AsyncEffect<u16, ()> = AsyncEffect::rejected(503);
    /// let described = failing.map_err(|code| format!("HTTP {code}"));
    /// assert_eq!(
    ///     futures::executor::block_on(described.promise()),
    ///     Err(PromiseError::Rejected("HTTP 503".to_string()))
    /// );
    /// ```
    pub fn map_err<G, F>(self, function: F) -> AsyncEffect<G, A>
    where
        G: 'static,
        F: Fn(E) -> G + 'static,
    {
        let function = Rc::new(function);
        AsyncEffect::labelled(self.label, move |reject: Reject<G>, resolve: Resolve<A>| {
            let function = Rc::clone(&function);
            self.trigger(
                move |error| reject.call(function(error)),
                move |value| resolve.call(value),
            );
        })
    }

    /// Describes running this effect, building the next effect from its
    /// resolution and running that one with the same continuations.
    pub fn flat_map<B, F>(self, function: F) -> AsyncEffect<E, B>
    where
        B: 'static,
        F: Fn(A) -> AsyncEffect<E, B> + 'static,
    {
        let function = Rc::new(function);
        AsyncEffect::labelled(self.label, move |reject: Reject<E>, resolve: Resolve<B>| {
            let function = Rc::clone(&function);
            let first_reject = reject.clone();
            self.trigger(
                move |error| first_reject.call(error),
                move |value| {
                    function(value).trigger(
                        move |error| reject.call(error),
                        move |next| resolve.call(next),
                    );
                },
            );
        })
    }
}

impl<E: 'static, F: 'static> AsyncEffect<E, F> {
    /// Describes running this effect to obtain a function, then running
    /// `other` and applying the function to its resolution.
    ///
    /// `other` is only triggered after `self` resolves; a rejection of either
    /// reaches the outer reject continuation.
    pub fn ap<A, B>(self, other: AsyncEffect<E, A>) -> AsyncEffect<E, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B,
    {
        AsyncEffect::labelled(self.label, move |reject: Reject<E>, resolve: Resolve<B>| {
            let other = other.clone();
            let first_reject = reject.clone();
            self.trigger(
                move |error| first_reject.call(error),
                move |function| {
                    other.trigger(
                        move |error| reject.call(error),
                        move |value| resolve.call(function(value)),
                    );
                },
            );
        })
    }
}

impl<E, A> IsNothing for AsyncEffect<E, A> {}

// =============================================================================
// Display Implementation
// =============================================================================

impl<E, A> Inspect for AsyncEffect<E, A> {
    fn inspect(&self) -> String {
        format!("AsyncEffect({})", self.label)
    }
}

impl<E, A> fmt::Display for AsyncEffect<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}

impl<E, A> fmt::Debug for AsyncEffect<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("AsyncEffect").field(&self.label).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for AsyncEffect<E, A> {
    type Inner = A;
    type WithType<B> = AsyncEffect<E, B>;
}

impl<E: 'static, A: 'static, B: 'static> Functor<B> for AsyncEffect<E, A> {
    fn fmap<F>(self, function: F) -> AsyncEffect<E, B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(function)
    }
}

impl<E: 'static, A: 'static, B: 'static> Monad<B> for AsyncEffect<E, A> {
    fn flat_map<F>(self, function: F) -> AsyncEffect<E, B>
    where
        F: Fn(A) -> AsyncEffect<E, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<E: 'static, A: 'static, B: 'static, C: 'static> Applicative<B, C> for AsyncEffect<E, A> {
    fn map2<F>(self, other: AsyncEffect<E, B>, function: F) -> AsyncEffect<E, C>
    where
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        AsyncEffect::labelled(self.label, move |reject: Reject<E>, resolve: Resolve<C>| {
            let function = Rc::clone(&function);
            let other = other.clone();
            let first_reject = reject.clone();
            self.trigger(
                move |error| first_reject.call(error),
                move |first| {
                    other.trigger(
                        move |error| reject.call(error),
                        move |second| resolve.call(function(first, second)),
                    );
                },
            );
        })
    }
}

impl<E, A, B, C, D> Applicative3<B, C, D> for AsyncEffect<E, A>
where
    E: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    fn map3<F>(
        self,
        second: AsyncEffect<E, B>,
        third: AsyncEffect<E, C>,
        function: F,
    ) -> AsyncEffect<E, D>
    where
        F: Fn(A, B, C) -> D + 'static,
    {
        let function = Rc::new(function);
        AsyncEffect::labelled(self.label, move |reject: Reject<E>, resolve: Resolve<D>| {
            let function = Rc::clone(&function);
            let (second, third) = (second.clone(), third.clone());
            let (first_reject, second_reject) = (reject.clone(), reject.clone());
            self.trigger(
                move |error| first_reject.call(error),
                move |first_value| {
                    second.trigger(
                        move |error| second_reject.call(error),
                        move |second_value| {
                            third.trigger(
                                move |error| reject.call(error),
                                move |third_value| {
                                    resolve.call(function(first_value, second_value, third_value));
                                },
                            );
                        },
                    );
                },
            );
        })
    }
}
