//! `SyncEffect` - deferred synchronous side effects.
//!
//! A `SyncEffect<A>` describes a computation producing `A` without running
//! it. Building one, and every `map`/`flat_map`/`ap` on it, only composes
//! descriptions; the work happens each time [`SyncEffect::trigger`] is
//! called, and happens again on every further call.
//!
//! An effect may also take one input per trigger: [`SyncEffect::with_input`]
//! builds a `SyncEffect<A, I>` that is run with [`SyncEffect::trigger_with`],
//! and `map` threads that input through to the held function.
//!
//! Panics raised by the held function reach the caller of `trigger`
//! unchanged. Use [`Either::catch`](crate::control::Either::catch) or
//! [`Either::attempt`](crate::control::Either::attempt) inside the effect to
//! turn failures into data.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use lambda_effect::effect::SyncEffect;
//!
//! let reads = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&reads);
//! let read_config = SyncEffect::of(move || {
//!     counter.set(counter.get() + 1);
//!     "port=8080".to_string()
//! });
//!
//! let port = read_config
//!     .map(|line: String| line.trim_start_matches("port=").to_string())
//!     .map(|digits: String| digits.parse::<u16>().unwrap_or(80));
//! assert_eq!(reads.get(), 0);
//!
//! assert_eq!(port.trigger(), 8080);
//! assert_eq!(port.trigger(), 8080);
//! assert_eq!(reads.get(), 2);
//! ```

use std::any::type_name;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::predicate::{Inspect, IsNothing};
use crate::typeclass::{Applicative, Applicative3, Functor, Monad, TypeConstructor};

/// A deferred synchronous computation producing `A` from an input `I`.
///
/// The input defaults to `()`, which is the zero-argument effect built by
/// [`SyncEffect::of`] and run by [`SyncEffect::trigger`].
///
/// # Monad Laws
///
/// Two effects are equal when triggering them yields equal values and
/// equal side effects.
///
/// 1. **Left Identity**: `SyncEffect::wrap(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(SyncEffect::wrap) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct SyncEffect<A, I = ()> {
    thunk: Rc<dyn Fn(I) -> A>,
    label: &'static str,
}

static_assertions::assert_not_impl_any!(SyncEffect<i32>: Send, Sync);

impl<A, I> Clone for SyncEffect<A, I> {
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
            label: self.label,
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> SyncEffect<A> {
    /// Describes the computation `thunk` without running it.
    pub fn of<F>(thunk: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::labelled(type_name::<F>(), move |()| thunk())
    }

    /// Describes a computation that produces a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::effect::SyncEffect;
    ///
    /// let greeting = SyncEffect::wrap("hello".to_string());
    /// assert_eq!(greeting.trigger(), "hello");
    /// ```
    pub fn wrap(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(move || value.clone())
    }

    /// Runs the computation now and returns its result.
    ///
    /// Every call runs the held function again.
    pub fn trigger(&self) -> A {
        self.trigger_with(())
    }
}

impl<A: 'static, I: 'static> SyncEffect<A, I> {
    /// Describes a computation that takes one input per trigger.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::effect::SyncEffect;
    ///
    /// let verdict = SyncEffect::with_input(|roll: f64| roll > 0.5)
    ///     .map(|passed: bool| if passed { "success" } else { "failure" });
    ///
    /// assert_eq!(verdict.trigger_with(0.9), "success");
    /// assert_eq!(verdict.trigger_with(0.1), "failure");
    /// ```
    pub fn with_input<F>(function: F) -> Self
    where
        F: Fn(I) -> A + 'static,
    {
        Self::labelled(type_name::<F>(), function)
    }

    fn labelled<F>(label: &'static str, function: F) -> Self
    where
        F: Fn(I) -> A + 'static,
    {
        Self {
            thunk: Rc::new(function),
            label,
        }
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Runs the computation now with `input` and returns its result.
    pub fn trigger_with(&self, input: I) -> A {
        trace!(effect = self.label, "triggering sync effect");
        (self.thunk)(input)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Describes running this effect and applying `function` to its result.
    ///
    /// The input of each trigger is handed to this effect unchanged.
    pub fn map<B, F>(self, function: F) -> SyncEffect<B, I>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        SyncEffect::labelled(self.label, move |input: I| function(self.trigger_with(input)))
    }

    /// Describes running this effect, building the next effect from its
    /// result and running that one too.
    ///
    /// The next effect takes no input; only this effect receives the input
    /// of the trigger.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::effect::SyncEffect;
    ///
    /// let user_id = SyncEffect::wrap(7);
    /// let profile = user_id.flat_map(|id: u32| SyncEffect::of(move || format!("user-{id}")));
    /// assert_eq!(profile.trigger(), "user-7");
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> SyncEffect<B, I>
    where
        B: 'static,
        F: Fn(A) -> SyncEffect<B> + 'static,
    {
        SyncEffect::labelled(self.label, move |input: I| {
            function(self.trigger_with(input)).trigger()
        })
    }
}

impl<F: 'static, I: 'static> SyncEffect<F, I> {
    /// Describes running this effect to obtain a function, then running
    /// `other` and applying the function to its result.
    ///
    /// `self` is triggered before `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::effect::SyncEffect;
    ///
    /// let add_ten = SyncEffect::of(|| |x: i32| x + 10);
    /// assert_eq!(add_ten.ap(SyncEffect::wrap(5)).trigger(), 15);
    /// ```
    pub fn ap<A, B>(self, other: SyncEffect<A>) -> SyncEffect<B, I>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B,
    {
        SyncEffect::labelled(self.label, move |input: I| {
            let function = self.trigger_with(input);
            function(other.trigger())
        })
    }
}

impl<A, I> IsNothing for SyncEffect<A, I> {}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A, I> Inspect for SyncEffect<A, I> {
    fn inspect(&self) -> String {
        format!("SyncEffect({})", self.label)
    }
}

impl<A, I> fmt::Display for SyncEffect<A, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}

impl<A, I> fmt::Debug for SyncEffect<A, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("SyncEffect").field(&self.label).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for SyncEffect<A> {
    type Inner = A;
    type WithType<B> = SyncEffect<B>;
}

impl<A: 'static, B: 'static> Functor<B> for SyncEffect<A> {
    fn fmap<F>(self, function: F) -> SyncEffect<B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(function)
    }
}

impl<A: 'static, B: 'static> Monad<B> for SyncEffect<A> {
    fn flat_map<F>(self, function: F) -> SyncEffect<B>
    where
        F: Fn(A) -> SyncEffect<B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<A: 'static, B: 'static, C: 'static> Applicative<B, C> for SyncEffect<A> {
    fn map2<F>(self, other: SyncEffect<B>, function: F) -> SyncEffect<C>
    where
        F: Fn(A, B) -> C + 'static,
    {
        SyncEffect::labelled(self.label, move |()| {
            let first = self.trigger();
            function(first, other.trigger())
        })
    }
}

impl<A: 'static, B: 'static, C: 'static, D: 'static> Applicative3<B, C, D> for SyncEffect<A> {
    fn map3<F>(self, second: SyncEffect<B>, third: SyncEffect<C>, function: F) -> SyncEffect<D>
    where
        F: Fn(A, B, C) -> D + 'static,
    {
        SyncEffect::labelled(self.label, move |()| {
            let first_value = self.trigger();
            let second_value = second.trigger();
            function(first_value, second_value, third.trigger())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    fn construction_and_mapping_do_not_run_the_thunk() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let effect = SyncEffect::of(move || {
            counter.set(counter.get() + 1);
            1
        })
        .map(|x: i32| x + 1)
        .flat_map(|x: i32| SyncEffect::wrap(x * 2));

        assert_eq!(runs.get(), 0);
        assert_eq!(effect.trigger(), 4);
        assert_eq!(runs.get(), 1);
    }

    #[rstest]
    fn every_trigger_runs_again() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let writer = Rc::clone(&log);
        let effect = SyncEffect::of(move || writer.borrow_mut().push("ran"));

        effect.trigger();
        effect.clone().trigger();
        assert_eq!(*log.borrow(), vec!["ran", "ran"]);
    }

    #[rstest]
    fn map2_triggers_left_before_right() {
        let order = Rc::new(RefCell::new(String::new()));
        let (left_order, right_order) = (Rc::clone(&order), Rc::clone(&order));
        let left = SyncEffect::of(move || left_order.borrow_mut().push('l'));
        let right = SyncEffect::of(move || right_order.borrow_mut().push('r'));

        left.map2(right, |(), ()| ()).trigger();
        assert_eq!(order.borrow().as_str(), "lr");
    }

    #[rstest]
    #[should_panic(expected = "disk on fire")]
    fn panics_propagate_to_the_caller() {
        let effect: SyncEffect<i32> = SyncEffect::of(|| panic!("disk on fire"));
        effect.map(|x: i32| x + 1).trigger();
    }

    #[rstest]
    fn inspect_names_the_function() {
        fn load() -> i32 {
            1
        }

        let effect = SyncEffect::of(load);
        assert!(effect.inspect().starts_with("SyncEffect("));
        assert!(effect.inspect().ends_with("load)"));
        assert_eq!(effect.to_string(), effect.inspect());
    }

    #[rstest]
    fn transforms_keep_the_label_of_the_source() {
        fn load() -> i32 {
            1
        }

        let source = SyncEffect::of(load);
        let derived = source
            .clone()
            .map(|x: i32| x + 1)
            .flat_map(|x: i32| SyncEffect::wrap(x * 2));

        assert_eq!(derived.inspect(), source.inspect());
        assert!(!derived.inspect().contains("map"));
    }

    #[rstest]
    #[case::above(0.75, "random success")]
    #[case::below(0.25, "random failure")]
    fn input_is_threaded_through_map(#[case] roll: f64, #[case] expected: &str) {
        let effect = SyncEffect::with_input(|roll: f64| {
            if roll > 0.5 { "random success" } else { "random failure" }
        })
        .map(str::to_uppercase);

        assert_eq!(effect.trigger_with(roll), expected.to_uppercase());
    }

    #[rstest]
    fn input_effects_flat_map_into_plain_effects() {
        let greeting = SyncEffect::with_input(|name: String| format!("hello {name}"))
            .flat_map(|text: String| SyncEffect::of(move || text.len()));

        assert_eq!(greeting.trigger_with("ana".to_string()), 9);
        assert_eq!(greeting.trigger_with("bo".to_string()), 8);
    }

    #[rstest]
    fn input_effects_apply_plain_effects() {
        let scale = SyncEffect::with_input(|factor: i32| move |x: i32| x * factor);
        let applied = scale.ap(SyncEffect::wrap(7));

        assert_eq!(applied.trigger_with(3), 21);
        assert_eq!(applied.trigger_with(0), 0);
    }
}
