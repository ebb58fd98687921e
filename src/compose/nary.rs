//! Calling curried functions with several arguments at once.
//!
//! A curried function takes one argument per call: `f(a)(b)(c)`. [`Nary`]
//! and the [`nary!`](crate::nary!) macro let such a function be called with
//! any prefix of its arguments in one step, folding them left to right.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::compose::Nary;
//! use lambda_effect::nary;
//!
//! let add = |a: i32| move |b: i32| move |c: i32| a + b + c;
//!
//! assert_eq!(nary!(add, 1, 2, 3), 6);
//! assert_eq!(nary!(add, 1, 2)(3), 6);
//!
//! let adapter = Nary::new(add);
//! assert_eq!(adapter.call3(1, 2, 3), adapter.call2(1, 2)(3));
//! ```

/// Adapter around a curried function that accepts several arguments per call.
///
/// Each `callN` applies the first `N` links of the curried chain. The wrapped
/// function is only borrowed, so an adapter can be called any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nary<F> {
    function: F,
}

impl<F> Nary<F> {
    /// Wraps a curried function.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }

    /// Invokes the wrapped function with no arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::compose::Nary;
    ///
    /// assert_eq!(Nary::new(|| "called").call0(), "called");
    /// ```
    #[inline]
    pub fn call0<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        (self.function)()
    }

    /// Applies one argument.
    #[inline]
    pub fn call<A, R>(&self, first: A) -> R
    where
        F: Fn(A) -> R,
    {
        (self.function)(first)
    }

    /// Applies two arguments, left to right.
    #[inline]
    pub fn call2<A, B, G, R>(&self, first: A, second: B) -> R
    where
        F: Fn(A) -> G,
        G: FnOnce(B) -> R,
    {
        (self.function)(first)(second)
    }

    /// Applies three arguments, left to right.
    #[inline]
    pub fn call3<A, B, C, G, H, R>(&self, first: A, second: B, third: C) -> R
    where
        F: Fn(A) -> G,
        G: FnOnce(B) -> H,
        H: FnOnce(C) -> R,
    {
        (self.function)(first)(second)(third)
    }

    /// Applies four arguments, left to right.
    #[inline]
    pub fn call4<A, B, C, D, G, H, I, R>(&self, first: A, second: B, third: C, fourth: D) -> R
    where
        F: Fn(A) -> G,
        G: FnOnce(B) -> H,
        H: FnOnce(C) -> I,
        I: FnOnce(D) -> R,
    {
        (self.function)(first)(second)(third)(fourth)
    }
}

/// Calls a curried function with any number of arguments.
///
/// - `nary!(f)` is `f()`
/// - `nary!(f, a)` is `f(a)`
/// - `nary!(f, a, b, c)` is `f(a)(b)(c)`
///
/// Supplying fewer arguments than the chain is long returns the remaining
/// curried function.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::{curry3, nary};
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry3!(volume);
/// assert_eq!(nary!(curried, 2, 3, 4), 24);
///
/// let with_base = nary!(curried, 2, 3);
/// assert_eq!(with_base(5), 30);
/// assert_eq!(nary!(|| 7), 7);
/// ```
#[macro_export]
macro_rules! nary {
    (@apply $applied:expr; $argument:expr) => {
        ($applied)($argument)
    };

    (@apply $applied:expr; $argument:expr, $($rest:expr),+) => {
        $crate::nary!(@apply ($applied)($argument); $($rest),+)
    };

    ($function:expr $(,)?) => {
        ($function)()
    };

    ($function:expr, $($argument:expr),+ $(,)?) => {{
        let applied = &$function;
        $crate::nary!(@apply applied; $($argument),+)
    }};
}
