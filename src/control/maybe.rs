//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` replaces null checks with a two-state value: `Just(T)` when a
//! value is present and `Nothing` when it is not. What counts as absent is
//! decided by [`IsNothing`]: `Maybe::of("")` and `Maybe::of(Vec::<i32>::new())`
//! are both `Nothing`, while `Maybe::of(0)` is `Just(0)`.
//!
//! Every `map` re-classifies its output through [`Maybe::of`], so a chain of
//! transforms collapses to `Nothing` as soon as one step produces an empty
//! value, and no later step runs.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Maybe;
//!
//! let first_word = |text: String| text.split(' ').next().unwrap_or_default().to_string();
//! let shout = |text: String| text.to_uppercase();
//!
//! let word = Maybe::of("hello world".to_string()).map(first_word).map(shout);
//! assert_eq!(word, Maybe::Just("HELLO".to_string()));
//!
//! let blank = Maybe::of(" leading".to_string()).map(first_word).map(shout);
//! assert!(blank.is_nothing());
//! ```

use std::fmt;

use crate::predicate::{Inspect, IsNothing};
use crate::typeclass::{Applicative, Applicative3, Functor, Monad, TypeConstructor};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// Build values with [`Maybe::of`] so that emptiness is classified; the
/// variants are public for pattern matching and for wrapping values that
/// [`IsNothing`] cannot classify, such as closures (see [`Maybe::just`]).
///
/// As a payload, a `Maybe` is itself a present value: `Maybe::of(Maybe::<i32>::Nothing)`
/// is `Just(Nothing)`. Use [`Maybe::flatten`] to collapse the nesting.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// An absent value.
    #[default]
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Classifies `value` and wraps it: `Nothing` when it is absent, `Just`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(0), Maybe::Just(0));
    /// assert_eq!(Maybe::of(""), Maybe::Nothing);
    /// assert_eq!(Maybe::of(None::<i32>), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: IsNothing,
    {
        if value.is_nothing() {
            Self::Nothing
        } else {
            Self::Just(value)
        }
    }

    /// Wraps `value` as present without classifying it.
    ///
    /// This is how functions enter a `Maybe` for [`Maybe::ap`].
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the held value, keeping the tag.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to a present value and re-classifies the result.
    ///
    /// `Nothing` is returned unchanged and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(2).map(|x| x * 10), Maybe::Just(20));
    /// assert_eq!(Maybe::of("a").map(|_| ""), Maybe::Nothing);
    /// assert_eq!(Maybe::<i32>::Nothing.map(|_: i32| -> i32 { unreachable!() }), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        B: IsNothing,
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::of(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a `Maybe`-producing function to a present value, returning its
    /// result directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    ///
    /// assert_eq!(Maybe::of("42").flat_map(parse), Maybe::Just(42));
    /// assert_eq!(Maybe::of("x").flat_map(parse), Maybe::Nothing);
    /// assert_eq!(Maybe::of("").flat_map(parse), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` by calling `on_nothing` or `on_just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<&str>| maybe.fold(|| "missing".to_string(), |name| format!("hi {name}"));
    ///
    /// assert_eq!(describe(Maybe::of("ana")), "hi ana");
    /// assert_eq!(describe(Maybe::of("")), "missing");
    /// ```
    #[inline]
    pub fn fold<R, N, J>(self, on_nothing: N, on_just: J) -> R
    where
        N: FnOnce() -> R,
        J: FnOnce(T) -> R,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Returns the held value, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<F> Maybe<F> {
    /// Applies the held function to the value of `other` through
    /// [`other.map`](Maybe::map).
    ///
    /// When `self` is `Nothing`, `other` is never touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Maybe;
    ///
    /// let add_one = Maybe::just(|x: i32| x + 1);
    /// assert_eq!(add_one.ap(Maybe::of(41)), Maybe::Just(42));
    ///
    /// let to_empty = Maybe::just(|_: &str| String::new());
    /// assert_eq!(to_empty.ap(Maybe::of("text")), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
        B: IsNothing,
    {
        match self {
            Self::Just(function) => other.map(function),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T: IsNothing> From<Option<T>> for Maybe<T> {
    /// Converts an `Option`, classifying a `Some` payload like [`Maybe::of`].
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::of)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IsNothing for Maybe<T> {}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: Inspect> Inspect for Maybe<T> {
    fn inspect(&self) -> String {
        match self {
            Self::Just(value) => format!("Just({})", value.inspect()),
            Self::Nothing => "Nothing".to_string(),
        }
    }
}

impl<T: Inspect> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A, B: IsNothing> Functor<B> for Maybe<A> {
    #[inline]
    fn fmap<F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(function)
    }
}

impl<A, B: IsNothing> Monad<B> for Maybe<A> {
    #[inline]
    fn flat_map<F>(self, function: F) -> Maybe<B>
    where
        F: Fn(A) -> Maybe<B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<A, B, C: IsNothing> Applicative<B, C> for Maybe<A> {
    #[inline]
    fn map2<F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: Fn(A, B) -> C + 'static,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::of(function(first, second)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A, B, C, D: IsNothing> Applicative3<B, C, D> for Maybe<A> {
    #[inline]
    fn map3<F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: Fn(A, B, C) -> D + 'static,
    {
        match (self, second, third) {
            (Self::Just(first), Maybe::Just(second), Maybe::Just(third)) => {
                Maybe::of(function(first, second, third))
            }
            _ => Maybe::Nothing,
        }
    }
}
