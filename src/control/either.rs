//! Either type - a success value or an error value.
//!
//! `Either<L, R>` is `Right(R)` on success and `Left(L)` on failure. Every
//! transform (`map`, `flat_map`, `ap`) runs only on `Right`; a `Left` passes
//! through untouched, so an error raised anywhere in a chain reaches the end
//! of it unchanged.
//!
//! [`Either::attempt`] and [`Either::catch`] are the boundary between code
//! that fails by returning `Err` or panicking and code that treats failure as
//! data.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Either;
//!
//! let parsed = Either::attempt(|| "21".parse::<i32>()).map(|x| x * 2);
//! assert_eq!(parsed, Either::Right(42));
//!
//! let failed = Either::attempt(|| "x".parse::<i32>()).map(|x| x * 2);
//! assert_eq!(failed, Either::Left("invalid digit found in string".to_string()));
//!
//! let message = failed.fold(|error| format!("error: {error}"), |value| value.to_string());
//! assert_eq!(message, "error: invalid digit found in string");
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::predicate::{Inspect, IsNothing};
use crate::typeclass::{Applicative, Applicative3, Functor, Monad, TypeConstructor};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// # Type Parameters
///
/// * `L` - The error payload
/// * `R` - The success payload
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value; the same as `Either::Right(value)`.
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// Runs a fallible thunk, keeping its error value as the `Left` payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use lambda_effect::control::Either;
    ///
    /// let failed: Either<ParseIntError, i32> = Either::attempt_raw(|| "x".parse::<i32>());
    /// assert!(failed.is_left());
    /// ```
    #[inline]
    pub fn attempt_raw<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        thunk().into()
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the error, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the payload, keeping the tag.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a success value.
    ///
    /// A `Left` is returned unchanged and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(2);
    /// assert_eq!(right.map(|x| x + 1), Either::Right(3));
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// assert_eq!(left.map(|x| x + 1), Either::Left("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies an `Either`-producing function to a success value, returning
    /// its result directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    ///
    /// let positive = |x: i32| if x > 0 { Either::Right(x) } else { Either::Left(format!("{x} <= 0")) };
    ///
    /// assert_eq!(Either::of(5).flat_map(positive), Either::Right(5));
    /// assert_eq!(Either::of(-1).flat_map(positive), Either::Left("-1 <= 0".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies a function to the error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(404);
    /// assert_eq!(left.map_left(|code| format!("E{code}")), Either::Left("E404".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<R> Either<String, R> {
    /// Runs a fallible thunk, keeping only the error's message.
    ///
    /// `Ok(value)` becomes `Right(value)`; `Err(error)` becomes
    /// `Left(error.to_string())`. Use [`Either::attempt_raw`] to keep the
    /// error value itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    ///
    /// let ok = Either::attempt(|| Ok::<_, std::fmt::Error>(1));
    /// assert_eq!(ok, Either::Right(1));
    ///
    /// let err = Either::attempt(|| Err::<i32, _>(std::fmt::Error));
    /// assert_eq!(err, Either::Left("an error occurred when formatting an argument".to_string()));
    /// ```
    #[inline]
    pub fn attempt<E, F>(thunk: F) -> Self
    where
        E: fmt::Display,
        F: FnOnce() -> Result<R, E>,
    {
        thunk().map_or_else(|error| Self::Left(error.to_string()), Self::Right)
    }

    /// Runs a thunk that may panic, turning a panic into `Left(message)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    ///
    /// let fine = Either::catch(|| 7);
    /// assert_eq!(fine, Either::Right(7));
    ///
    /// let broken: Either<String, i32> = Either::catch(|| panic!("no config"));
    /// assert_eq!(broken, Either::Left("no config".to_string()));
    /// ```
    pub fn catch<F>(thunk: F) -> Self
    where
        F: FnOnce() -> R,
    {
        catch_unwind(AssertUnwindSafe(thunk)).map_or_else(
            |payload| {
                let message = if let Some(text) = payload.downcast_ref::<&str>() {
                    (*text).to_string()
                } else if let Some(text) = payload.downcast_ref::<String>() {
                    text.clone()
                } else {
                    "Unknown panic".to_string()
                };
                Self::Left(message)
            },
            Self::Right,
        )
    }
}

impl<L, F> Either<L, F> {
    /// Applies the held function to the success value of `other` through
    /// [`other.map`](Either::map).
    ///
    /// When `self` is `Left` it is returned and `other` is never touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Either;
    ///
    /// let add_one: Either<String, _> = Either::Right(|x: i32| x + 1);
    /// assert_eq!(add_one.ap(Either::Right(1)), Either::Right(2));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(function) => other.map(function),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> IsNothing for Either<L, R> {}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: Inspect, R: Inspect> Inspect for Either<L, R> {
    fn inspect(&self) -> String {
        match self {
            Self::Left(value) => format!("Left({})", value.inspect()),
            Self::Right(value) => format!("Right({})", value.inspect()),
        }
    }
}

impl<L: Inspect, R: Inspect> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R, B> Functor<B> for Either<L, R> {
    #[inline]
    fn fmap<F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
    {
        self.map(function)
    }
}

impl<L, R, B> Monad<B> for Either<L, R> {
    #[inline]
    fn flat_map<F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<L, R, B, C> Applicative<B, C> for Either<L, R> {
    #[inline]
    fn map2<F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: Fn(R, B) -> C + 'static,
    {
        self.flat_map(|first| other.map(|second| function(first, second)))
    }
}

impl<L, R, B, C, D> Applicative3<B, C, D> for Either<L, R> {
    #[inline]
    fn map3<F>(self, second: Either<L, B>, third: Either<L, C>, function: F) -> Either<L, D>
    where
        F: Fn(R, B, C) -> D + 'static,
    {
        self.flat_map(|first| {
            second.flat_map(|second| third.map(|third| function(first, second, third)))
        })
    }
}
