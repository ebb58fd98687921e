//! Emptiness classification.
//!
//! [`IsNothing`] is the single predicate behind `Maybe`'s Present/Absent
//! split. Absent values are the Rust counterparts of "null, undefined, empty
//! string, empty sequence":
//!
//! | Value | Classification |
//! |---|---|
//! | `None` | Nothing |
//! | `Some(v)` | classification of `v` |
//! | `()` | Nothing |
//! | `""`, `String::new()` | Nothing |
//! | `Vec::new()`, `[]`, empty slices and deques | Nothing |
//! | `0`, `false`, `'\0'`, any other scalar | Just |
//! | maps, tuples, wrappers, `fn` pointers | Just |
//!
//! Types opt in with an empty `impl IsNothing for MyType {}` when they are
//! never absent, or override [`IsNothing::is_nothing`] when they can be.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Capability of classifying a value as absent ("nothing") or present ("just").
///
/// # Examples
///
/// ```rust
/// use lambda_effect::predicate::IsNothing;
///
/// assert!("".is_nothing());
/// assert!(Vec::<i32>::new().is_nothing());
/// assert!(None::<i32>.is_nothing());
/// assert!(0_i32.is_just());
/// assert!(false.is_just());
/// ```
pub trait IsNothing {
    /// Returns `true` when the value counts as absent.
    #[inline]
    fn is_nothing(&self) -> bool {
        false
    }

    /// Returns `true` when the value counts as present.
    #[inline]
    fn is_just(&self) -> bool {
        !self.is_nothing()
    }
}

/// Returns `true` if `value` is null-like or empty.
#[inline]
pub fn is_nothing<T: IsNothing + ?Sized>(value: &T) -> bool {
    value.is_nothing()
}

/// Returns `true` if `value` is neither null-like nor empty.
#[inline]
pub fn is_just<T: IsNothing + ?Sized>(value: &T) -> bool {
    value.is_just()
}

macro_rules! impl_always_just {
    ($($type:ty),* $(,)?) => {
        $(impl IsNothing for $type {})*
    };
}

impl_always_just!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl IsNothing for () {
    #[inline]
    fn is_nothing(&self) -> bool {
        true
    }
}

impl IsNothing for str {
    #[inline]
    fn is_nothing(&self) -> bool {
        self.is_empty()
    }
}

impl IsNothing for String {
    #[inline]
    fn is_nothing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsNothing for [T] {
    #[inline]
    fn is_nothing(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> IsNothing for [T; N] {
    #[inline]
    fn is_nothing(&self) -> bool {
        N == 0
    }
}

impl<T> IsNothing for Vec<T> {
    #[inline]
    fn is_nothing(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsNothing for VecDeque<T> {
    #[inline]
    fn is_nothing(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsNothing> IsNothing for Option<T> {
    #[inline]
    fn is_nothing(&self) -> bool {
        self.as_ref().is_none_or(IsNothing::is_nothing)
    }
}

impl<R> IsNothing for fn() -> R {}
impl<A, R> IsNothing for fn(A) -> R {}
impl<A, B, R> IsNothing for fn(A, B) -> R {}
impl<A, B, C, R> IsNothing for fn(A, B, C) -> R {}

// Records are present even when they hold no entries.
impl<K, V, S> IsNothing for HashMap<K, V, S> {}
impl<K, V> IsNothing for BTreeMap<K, V> {}

impl<A> IsNothing for (A,) {}
impl<A, B> IsNothing for (A, B) {}
impl<A, B, C> IsNothing for (A, B, C) {}

impl<T: IsNothing + ?Sized> IsNothing for &T {
    #[inline]
    fn is_nothing(&self) -> bool {
        (**self).is_nothing()
    }
}

impl<T: IsNothing + ?Sized> IsNothing for Box<T> {
    #[inline]
    fn is_nothing(&self) -> bool {
        (**self).is_nothing()
    }
}

impl<T: IsNothing + ?Sized> IsNothing for Rc<T> {
    #[inline]
    fn is_nothing(&self) -> bool {
        (**self).is_nothing()
    }
}

impl<T: IsNothing + ?Sized> IsNothing for Arc<T> {
    #[inline]
    fn is_nothing(&self) -> bool {
        (**self).is_nothing()
    }
}
