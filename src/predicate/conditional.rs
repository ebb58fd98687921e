//! Curried equality, ordering, length and type predicates.
//!
//! Each constructor fixes the reference operand and returns a reusable
//! predicate over the tested value, which keeps them composable with
//! iterator adapters and `compose!`/`pipe!`.
//!
//! Ordering predicates read as "the tested value is greater than `a`":
//! `is_greater_than(a)(&b)` is `b > a`.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::predicate::{is_at_least, is_equal};
//!
//! let adults: Vec<u32> = vec![12, 18, 40].into_iter().filter(is_at_least(18)).collect();
//! assert_eq!(adults, vec![18, 40]);
//!
//! assert!(is_equal("x")(&"x"));
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::VecDeque;

use super::inspect::Inspect;

/// Returns a predicate that is `true` for values equal to `expected`.
#[inline]
pub fn is_equal<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value| *value == expected
}

/// Returns a predicate that is `true` for values not equal to `expected`.
#[inline]
pub fn is_not_equal<T: PartialEq>(expected: T) -> impl Fn(&T) -> bool {
    move |value| *value != expected
}

/// Returns a predicate that is `true` for values whose [`Inspect`] rendering
/// equals the rendering of `expected`.
///
/// Unlike [`is_equal`], the two sides may be of different types and need not
/// implement `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use std::collections::{BTreeMap, HashMap};
/// use lambda_effect::predicate::is_deep_equal;
///
/// let expected = BTreeMap::from([("a", vec![1]), ("b", vec![])]);
/// let actual: HashMap<&str, Vec<i32>> = HashMap::from([("b", vec![]), ("a", vec![1])]);
///
/// assert!(is_deep_equal(&expected)(&actual));
/// assert!(is_deep_equal(&vec!["x"])(&["x"]));
/// ```
#[inline]
pub fn is_deep_equal<E, T>(expected: &E) -> impl Fn(&T) -> bool
where
    E: Inspect + ?Sized,
    T: Inspect + ?Sized,
{
    let rendered = expected.inspect();
    move |value| value.inspect() == rendered
}

/// Returns a predicate that is `true` for values whose [`Inspect`] rendering
/// differs from the rendering of `expected`.
#[inline]
pub fn is_not_deep_equal<E, T>(expected: &E) -> impl Fn(&T) -> bool
where
    E: Inspect + ?Sized,
    T: Inspect + ?Sized,
{
    let rendered = expected.inspect();
    move |value| value.inspect() != rendered
}

/// Returns `true` if `value` is `true`.
#[inline]
pub const fn is_true(value: &bool) -> bool {
    *value
}

/// Returns `true` if `value` is `false`.
#[inline]
pub const fn is_false(value: &bool) -> bool {
    !*value
}

/// Returns a predicate that is `true` for values strictly greater than `bound`.
#[inline]
pub fn is_greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value > bound
}

/// Returns a predicate that is `true` for values strictly less than `bound`.
#[inline]
pub fn is_less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value < bound
}

/// Returns a predicate that is `true` for values greater than or equal to `bound`.
#[inline]
pub fn is_at_least<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value >= bound
}

/// Returns a predicate that is `true` for values less than or equal to `bound`.
#[inline]
pub fn is_at_most<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |value| *value <= bound
}

/// Numbers with a zero value.
pub trait Zero: PartialEq + Sized {
    /// The additive identity.
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($zero:literal => $($type:ty),* $(,)?) => {
        $(
            impl Zero for $type {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);

/// Returns `true` if `value` is zero.
///
/// Negative zero counts as zero.
#[inline]
pub fn is_zero<T: Zero>(value: &T) -> bool {
    *value == T::ZERO
}

/// Returns `true` if `value` is not zero.
#[inline]
pub fn is_not_zero<T: Zero>(value: &T) -> bool {
    *value != T::ZERO
}

/// Values with a length: strings and sequences.
pub trait HasLength {
    /// Number of elements, or bytes for strings.
    fn length(&self) -> usize;
}

impl HasLength for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Returns a predicate that is `true` for values of exactly `length` elements.
#[inline]
pub fn is_length<T: HasLength + ?Sized>(length: usize) -> impl Fn(&T) -> bool {
    move |value| value.length() == length
}

/// Returns a predicate that is `true` for values not of exactly `length` elements.
#[inline]
pub fn is_not_length<T: HasLength + ?Sized>(length: usize) -> impl Fn(&T) -> bool {
    move |value| value.length() != length
}

/// Returns the length of a string (in bytes) or sequence.
#[inline]
pub fn length_of<T: HasLength + ?Sized>(value: &T) -> usize {
    value.length()
}

/// Returns `true` for strings and sequences of length zero.
#[inline]
pub fn is_empty<T: HasLength + ?Sized>(value: &T) -> bool {
    value.length() == 0
}

/// Returns `true` for strings and sequences of non-zero length.
#[inline]
pub fn is_not_empty<T: HasLength + ?Sized>(value: &T) -> bool {
    value.length() != 0
}

/// Returns the type name of `value`.
#[inline]
pub fn type_of<T: ?Sized>(_value: &T) -> &'static str {
    type_name::<T>()
}

/// Returns `true` when `value` is of type `Expected`.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::predicate::is_type_of;
///
/// assert!(is_type_of::<String, _>(&String::from("text")));
/// assert!(!is_type_of::<String, _>(&42_u8));
/// ```
#[inline]
pub fn is_type_of<Expected: Any, T: Any + ?Sized>(_value: &T) -> bool {
    TypeId::of::<Expected>() == TypeId::of::<T>()
}

/// Returns `true` when `value` is not of type `Expected`.
#[inline]
pub fn is_not_type_of<Expected: Any, T: Any + ?Sized>(value: &T) -> bool {
    !is_type_of::<Expected, T>(value)
}
