//! Deterministic debug rendering.
//!
//! [`Inspect`] is the capability a type opts into to render itself. Wrapper
//! kinds render their tag around the recursive rendering of their contents,
//! so nested wrappers read as `Just(Right(1))`.
//!
//! | Value | Rendering |
//! |---|---|
//! | `"text"`, `String`, `char` | `'text'` |
//! | numbers, `bool` | `Display` output |
//! | `None` / `()` | `null` / `undefined` |
//! | `Some(v)` | rendering of `v` |
//! | sequences, tuples | `[a, b]` |
//! | maps | `{key: value}` in key order |
//! | functions | their type path, via [`inspect_function`] |
//! | `fn` pointers | their signature, `fn(i32) -> i32` |
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use lambda_effect::predicate::deep_inspect;
//!
//! assert_eq!(deep_inspect("a"), "'a'");
//! assert_eq!(deep_inspect(&vec![1, 2]), "[1, 2]");
//!
//! let record = BTreeMap::from([("b", vec!["x"]), ("a", vec![])]);
//! assert_eq!(deep_inspect(&record), "{a: [], b: ['x']}");
//! ```

use std::any::type_name;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

/// Capability of rendering a value to a deterministic debug string.
///
/// `Option`, `Result` and iterators have an inherent `inspect` method that
/// takes precedence over this one in method-call syntax; render them with
/// [`deep_inspect`] or `Inspect::inspect(&value)`.
pub trait Inspect {
    /// Renders `self`.
    fn inspect(&self) -> String;
}

/// Renders any [`Inspect`] value.
#[inline]
pub fn deep_inspect<T: Inspect + ?Sized>(value: &T) -> String {
    value.inspect()
}

/// Renders a callable by its type path.
///
/// Function items render as their path (`my_crate::parse`); closures render
/// as the path of their defining item followed by `{{closure}}`.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::predicate::inspect_function;
///
/// fn answer() -> i32 {
///     42
/// }
///
/// assert!(inspect_function(&answer).ends_with("answer"));
/// assert!(inspect_function(&|| 1).contains("{{closure}}"));
/// ```
#[inline]
pub fn inspect_function<F: ?Sized>(_function: &F) -> &'static str {
    type_name::<F>()
}

fn inspect_sequence<'a, T, I>(items: I) -> String
where
    T: Inspect + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let rendered: Vec<String> = items.into_iter().map(Inspect::inspect).collect();
    format!("[{}]", rendered.join(", "))
}

fn inspect_record<I>(entries: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let rendered: Vec<String> = entries
        .into_iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

macro_rules! impl_inspect_display {
    ($($type:ty),* $(,)?) => {
        $(
            impl Inspect for $type {
                #[inline]
                fn inspect(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_inspect_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

impl Inspect for char {
    fn inspect(&self) -> String {
        format!("'{self}'")
    }
}

impl Inspect for str {
    fn inspect(&self) -> String {
        format!("'{self}'")
    }
}

impl Inspect for String {
    fn inspect(&self) -> String {
        self.as_str().inspect()
    }
}

impl Inspect for () {
    fn inspect(&self) -> String {
        "undefined".to_string()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> String {
        self.as_ref()
            .map_or_else(|| "null".to_string(), Inspect::inspect)
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> String {
        inspect_sequence(self)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> String {
        inspect_sequence(self)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> String {
        inspect_sequence(self)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> String {
        inspect_sequence(self)
    }
}

impl<A: Inspect, B: Inspect> Inspect for (A, B) {
    fn inspect(&self) -> String {
        format!("[{}, {}]", self.0.inspect(), self.1.inspect())
    }
}

impl<A: Inspect, B: Inspect, C: Inspect> Inspect for (A, B, C) {
    fn inspect(&self) -> String {
        format!(
            "[{}, {}, {}]",
            self.0.inspect(),
            self.1.inspect(),
            self.2.inspect()
        )
    }
}

impl<K: Display, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> String {
        inspect_record(
            self.iter()
                .map(|(key, value)| (key.to_string(), value.inspect())),
        )
    }
}

impl<K: Display, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> String {
        let mut entries: Vec<(String, String)> = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.inspect()))
            .collect();
        entries.sort();
        inspect_record(entries)
    }
}

macro_rules! impl_inspect_fn_pointer {
    ($(($($argument:ident),*)),* $(,)?) => {
        $(
            impl<$($argument,)* R> Inspect for fn($($argument),*) -> R {
                fn inspect(&self) -> String {
                    type_name::<Self>().to_string()
                }
            }
        )*
    };
}

impl_inspect_fn_pointer!((), (A), (A, B), (A, B, C));

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> String {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> String {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn inspect(&self) -> String {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn inspect(&self) -> String {
        (**self).inspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn strings_render_quoted() {
        assert_eq!("hello".inspect(), "'hello'");
        assert_eq!(String::from("hi").inspect(), "'hi'");
        assert_eq!('c'.inspect(), "'c'");
    }

    #[rstest]
    #[case(0_i64, "0")]
    #[case(-7_i64, "-7")]
    fn numbers_render_plain(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(value.inspect(), expected);
    }

    #[rstest]
    fn null_like_values() {
        assert_eq!(deep_inspect(&None::<i32>), "null");
        assert_eq!(Inspect::inspect(&Some(true)), "true");
        assert_eq!(().inspect(), "undefined");
    }

    #[rstest]
    fn sequences_recurse() {
        assert_eq!(vec![vec!["a"], vec![]].inspect(), "[['a'], []]");
        assert_eq!((1_u8, "b").inspect(), "[1, 'b']");
        assert_eq!([1.5_f32].inspect(), "[1.5]");
    }

    #[rstest]
    fn hash_maps_render_in_sorted_key_order() {
        let mut record = HashMap::new();
        record.insert("zeta", 1);
        record.insert("alpha", 2);
        record.insert("mid", 3);
        assert_eq!(record.inspect(), "{alpha: 2, mid: 3, zeta: 1}");
        assert_eq!(record.inspect(), record.inspect());
    }

    #[rstest]
    fn custom_inspect_is_delegated_to() {
        struct Point {
            x: i32,
            y: i32,
        }

        impl Inspect for Point {
            fn inspect(&self) -> String {
                format!("Point({}, {})", self.x, self.y)
            }
        }

        let record = BTreeMap::from([("origin", Point { x: 0, y: 0 })]);
        assert_eq!(record.inspect(), "{origin: Point(0, 0)}");
    }

    #[rstest]
    fn functions_render_by_path() {
        fn named_function(value: i32) -> i32 {
            value
        }

        assert!(inspect_function(&named_function).ends_with("named_function"));
        assert!(inspect_function(&|value: i32| value).contains("{{closure}}"));
    }

    #[rstest]
    fn function_pointers_render_by_signature() {
        fn add(left: i32, right: i32) -> i32 {
            left + right
        }

        let pointer: fn(i32, i32) -> i32 = add;
        let table = vec![pointer];

        assert_eq!(pointer.inspect(), "fn(i32, i32) -> i32");
        assert_eq!(table.inspect(), "[fn(i32, i32) -> i32]");
    }

    #[rstest]
    fn option_renders_through_the_trait_path() {
        assert_eq!(deep_inspect(&Some("a")), "'a'");
        assert_eq!(deep_inspect(&Some(vec![None, Some(1)])), "[null, 1]");
    }
}
