//! Case type - table-driven pattern dispatch.
//!
//! A `Case<K, V>` maps discrete keys to values (often handler functions).
//! Matching a key returns its entry, or the wildcard entry when the key is
//! missing, or `None` when there is neither. Matching never panics.
//!
//! `map` and `flat_map` compose onto the result of the match, so a `Case`
//! behaves like a function from keys to an optional value.
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::control::Case;
//!
//! let status = Case::with_wildcard([(200, "OK"), (404, "Not Found")], "Unknown");
//!
//! assert_eq!(status.match_key(&404), Some("Not Found"));
//! assert_eq!(status.match_key(&500), Some("Unknown"));
//!
//! let lengths = status.map(|text: &str| text.len());
//! assert_eq!(lengths.match_key(&200), Some(2));
//! ```

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::predicate::{Inspect, IsNothing};
use crate::typeclass::{Applicative, Applicative3, Functor, Monad, TypeConstructor};

/// A key of a [`Case`] table: either a concrete key or the catch-all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Pattern<K> {
    /// Matches exactly this key.
    Key(K),
    /// Matches any key without an entry of its own.
    Wildcard,
}

impl<K> From<K> for Pattern<K> {
    #[inline]
    fn from(key: K) -> Self {
        Self::Key(key)
    }
}

/// A pattern matcher from keys `K` to values `V`.
///
/// Cloning a `Case` shares the underlying table.
pub struct Case<K, V> {
    matcher: Rc<dyn Fn(&K) -> Option<V>>,
    label: &'static str,
}

impl<K, V> Clone for Case<K, V> {
    fn clone(&self) -> Self {
        Self {
            matcher: Rc::clone(&self.matcher),
            label: self.label,
        }
    }
}

impl<K, V> Case<K, V>
where
    K: 'static,
    V: 'static,
{
    fn from_matcher<F>(label: &'static str, matcher: F) -> Self
    where
        F: Fn(&K) -> Option<V> + 'static,
    {
        Self {
            matcher: Rc::new(matcher),
            label,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a matcher with no wildcard: unknown keys yield `None`.
    pub fn of<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Hash + Eq,
        V: Clone,
    {
        Self::from_patterns(
            entries
                .into_iter()
                .map(|(key, value)| (Pattern::Key(key), value)),
        )
    }

    /// Builds a matcher whose unknown keys yield `fallback`.
    pub fn with_wildcard<I>(entries: I, fallback: V) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Hash + Eq,
        V: Clone,
    {
        Self::from_patterns(
            entries
                .into_iter()
                .map(|(key, value)| (Pattern::Key(key), value))
                .chain(std::iter::once((Pattern::Wildcard, fallback))),
        )
    }

    /// Builds a matcher from patterns, where [`Pattern::Wildcard`] designates
    /// the catch-all entry.
    ///
    /// When a key or the wildcard appears more than once, the last entry wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::{Case, Pattern};
    ///
    /// let command = Case::from_patterns([
    ///     (Pattern::Key("start"), 1),
    ///     (Pattern::Key("stop"), 2),
    ///     (Pattern::Wildcard, 0),
    /// ]);
    /// assert_eq!(command.match_key(&"stop"), Some(2));
    /// assert_eq!(command.match_key(&"jump"), Some(0));
    /// ```
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = (Pattern<K>, V)>,
        K: Hash + Eq,
        V: Clone,
    {
        let mut table = HashMap::new();
        let mut wildcard = None;
        for (pattern, value) in patterns {
            match pattern {
                Pattern::Key(key) => {
                    table.insert(key, value);
                }
                Pattern::Wildcard => wildcard = Some(value),
            }
        }
        Self::from_matcher(type_name::<HashMap<K, V>>(), move |key| {
            table.get(key).or(wildcard.as_ref()).cloned()
        })
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Looks up `key`, falling back to the wildcard entry.
    ///
    /// Returns `None` when neither exists.
    #[inline]
    pub fn match_key(&self, key: &K) -> Option<V> {
        (self.matcher)(key)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to every successful match.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Case<K, B>
    where
        B: 'static,
        F: Fn(V) -> B + 'static,
    {
        Case::from_matcher(self.label, move |key| {
            self.match_key(key).map(&function)
        })
    }

    /// Applies a `Case`-producing function to a successful match, then matches
    /// the produced `Case` against the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Case;
    ///
    /// let tier = Case::with_wildcard([("ana", "gold")], "basic");
    /// let discount = tier.flat_map(|tier: &str| {
    ///     let percent = if tier == "gold" { 20 } else { 0 };
    ///     Case::with_wildcard([("ana", percent + 5)], percent)
    /// });
    ///
    /// assert_eq!(discount.match_key(&"ana"), Some(25));
    /// assert_eq!(discount.match_key(&"bob"), Some(0));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Case<K, B>
    where
        B: 'static,
        F: Fn(V) -> Case<K, B> + 'static,
    {
        Case::from_matcher(self.label, move |key| {
            self.match_key(key)
                .and_then(|value| function(value).match_key(key))
        })
    }
}

impl<K, F> Case<K, F>
where
    K: 'static,
    F: 'static,
{
    /// Applies the matched function to the match of `other` for the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_effect::control::Case;
    ///
    /// let handlers: Case<&str, fn(i32) -> i32> =
    ///     Case::of([("double", (|x: i32| x * 2) as fn(i32) -> i32), ("negate", |x: i32| -x)]);
    /// let inputs = Case::with_wildcard([("negate", 5)], 1);
    ///
    /// let results = handlers.ap(inputs);
    /// assert_eq!(results.match_key(&"double"), Some(2));
    /// assert_eq!(results.match_key(&"negate"), Some(-5));
    /// assert_eq!(results.match_key(&"other"), None);
    /// ```
    pub fn ap<A, B>(self, other: Case<K, A>) -> Case<K, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B,
    {
        Case::from_matcher(self.label, move |key| {
            self.match_key(key)
                .and_then(|function| other.match_key(key).map(function))
        })
    }
}

impl<K, V> IsNothing for Case<K, V> {}

// =============================================================================
// Display Implementation
// =============================================================================

impl<K, V> Inspect for Case<K, V> {
    fn inspect(&self) -> String {
        format!("Case({})", self.label)
    }
}

impl<K, V> fmt::Display for Case<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}

impl<K, V> fmt::Debug for Case<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Case").field(&self.label).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<K, V> TypeConstructor for Case<K, V> {
    type Inner = V;
    type WithType<B> = Case<K, B>;
}

impl<K: 'static, A: 'static, B: 'static> Functor<B> for Case<K, A> {
    #[inline]
    fn fmap<F>(self, function: F) -> Case<K, B>
    where
        F: Fn(A) -> B + 'static,
    {
        self.map(function)
    }
}

impl<K: 'static, A: 'static, B: 'static> Monad<B> for Case<K, A> {
    #[inline]
    fn flat_map<F>(self, function: F) -> Case<K, B>
    where
        F: Fn(A) -> Case<K, B> + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<K: 'static, A: 'static, B: 'static, C: 'static> Applicative<B, C> for Case<K, A> {
    fn map2<F>(self, other: Case<K, B>, function: F) -> Case<K, C>
    where
        F: Fn(A, B) -> C + 'static,
    {
        Case::from_matcher(self.label, move |key| {
            let first = self.match_key(key)?;
            let second = other.match_key(key)?;
            Some(function(first, second))
        })
    }
}

impl<K: 'static, A: 'static, B: 'static, C: 'static, D: 'static> Applicative3<B, C, D>
    for Case<K, A>
{
    fn map3<F>(self, second: Case<K, B>, third: Case<K, C>, function: F) -> Case<K, D>
    where
        F: Fn(A, B, C) -> D + 'static,
    {
        Case::from_matcher(self.label, move |key| {
            let first_value = self.match_key(key)?;
            let second_value = second.match_key(key)?;
            let third_value = third.match_key(key)?;
            Some(function(first_value, second_value, third_value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn greeting() -> Case<&'static str, &'static str> {
        Case::with_wildcard([("en", "hello"), ("cs", "ahoj")], "hi")
    }

    #[rstest]
    #[case("en", Some("hello"))]
    #[case("cs", Some("ahoj"))]
    #[case("de", Some("hi"))]
    fn match_falls_back_to_wildcard(#[case] key: &'static str, #[case] expected: Option<&str>) {
        assert_eq!(greeting().match_key(&key), expected);
    }

    #[rstest]
    fn missing_key_without_wildcard_is_none() {
        let table = Case::of([(1, "one")]);
        assert_eq!(table.match_key(&2), None);
    }

    #[rstest]
    fn later_entries_replace_earlier_ones() {
        let table = Case::from_patterns([
            (Pattern::Wildcard, 0),
            (Pattern::Key('a'), 1),
            (Pattern::Key('a'), 2),
            (Pattern::Wildcard, 3),
        ]);
        assert_eq!(table.match_key(&'a'), Some(2));
        assert_eq!(table.match_key(&'b'), Some(3));
    }

    #[rstest]
    fn map_skips_failed_matches() {
        let upper = Case::of([("a", "x")]).map(|text: &str| text.to_uppercase());
        assert_eq!(upper.match_key(&"a"), Some("X".to_string()));
        assert_eq!(upper.match_key(&"b"), None);
    }

    #[rstest]
    fn handler_functions_can_be_stored() {
        let handlers: Case<&str, Rc<dyn Fn(i32) -> i32>> = Case::with_wildcard(
            [("inc", Rc::new(|x: i32| x + 1) as Rc<dyn Fn(i32) -> i32>)],
            Rc::new(|x: i32| x) as Rc<dyn Fn(i32) -> i32>,
        );
        let handler = handlers.match_key(&"inc");
        assert_eq!(handler.map(|function| function(1)), Some(2));
        assert_eq!(handlers.match_key(&"noop").map(|function| function(1)), Some(1));
    }

    #[rstest]
    fn map2_needs_both_matches() {
        let prices = Case::of([("apple", 3), ("pear", 4)]);
        let counts = Case::of([("apple", 2)]);
        let totals = prices.map2(counts, |price: i32, count: i32| price * count);
        assert_eq!(totals.match_key(&"apple"), Some(6));
        assert_eq!(totals.match_key(&"pear"), None);
    }

    #[rstest]
    fn inspect_names_the_matcher() {
        let rendered = greeting().inspect();
        assert!(rendered.starts_with("Case("));
        assert!(rendered.contains("HashMap"));
        assert_eq!(greeting().to_string(), rendered);
    }

    #[rstest]
    fn transforms_keep_the_table_label() {
        let rendered = greeting().inspect();
        let derived = greeting()
            .map(|text: &str| text.len())
            .flat_map(|length: usize| Case::with_wildcard([("a", length)], 0));

        assert_eq!(derived.inspect(), rendered);
        assert!(!derived.inspect().contains("closure"));
    }
}
