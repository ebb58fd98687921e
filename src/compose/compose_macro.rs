//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs first.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```rust
/// use lambda_effect::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Composition also works on wrapper-producing functions, which is how a
/// `map` chain is usually assembled before being handed to `fmap`:
///
/// ```rust
/// use lambda_effect::compose;
/// use lambda_effect::control::Maybe;
///
/// let trim = |text: String| text.trim().to_string();
/// let shout = |text: String| text.to_uppercase();
///
/// let normalized = Maybe::of("  hi ".to_string()).map(compose!(shout, trim));
/// assert_eq!(normalized, Maybe::Just("HI".to_string()));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
