//! The `pipe!` macro for left-to-right function composition.

/// Composes functions from left to right.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`, the same function as
/// `compose!(h, g, f)` written in data-flow order.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::{compose, pipe};
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = pipe!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// assert_eq!(digits(7), compose!(get_length, to_string)(7));
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipe!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
