//! Converting multi-argument functions into curried chains.
//!
//! The curried closures share the function and the already supplied
//! arguments through `Rc`, so every link implements `Fn` and a partial
//! application can be reused. That is what lets an ordinary function enter
//! [`Nary`](super::Nary) or a wrapper's `ap`.

/// Converts a 2-argument function into a curried form.
///
/// `curry2!(f)(a)(b)` is `f(a, b)`. The first argument must implement
/// [`Clone`] so the partial application can be called repeatedly.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::curry2;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let add_five = curry2!(add)(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// `curry3!(f)(a)(b)(c)` is `f(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::curry3;
///
/// let join = curry3!(|a: String, b: &'static str, c: &'static str| format!("{a}{b}{c}"));
/// let greeting = join("hello".to_string());
/// assert_eq!(greeting(", ")("world"), "hello, world");
/// assert_eq!(greeting(" ")("there"), "hello there");
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::rc::Rc::clone(&first);
                let second = ::std::rc::Rc::new(second);
                move |third| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&second)),
                        third,
                    )
                }
            }
        }
    }};
}
