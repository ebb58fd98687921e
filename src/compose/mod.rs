//! Function composition utilities.
//!
//! - [`compose!`](crate::compose!): compose functions right to left
//! - [`pipe!`](crate::pipe!): compose functions left to right
//! - [`curry2!`](crate::curry2!), [`curry3!`](crate::curry3!): turn n-ary
//!   functions into curried chains
//! - [`Nary`] and [`nary!`](crate::nary!): call a curried chain with several
//!   arguments at once
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`pass_through`]: runs a side effect on a value and returns the value
//! - [`spy`]: emits a debug event with the rendering of a value and returns it
//! - [`memoize`]: caches a pure function's results in a caller-owned map
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::{curry2, nary, pipe};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! let add_then_double = pipe!(curry2!(add)(1), |x: i32| x * 2);
//! assert_eq!(add_then_double(4), 10);
//!
//! assert_eq!(nary!(curry2!(add), 2, 3), 5);
//! ```

mod compose_macro;
mod curry_macro;
mod nary;
mod pipe_macro;
mod utils;

pub use nary::Nary;
pub use utils::{identity, memoize, pass_through, spy};
