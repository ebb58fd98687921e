//! Value classification and debug rendering.
//!
//! - [`IsNothing`]: the emptiness capability that decides `Maybe`'s tag
//! - Curried predicates: [`is_equal`], [`is_deep_equal`], [`is_greater_than`],
//!   [`is_length`], ...
//! - [`Inspect`]: the capability of rendering a deterministic debug string,
//!   implemented by every wrapper kind of this crate
//!
//! # Examples
//!
//! ```rust
//! use lambda_effect::predicate::{deep_inspect, is_nothing};
//!
//! assert!(is_nothing(""));
//! assert!(!is_nothing(&0_u8));
//! assert_eq!(deep_inspect(&vec!["a", "b"]), "['a', 'b']");
//! ```

mod conditional;
mod inspect;
mod nothing;

pub use conditional::{
    HasLength, Zero, is_at_least, is_at_most, is_deep_equal, is_empty, is_equal, is_false,
    is_greater_than, is_length, is_less_than, is_not_deep_equal, is_not_empty, is_not_equal,
    is_not_length, is_not_type_of, is_not_zero, is_true, is_type_of, is_zero, length_of, type_of,
};
pub use inspect::{Inspect, deep_inspect, inspect_function};
pub use nothing::{IsNothing, is_just, is_nothing};
