//! Control structures: optional values, results and pattern dispatch.
//!
//! - [`Maybe`]: a value that may be absent, re-classified after every `map`
//! - [`Either`]: a success or an error value, with errors bypassing transforms
//! - [`Case`]: a key-to-value matcher with a wildcard fallback
//!
//! # Examples
//!
//! ## Absence propagation
//!
//! ```rust
//! use lambda_effect::control::Maybe;
//!
//! let trimmed = Maybe::of("   ".to_string()).map(|text: String| text.trim().to_string());
//! assert!(trimmed.is_nothing());
//! ```
//!
//! ## Dispatching to handlers
//!
//! ```rust
//! use lambda_effect::control::{Case, Either};
//!
//! fn parse_flag(value: &str) -> Either<String, bool> {
//!     Either::attempt(|| value.parse::<bool>())
//! }
//!
//! let options = Case::of([("--verbose", parse_flag as fn(&str) -> Either<String, bool>)]);
//!
//! let verbose = options.match_key(&"--verbose").map(|parse| parse("true"));
//! assert_eq!(verbose, Some(Either::Right(true)));
//! assert!(options.match_key(&"--quiet").is_none());
//! ```

mod case;
mod either;
mod maybe;

pub use case::{Case, Pattern};
pub use either::Either;
pub use maybe::Maybe;
