//! Error types for the effect system.
//!
//! Deferred effects report failures through their continuations, not through
//! return values. The only place an error type is needed is where an
//! [`AsyncEffect`](super::AsyncEffect) is bridged to a `Future`.

use std::fmt;

/// The ways an [`AsyncEffect`](super::AsyncEffect) awaited as a future can fail.
///
/// # Examples
///
/// ```rust
/// use lambda_effect::effect::PromiseError;
///
/// let rejected: PromiseError<String> = PromiseError::Rejected("timeout".to_string());
/// assert_eq!(rejected.to_string(), "effect rejected: timeout");
/// assert_eq!(rejected.into_rejection(), Some("timeout".to_string()));
///
/// let abandoned: PromiseError<String> = PromiseError::Abandoned;
/// assert_eq!(
///     abandoned.to_string(),
///     "effect abandoned: both continuations were dropped without being called"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromiseError<E> {
    /// The effect called its reject continuation with this error.
    Rejected(E),
    /// The effect dropped both continuations without calling either.
    Abandoned,
}

impl<E> PromiseError<E> {
    /// Returns the rejection error, if the effect rejected.
    #[inline]
    pub fn into_rejection(self) -> Option<E> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Abandoned => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for PromiseError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(error) => write!(formatter, "effect rejected: {error}"),
            Self::Abandoned => write!(
                formatter,
                "effect abandoned: both continuations were dropped without being called"
            ),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for PromiseError<E> {}
