//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `SyncEffect<_>` as type
//! constructors directly. [`TypeConstructor`] uses a Generic Associated Type
//! to name "the same wrapper applied to another type", which is what
//! `Functor`, `Applicative` and `Monad` need to describe their results.
//!
//! # Example
//!
//! ```rust
//! use lambda_effect::control::Maybe;
//! use lambda_effect::typeclass::TypeConstructor;
//!
//! fn assert_retargets<T: TypeConstructor<Inner = i32>>()
//! where
//!     T::WithType<String>: TypeConstructor<Inner = String>,
//! {
//! }
//!
//! assert_retargets::<Maybe<i32>>();
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// The wrappers of this crate keep every non-payload parameter fixed: the
/// error channel of `Either<L, _>` and `AsyncEffect<E, _>` and the key type of
/// `Case<K, _>` survive `WithType` unchanged.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged<A>(A);

    impl<A> TypeConstructor for Tagged<A> {
        type Inner = A;
        type WithType<B> = Tagged<B>;
    }

    #[test]
    fn with_type_retargets_inner() {
        fn assert_inner<T: TypeConstructor<Inner = bool>>() {}
        assert_inner::<<Tagged<i32> as TypeConstructor>::WithType<bool>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Tagged<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<char>;

        fn assert_inner<T: TypeConstructor<Inner = char>>() {}
        assert_inner::<Step2>();

        let Tagged(value) = Tagged('x');
        assert_eq!(value, 'x');
    }
}
