//! Types that can be built from either a success value or an error.

/// A two-state result type.
///
/// `and_then` requires its callback to return a `Carrier` with the same
/// `Error`, and `or_else` one with the same `Value`, so the short-circuit path
/// can rebuild the untouched payload in the callback's return type.
pub trait Carrier: Sized {
    type Value;
    type Error;

    fn from_value(value: Self::Value) -> Self;

    fn from_error(error: Self::Error) -> Self;
}

impl<T, E> Carrier for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn from_value(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn from_error(error: E) -> Self {
        Err(error)
    }
}
