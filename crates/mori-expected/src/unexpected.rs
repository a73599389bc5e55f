//! The failure wrapper.

use std::fmt;

/// Carries an error payload so that call sites can say "build the failure
/// alternative from this" instead of "build the success alternative".
///
/// ```rust
/// use mori_expected::{Expected, Unexpected};
///
/// let ex: Expected<f64, i32> = Unexpected::new(3).into();
/// assert!(ex.has_error());
/// assert_eq!(ex, Unexpected::new(3));
/// ```
#[derive(Clone, Copy, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Unexpected<E> {
    error: E,
}

impl<E> Unexpected<E> {
    /// Wrap `error`.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Rewrap the result of `f` applied to the payload.
    pub fn map<G>(self, f: impl FnOnce(E) -> G) -> Unexpected<G> {
        Unexpected::new(f(self.error))
    }

    /// Exchange payloads with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.error, &mut other.error);
    }
}

impl<E> From<E> for Unexpected<E> {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl<E, E2> PartialEq<Unexpected<E2>> for Unexpected<E>
where
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Unexpected<E2>) -> bool {
        self.error == other.error
    }
}

impl<E: Eq> Eq for Unexpected<E> {}

impl<E: fmt::Display> fmt::Display for Unexpected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_access_modes() {
        let mut unex = Unexpected::new(String::from("disk full"));
        assert_eq!(unex.error(), "disk full");

        unex.error_mut().push_str(" (retry later)");
        assert_eq!(unex.into_error(), "disk full (retry later)");
    }

    #[test]
    fn test_heterogeneous_equality() {
        let owned = Unexpected::new(String::from("bad"));
        let borrowed = Unexpected::new("bad");
        assert!(owned == borrowed);
        assert!(owned != Unexpected::new("worse"));
    }

    #[test]
    fn test_swap() {
        let mut a = Unexpected::new(1);
        let mut b = Unexpected::new(2);
        a.swap(&mut b);
        assert_eq!(a, Unexpected::new(2));
        assert_eq!(b, Unexpected::new(1));
    }

    #[test]
    fn test_map_and_display() {
        let unex = Unexpected::new(404).map(|code| format!("status {code}"));
        assert_eq!(unex.to_string(), "status 404");
    }

    #[test]
    fn test_nested_wrapper_is_distinct() {
        let inner = Unexpected::new(1);
        let outer: Unexpected<Unexpected<i32>> = Unexpected::from(inner);
        assert_eq!(*outer.error(), Unexpected::new(1));
    }
}
