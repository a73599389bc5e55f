//! Tagged storage shared by [`Expected`](crate::Expected) and
//! [`VoidExpected`](crate::VoidExpected).

use strum_macros::{Display, IntoStaticStr};

/// Which alternative a container currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum State {
    /// The success payload is active.
    Value,
    /// The failure payload is active.
    Error,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The alternative a transition out of `self` lands in.
    pub fn flipped(self) -> Self {
        match self {
            State::Value => State::Error,
            State::Error => State::Value,
        }
    }
}

/// Exactly one payload, tagged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub(crate) enum Repr<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> Repr<T, E> {
    #[inline]
    pub(crate) fn state(&self) -> State {
        match self {
            Repr::Value(_) => State::Value,
            Repr::Error(_) => State::Error,
        }
    }

    #[inline]
    pub(crate) fn as_ref(&self) -> Repr<&T, &E> {
        match self {
            Repr::Value(v) => Repr::Value(v),
            Repr::Error(e) => Repr::Error(e),
        }
    }

    #[inline]
    pub(crate) fn as_mut(&mut self) -> Repr<&mut T, &mut E> {
        match self {
            Repr::Value(v) => Repr::Value(v),
            Repr::Error(e) => Repr::Error(e),
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Repr::Value(v) => Some(v),
            Repr::Error(_) => None,
        }
    }

    #[inline]
    pub(crate) fn error(&self) -> Option<&E> {
        match self {
            Repr::Value(_) => None,
            Repr::Error(e) => Some(e),
        }
    }

    #[inline]
    pub(crate) fn error_mut(&mut self) -> Option<&mut E> {
        match self {
            Repr::Value(_) => None,
            Repr::Error(e) => Some(e),
        }
    }

    pub(crate) fn into_result(self) -> Result<T, E> {
        match self {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(e),
        }
    }

    pub(crate) fn map<U, G>(
        self,
        value: impl FnOnce(T) -> U,
        error: impl FnOnce(E) -> G,
    ) -> Repr<U, G> {
        match self {
            Repr::Value(v) => Repr::Value(value(v)),
            Repr::Error(e) => Repr::Error(error(e)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Repr<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Repr::Value(v),
            Err(e) => Repr::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_tag() {
        let value: Repr<u8, &str> = Repr::Value(1);
        let error: Repr<u8, &str> = Repr::Error("boom");
        assert_eq!(value.state(), State::Value);
        assert_eq!(error.state(), State::Error);
        assert_eq!(State::Value.flipped(), State::Error);
        assert_eq!(State::Error.to_string(), "Error");
    }

    #[test]
    fn test_map_keeps_tag() {
        let error: Repr<u8, &str> = Repr::Error("boom");
        let mapped = error.map(|v| v + 1, str::len);
        assert_eq!(mapped, Repr::Error(4));
    }
}
