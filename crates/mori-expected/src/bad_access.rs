//! Signals returned when a success payload is requested from a container in
//! the failure state.

use std::fmt;

use mori_error::{Error, ErrorKind};

const BAD_ACCESS_MESSAGE: &str =
    "incorrectly accessing an expected object that contains an unexpected value";

/// Payload-less access failure, returned by
/// [`VoidExpected::value`](crate::VoidExpected::value).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BadAccess;

impl fmt::Display for BadAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BAD_ACCESS_MESSAGE)
    }
}

impl std::error::Error for BadAccess {}

/// Access failure carrying the error payload the container held, so the caller
/// can recover it without checking state first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BadExpectedAccess<E> {
    error: E,
}

impl<E> BadExpectedAccess<E> {
    pub fn new(error: E) -> Self {
        Self { error }
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }

    /// Forget the payload.
    pub fn as_bad_access(&self) -> BadAccess {
        BadAccess
    }
}

impl<E> fmt::Display for BadExpectedAccess<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BAD_ACCESS_MESSAGE)
    }
}

impl<E: fmt::Debug> std::error::Error for BadExpectedAccess<E> {}

impl<E> From<BadExpectedAccess<E>> for BadAccess {
    fn from(_: BadExpectedAccess<E>) -> Self {
        BadAccess
    }
}

impl From<BadAccess> for Error {
    fn from(err: BadAccess) -> Self {
        Error::new(ErrorKind::BadAccess, err.to_string()).with_operation("expected::value")
    }
}

impl<E: fmt::Debug> From<BadExpectedAccess<E>> for Error {
    fn from(err: BadExpectedAccess<E>) -> Self {
        Error::new(ErrorKind::BadAccess, err.to_string())
            .with_operation("expected::value")
            .with_context("error", format!("{:?}", err.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_carries_payload() {
        let mut err = BadExpectedAccess::new(vec![1, 2]);
        err.error_mut().push(3);
        assert_eq!(err.error(), &vec![1, 2, 3]);
        assert_eq!(err.as_bad_access(), BadAccess);
        assert_eq!(err.into_error(), vec![1, 2, 3]);
    }

    #[test]
    fn test_display_matches_payloadless_signal() {
        let err = BadExpectedAccess::new(3);
        assert_eq!(err.to_string(), BadAccess.to_string());
        assert_eq!(BadAccess::from(err), BadAccess);
    }

    #[test]
    fn test_into_workspace_error() {
        let err: Error = BadExpectedAccess::new("disk full").into();
        assert_eq!(err.kind(), ErrorKind::BadAccess);
        assert_eq!(err.operation(), "expected::value");
        assert_eq!(err.context()[0], ("error", "\"disk full\"".to_string()));

        let err: Error = BadAccess.into();
        assert_eq!(err.kind(), ErrorKind::BadAccess);
        assert!(err.context().is_empty());
    }
}
