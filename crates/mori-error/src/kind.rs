use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::ErrorStatus;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Catch-all, and the kind of the bare error marker
    Unexpected,
    Unsupported,
    InvalidArgument,

    /// A success payload was requested from a container holding an error
    BadAccess,
    /// A payload builder failed before the container was touched
    ConstructionFailed,
    /// A state switch was abandoned; the container kept its old payload
    TransitionAborted,
    /// Narrowing a payload into another type failed
    ConversionFailed,

    AssertionFailed,
    InvariantViolation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Status an [`Error`](crate::Error) of this kind starts with. Building a
    /// payload may succeed on another attempt; everything else is permanent.
    pub fn default_status(&self) -> ErrorStatus {
        match self {
            ErrorKind::ConstructionFailed | ErrorKind::TransitionAborted => ErrorStatus::Temporary,
            _ => ErrorStatus::Permanent,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.default_status().is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_match_variants() {
        assert_eq!(ErrorKind::BadAccess.to_string(), "BadAccess");
        assert_eq!(ErrorKind::TransitionAborted.as_str(), "TransitionAborted");
    }

    #[test]
    fn test_only_build_failures_are_retryable() {
        let retryable: Vec<ErrorKind> = ErrorKind::iter().filter(ErrorKind::is_retryable).collect();
        assert_eq!(
            retryable,
            vec![ErrorKind::ConstructionFailed, ErrorKind::TransitionAborted]
        );
    }
}
