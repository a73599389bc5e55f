//! The workspace error value.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};

use crate::{ErrorKind, ErrorStatus};

type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failure raised while building, converting or inspecting a container.
///
/// Carries a [`ErrorKind`] to match on, an [`ErrorStatus`] for retry
/// decisions, the operation that failed, ordered key/value context and an
/// optional source error.
pub struct Error {
    kind: ErrorKind,
    status: ErrorStatus,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Source>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: kind.default_status(),
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// The innermost operation recorded with [`with_operation`](Self::with_operation),
    /// or `""`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Value of the first context entry named `key`.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// True for the bare marker produced by [`Error::default`]: kind
    /// `Unexpected` with nothing attached.
    pub fn is_marker(&self) -> bool {
        self.kind == ErrorKind::Unexpected
            && self.message.is_empty()
            && self.operation.is_empty()
            && self.context.is_empty()
            && self.source.is_none()
    }

    pub fn is_retryable(&self) -> bool {
        self.status.is_retryable()
    }

    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    pub fn temporary(self) -> Self {
        self.with_status(ErrorStatus::Temporary)
    }

    pub fn permanent(self) -> Self {
        self.with_status(ErrorStatus::Permanent)
    }

    /// Gave up retrying a temporary failure.
    pub fn persist(mut self) -> Self {
        self.status = self.status.persist();
        self
    }

    /// Record the failing operation. An operation set earlier is kept in the
    /// context under `called`, so wrapping an error preserves the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        let inner = std::mem::replace(&mut self.operation, operation);
        if !inner.is_empty() {
            self.context.push(("called", inner.to_string()));
        }
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach the underlying error. Setting a source twice is a bug and
    /// trips a debug assertion.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

macro_rules! kind_constructors {
    ($($(#[$meta:meta])* $name:ident => $kind:ident,)*) => {
        impl Error {
            $(
                $(#[$meta])*
                pub fn $name(message: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }
    };
}

kind_constructors! {
    unexpected => Unexpected,
    unsupported => Unsupported,
    invalid_argument => InvalidArgument,
    /// A success payload was requested from a failed container.
    bad_access => BadAccess,
    conversion_failed => ConversionFailed,
    /// A scripted check did not hold.
    assertion_failed => AssertionFailed,
    invariant_violation => InvariantViolation,
}

impl Error {
    /// Building the `payload` failed before any container was touched.
    pub fn construction_failed(payload: impl Into<String>) -> Self {
        let payload = payload.into();
        Self::new(
            ErrorKind::ConstructionFailed,
            format!("failed to build '{payload}' payload"),
        )
        .with_context("payload", payload)
    }

    /// A switch between the `from` and `to` states was abandoned.
    pub fn transition_aborted(from: impl Into<String>, to: impl Into<String>) -> Self {
        let (from, to) = (from.into(), to.into());
        Self::new(
            ErrorKind::TransitionAborted,
            format!("transition {from} -> {to} aborted, container unchanged"),
        )
        .with_context("from", from)
        .with_context("to", to)
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::new(ErrorKind::Unexpected, "")
    }
}

impl fmt::Display for Error {
    /// `Kind (status)[ at op][, context { k: v, .. }][ => message]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.status)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect();
            write!(f, ", context {{ {} }}", pairs.join(", "))?;
        }
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let mut s = f.debug_struct("Error");
            s.field("kind", &self.kind)
                .field("status", &self.status)
                .field("message", &self.message)
                .field("operation", &self.operation)
                .field("context", &self.context);
            if let Some(source) = &self.source {
                s.field("source", source);
            }
            return s.finish();
        }

        fmt::Display::fmt(self, f)?;
        if let Some(source) = &self.source {
            write!(f, "\n    caused by: {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::unexpected(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::unexpected(message)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl From<TryFromIntError> for Error {
    fn from(err: TryFromIntError) -> Self {
        Self::conversion_failed(err.to_string()).set_source(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Self::invalid_argument(err.to_string()).set_source(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Self {
        Self::invalid_argument(err.to_string()).set_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_takes_status_from_kind() {
        let err = Error::bad_access("container holds an error");
        assert_eq!(err.kind(), ErrorKind::BadAccess);
        assert_eq!(err.message(), "container holds an error");
        assert_eq!(err.status(), ErrorStatus::Permanent);

        let err = Error::construction_failed("Widget");
        assert_eq!(err.status(), ErrorStatus::Temporary);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_default_is_marker() {
        let err = Error::default();
        assert!(err.is_marker());
        assert_eq!(err.to_string(), "Unexpected (permanent)");
        assert!(!Error::default().with_context("k", "v").is_marker());
        assert!(!Error::unexpected("said something").is_marker());
    }

    #[test]
    fn test_operation_chain_moves_into_context() {
        let err = Error::transition_aborted("error", "value")
            .with_operation("expected::try_assign_value_with")
            .with_operation("scenario::rollback");

        assert_eq!(err.operation(), "scenario::rollback");
        assert_eq!(
            err.context_value("called"),
            Some("expected::try_assign_value_with")
        );
        assert_eq!(err.context_value("from"), Some("error"));
        assert_eq!(err.context_value("missing"), None);
    }

    #[test]
    fn test_status_transitions() {
        let err = Error::invalid_argument("negative").temporary();
        assert!(err.is_retryable());

        let err = err.persist();
        assert!(!err.is_retryable());
        assert_eq!(err.status(), ErrorStatus::Persistent);
        assert_eq!(err.permanent().status(), ErrorStatus::Permanent);
    }

    #[test]
    fn test_display_layout() {
        let err = Error::assertion_failed("state mismatch")
            .with_operation("demo")
            .with_context("expected", "value")
            .with_context("actual", "error");

        assert_eq!(
            err.to_string(),
            "AssertionFailed (permanent) at demo, context { expected: value, actual: error } => state mismatch"
        );
    }

    #[test]
    fn test_debug_mentions_cause() {
        let err = Error::from(u8::try_from(300_u32).unwrap_err());
        assert_eq!(err.kind(), ErrorKind::ConversionFailed);

        let text = format!("{err:?}");
        assert!(text.starts_with("ConversionFailed (permanent)"));
        assert!(text.contains("caused by:"));
        assert!(format!("{err:#?}").contains("kind: ConversionFailed"));
    }

    #[test]
    fn test_parse_errors_are_invalid_arguments() {
        let err: Error = "x".parse::<i32>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(std::error::Error::source(&err).is_some());

        let err: Error = "4.2.1".parse::<f64>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.source_ref().is_some());
    }
}
