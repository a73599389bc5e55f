use strum_macros::{Display, IntoStaticStr};

/// Whether retrying the failed operation could help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorStatus {
    /// Same inputs, same failure.
    #[default]
    Permanent,
    /// Another attempt may succeed, e.g. a builder that ran out of a resource.
    Temporary,
    /// Was temporary, kept failing; stop retrying.
    Persistent,
}

impl ErrorStatus {
    pub fn is_retryable(&self) -> bool {
        *self == ErrorStatus::Temporary
    }

    pub fn persist(self) -> Self {
        if self == ErrorStatus::Temporary {
            ErrorStatus::Persistent
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
