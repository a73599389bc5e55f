//! # mori-error
//!
//! The error type shared by the mori crates.
//!
//! An [`Error`] answers three questions: which [`ErrorKind`] of failure it
//! is, whether retrying may help ([`ErrorStatus`]), and where it happened
//! (operation, context pairs, source error).
//!
//! ```rust
//! use mori_error::{Error, ErrorKind};
//!
//! let err = Error::transition_aborted("error", "value")
//!     .with_operation("expected::try_assign_value_with");
//! assert_eq!(err.kind(), ErrorKind::TransitionAborted);
//! assert!(err.is_retryable());
//! assert_eq!(err.persist().is_retryable(), false);
//! ```
//!
//! [`Error::default`] is a bare marker with no message; it fills the failure
//! side of `mori_expected::Result<T>` when nothing more specific is known.

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

pub type Result<T> = std::result::Result<T, Error>;
