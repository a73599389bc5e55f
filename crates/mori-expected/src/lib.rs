//! # mori-expected
//!
//! A value that holds either a success payload or a failure payload, with a
//! composable API for building, inspecting, transforming and chaining it.
//!
//! - [`Expected<T, E>`]: the general container
//! - [`VoidExpected<E>`]: the same contract with no success payload
//! - [`Unexpected<E>`]: marks a value as the failure alternative at call sites
//! - [`BadExpectedAccess<E>`] / [`BadAccess`]: returned by checked success
//!   accessors when the container holds an error
//!
//! Switching a container between alternatives builds the new payload before
//! the old one is released, so a failed or panicking builder leaves the
//! container exactly as it was.
//!
//! ```rust
//! use mori_expected::{Expected, Unexpected};
//!
//! fn parse_port(text: &str) -> Expected<u16, String> {
//!     text.parse::<u16>().map_err(|e| e.to_string()).into()
//! }
//!
//! let port = parse_port("8080").transform(|p| p + 1);
//! assert_eq!(port, 8081_u16);
//!
//! let bad = parse_port("http").and_then(|p| parse_port(&p.to_string()));
//! assert!(bad.has_error());
//! assert_ne!(bad, Unexpected::new(""));
//! ```

pub mod bad_access;
pub mod carrier;
mod cmp;
pub mod expected;
#[macro_use]
mod macros;
mod repr;
mod transition;
pub mod unexpected;
pub mod void;

pub use bad_access::{BadAccess, BadExpectedAccess};
pub use carrier::Carrier;
pub use expected::Expected;
pub use mori_error::{Error, ErrorKind};
pub use repr::State;
pub use unexpected::Unexpected;
pub use void::VoidExpected;

/// Container whose failure alternative is the workspace [`Error`].
pub type Result<T> = Expected<T, Error>;
