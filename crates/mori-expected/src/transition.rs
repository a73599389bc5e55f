//! Switching a container between its two alternatives.
//!
//! Every cross-state assignment goes through [`reinit`]: the replacement
//! payload is built while the old one is still in place, and only a fully
//! built payload is moved into the slot. Moves cannot fail, so a failing (or
//! panicking) builder always leaves the container exactly as it was, and the
//! slot is never observed empty.

use std::convert::Infallible;

use crate::repr::Repr;

/// Builds a payload with `build`, then moves it into `slot` through `wrap`.
///
/// The previous payload is dropped only after the slot already holds the new
/// one.
fn reinit<T, E, N, X>(
    slot: &mut Repr<T, E>,
    build: impl FnOnce() -> Result<N, X>,
    wrap: fn(N) -> Repr<T, E>,
) -> Result<(), X> {
    let from = slot.state();
    let next = match build() {
        Ok(next) => wrap(next),
        Err(err) => {
            tracing::trace!(%from, "payload construction failed, transition aborted");
            return Err(err);
        }
    };
    let to = next.state();
    let prev = std::mem::replace(slot, next);
    if from != to {
        tracing::trace!(%from, %to, "state transition");
    }
    drop(prev);
    Ok(())
}

/// Unwraps a result whose error type is uninhabited.
#[inline]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<T, E> Repr<T, E> {
    /// Stores a success payload, assigning over an existing one.
    pub(crate) fn assign_value(&mut self, value: T) {
        match self {
            Repr::Value(slot) => *slot = value,
            Repr::Error(_) => infallible(reinit(self, || Ok(value), Repr::Value)),
        }
    }

    /// Stores a failure payload, assigning over an existing one.
    pub(crate) fn assign_error(&mut self, error: E) {
        match self {
            Repr::Error(slot) => *slot = error,
            Repr::Value(_) => infallible(reinit(self, || Ok(error), Repr::Error)),
        }
    }

    /// Builds a success payload, then stores it. On `Err` nothing changes.
    pub(crate) fn try_assign_value_with<X>(
        &mut self,
        build: impl FnOnce() -> Result<T, X>,
    ) -> Result<(), X> {
        match self {
            Repr::Value(slot) => {
                *slot = build()?;
                Ok(())
            }
            Repr::Error(_) => reinit(self, build, Repr::Value),
        }
    }

    /// Builds a failure payload, then stores it. On `Err` nothing changes.
    pub(crate) fn try_assign_error_with<X>(
        &mut self,
        build: impl FnOnce() -> Result<E, X>,
    ) -> Result<(), X> {
        match self {
            Repr::Error(slot) => {
                *slot = build()?;
                Ok(())
            }
            Repr::Value(_) => reinit(self, build, Repr::Error),
        }
    }

    /// Replaces whatever is stored with a fresh success payload.
    pub(crate) fn emplace_value(&mut self, value: T) -> &mut T {
        infallible(reinit(self, || Ok(value), Repr::Value));
        let Repr::Value(slot) = self else {
            unreachable!("a completed reinit into `Repr::Value` left an error")
        };
        slot
    }

    /// Move-assignment from another container.
    pub(crate) fn assign(&mut self, other: Self) {
        match other {
            Repr::Value(v) => self.assign_value(v),
            Repr::Error(e) => self.assign_error(e),
        }
    }

    /// Copy-assignment from another container.
    ///
    /// Same-state payloads reuse their storage through `clone_from`; a
    /// cross-state copy clones first, so a panicking `clone` leaves `self` as
    /// it was.
    pub(crate) fn clone_from_repr(&mut self, source: &Self)
    where
        T: Clone,
        E: Clone,
    {
        match source {
            Repr::Value(src) => match self {
                Repr::Value(dst) => dst.clone_from(src),
                Repr::Error(_) => infallible(reinit(self, || Ok(src.clone()), Repr::Value)),
            },
            Repr::Error(src) => match self {
                Repr::Error(dst) => dst.clone_from(src),
                Repr::Value(_) => infallible(reinit(self, || Ok(src.clone()), Repr::Error)),
            },
        }
    }
}
