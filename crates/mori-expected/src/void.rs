//! The result container with no success payload.

use std::fmt;

use crate::bad_access::BadAccess;
use crate::carrier::Carrier;
use crate::expected::Expected;
use crate::repr::{Repr, State};
use crate::unexpected::Unexpected;

/// Either "succeeded" or a failure value of type `E`.
///
/// Shares the contract of [`Expected`] with the success payload removed:
/// [`emplace`](Self::emplace) and [`transform`](Self::transform) take no
/// arguments, and [`value`](Self::value) only reports whether the container
/// succeeded.
///
/// ```rust
/// use mori_expected::{Unexpected, VoidExpected};
///
/// let mut done: VoidExpected<String> = VoidExpected::new();
/// assert!(done.has_value());
///
/// done.assign_unexpected(Unexpected::new("disk full"));
/// assert!(done.has_error());
/// assert_eq!(done.error(), "disk full");
/// ```
#[must_use = "this `VoidExpected` may hold an error, which should be handled"]
#[derive(Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct VoidExpected<E> {
    pub(crate) repr: Repr<(), E>,
}

impl<E> VoidExpected<E> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            repr: Repr::Value(()),
        }
    }

    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self {
            repr: Repr::Error(error),
        }
    }

    pub fn convert<G>(self) -> VoidExpected<G>
    where
        E: Into<G>,
    {
        VoidExpected {
            repr: self.repr.map(|()| (), Into::into),
        }
    }

    pub fn into_expected(self) -> Expected<(), E> {
        Expected { repr: self.repr }
    }

    pub fn into_result(self) -> Result<(), E> {
        self.repr.into_result()
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.repr, Repr::Value(()))
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        !self.has_value()
    }

    #[inline]
    pub fn state(&self) -> State {
        self.repr.state()
    }

    /// `Ok(())` on success, the payload-less access signal otherwise.
    pub fn value(&self) -> Result<(), BadAccess> {
        match self.repr {
            Repr::Value(()) => Ok(()),
            Repr::Error(_) => Err(BadAccess),
        }
    }

    /// # Panics
    ///
    /// Panics if the container succeeded.
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.repr {
            Repr::Error(e) => e,
            Repr::Value(()) => error_on_success(),
        }
    }

    /// # Panics
    ///
    /// Panics if the container succeeded.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match self.repr.error_mut() {
            Some(e) => e,
            None => error_on_success(),
        }
    }

    /// # Panics
    ///
    /// Panics if the container succeeded.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.repr {
            Repr::Error(e) => e,
            Repr::Value(()) => error_on_success(),
        }
    }

    /// # Safety
    ///
    /// The container must hold an error.
    #[inline]
    pub unsafe fn error_unchecked(&self) -> &E {
        debug_assert!(self.has_error(), "error_unchecked on a success");
        match &self.repr {
            Repr::Error(e) => e,
            // SAFETY: the caller guarantees the failure state.
            Repr::Value(()) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    pub fn error_or(&self, fallback: impl Into<E>) -> E
    where
        E: Clone,
    {
        match &self.repr {
            Repr::Error(e) => e.clone(),
            Repr::Value(()) => fallback.into(),
        }
    }

    pub fn into_error_or(self, fallback: impl Into<E>) -> E {
        match self.repr {
            Repr::Error(e) => e,
            Repr::Value(()) => fallback.into(),
        }
    }

    pub fn contains_error<G>(&self, error: &G) -> bool
    where
        E: PartialEq<G>,
    {
        self.repr.error().is_some_and(|e| e == error)
    }

    // -------------------------------------------------------------------------
    // Modifiers
    // -------------------------------------------------------------------------

    /// Switch to the success state, whatever the current state.
    pub fn emplace(&mut self) {
        self.repr.emplace_value(());
    }

    pub fn assign(&mut self, other: Self) -> &mut Self {
        self.repr.assign(other.repr);
        self
    }

    /// Copy-assignment returning the updated container.
    pub fn assign_cloned(&mut self, source: &Self) -> &mut Self
    where
        E: Clone,
    {
        self.repr.clone_from_repr(&source.repr);
        self
    }

    /// Mark as succeeded.
    pub fn assign_value(&mut self) -> &mut Self {
        self.repr.assign_value(());
        self
    }

    pub fn assign_error(&mut self, error: E) -> &mut Self {
        self.repr.assign_error(error);
        self
    }

    pub fn assign_unexpected<G: Into<E>>(&mut self, unex: Unexpected<G>) -> &mut Self {
        self.assign_error(unex.into_error().into())
    }

    /// Build an error with `build` and store it; on `Err` nothing changes.
    pub fn try_assign_error_with<X>(
        &mut self,
        build: impl FnOnce() -> Result<E, X>,
    ) -> Result<&mut Self, X> {
        self.repr.try_assign_error_with(build)?;
        Ok(self)
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.repr, &mut other.repr);
    }

    // -------------------------------------------------------------------------
    // Monadic operations
    // -------------------------------------------------------------------------

    /// Call `f` on success; an error is passed through without calling it.
    pub fn and_then<R, F>(self, f: F) -> R
    where
        F: FnOnce() -> R,
        R: Carrier<Error = E>,
    {
        match self.repr {
            Repr::Value(()) => f(),
            Repr::Error(e) => R::from_error(e),
        }
    }

    pub fn and_then_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
        R: Carrier<Error = E>,
        E: Clone,
    {
        match &self.repr {
            Repr::Value(()) => f(),
            Repr::Error(e) => R::from_error(e.clone()),
        }
    }

    pub fn or_else<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
        R: Carrier<Value = ()>,
    {
        match self.repr {
            Repr::Value(()) => R::from_value(()),
            Repr::Error(e) => f(e),
        }
    }

    pub fn or_else_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&E) -> R,
        R: Carrier<Value = ()>,
    {
        match &self.repr {
            Repr::Value(()) => R::from_value(()),
            Repr::Error(e) => f(e),
        }
    }

    pub fn or_else_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut E) -> R,
        R: Carrier<Value = ()>,
    {
        match &mut self.repr {
            Repr::Value(()) => R::from_value(()),
            Repr::Error(e) => f(e),
        }
    }

    /// Produce a value with `f` on success.
    pub fn transform<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce() -> U,
    {
        self.and_then(|| Expected::new(f()))
    }

    pub fn transform_ref<U, F>(&self, f: F) -> Expected<U, E>
    where
        F: FnOnce() -> U,
        E: Clone,
    {
        self.and_then_ref(|| Expected::new(f()))
    }

    pub fn transform_error<G, F>(self, f: F) -> VoidExpected<G>
    where
        F: FnOnce(E) -> G,
    {
        self.or_else(|e| VoidExpected::from_error(f(e)))
    }

    pub fn transform_error_ref<G, F>(&self, f: F) -> VoidExpected<G>
    where
        F: FnOnce(&E) -> G,
    {
        self.or_else_ref(|e| VoidExpected::from_error(f(e)))
    }

    pub fn transform_error_mut<G, F>(&mut self, f: F) -> VoidExpected<G>
    where
        F: FnOnce(&mut E) -> G,
    {
        self.or_else_mut(|e| VoidExpected::from_error(f(e)))
    }
}

#[cold]
#[track_caller]
fn error_on_success() -> ! {
    panic!("called `error` on a `VoidExpected` that succeeded")
}

impl<E> Default for VoidExpected<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for VoidExpected<E> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.repr.clone_from_repr(&source.repr);
    }
}

impl<E: fmt::Debug> fmt::Debug for VoidExpected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(()) => f.write_str("Value"),
            Repr::Error(e) => f.debug_tuple("Error").field(e).finish(),
        }
    }
}

impl<E> Carrier for VoidExpected<E> {
    type Value = ();
    type Error = E;

    #[inline]
    fn from_value((): ()) -> Self {
        Self::new()
    }

    #[inline]
    fn from_error(error: E) -> Self {
        Self::from_error(error)
    }
}

impl<E, G> From<Unexpected<G>> for VoidExpected<E>
where
    G: Into<E>,
{
    fn from(unex: Unexpected<G>) -> Self {
        Self::from_error(unex.into_error().into())
    }
}

impl<E, G> From<&Unexpected<G>> for VoidExpected<E>
where
    G: Clone + Into<E>,
{
    fn from(unex: &Unexpected<G>) -> Self {
        Self::from_error(unex.error().clone().into())
    }
}

impl<E> From<Result<(), E>> for VoidExpected<E> {
    fn from(result: Result<(), E>) -> Self {
        Self {
            repr: result.into(),
        }
    }
}

impl<E> From<Expected<(), E>> for VoidExpected<E> {
    fn from(ex: Expected<(), E>) -> Self {
        Self { repr: ex.repr }
    }
}

impl<E> From<VoidExpected<E>> for Result<(), E> {
    fn from(ex: VoidExpected<E>) -> Self {
        ex.into_result()
    }
}
