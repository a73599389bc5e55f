//! The general result container.

use std::fmt;

use crate::bad_access::BadExpectedAccess;
use crate::carrier::Carrier;
use crate::repr::{Repr, State};
use crate::unexpected::Unexpected;

/// Holds either a success value of type `T` or a failure value of type `E`.
///
/// Exactly one alternative is active at any time; [`has_value`](Self::has_value)
/// reports which one without touching the payload.
///
/// ```rust
/// use mori_expected::{Expected, Unexpected};
///
/// let mut ex: Expected<f64, i32> = Unexpected::new(3).into();
/// assert!(ex.has_error());
/// assert_eq!(ex, Unexpected::new(3));
///
/// ex.emplace(4.2);
/// assert!(ex.has_value());
/// assert_eq!(ex, 4.2_f64);
/// ```
#[must_use = "this `Expected` may hold an error, which should be handled"]
#[derive(Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Expected<T, E> {
    pub(crate) repr: Repr<T, E>,
}

// =============================================================================
// Construction
// =============================================================================

impl<T, E> Expected<T, E> {
    /// Build in the success state.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            repr: Repr::Value(value),
        }
    }

    /// Build in the success state from a closure.
    #[inline]
    pub fn new_with(f: impl FnOnce() -> T) -> Self {
        Self::new(f())
    }

    /// Build in the failure state.
    #[inline]
    pub const fn from_error(error: E) -> Self {
        Self {
            repr: Repr::Error(error),
        }
    }

    /// Convert both alternatives into another instantiation.
    pub fn convert<U, G>(self) -> Expected<U, G>
    where
        T: Into<U>,
        E: Into<G>,
    {
        Expected {
            repr: self.repr.map(Into::into, Into::into),
        }
    }

    /// Like [`convert`](Self::convert), cloning out of `self`.
    pub fn convert_cloned<U, G>(&self) -> Expected<U, G>
    where
        T: Clone + Into<U>,
        E: Clone + Into<G>,
    {
        self.clone().convert()
    }
}

impl<T: Default, E> Default for Expected<T, E> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, E, G> From<Unexpected<G>> for Expected<T, E>
where
    G: Into<E>,
{
    fn from(unex: Unexpected<G>) -> Self {
        Self::from_error(unex.into_error().into())
    }
}

impl<T, E, G> From<&Unexpected<G>> for Expected<T, E>
where
    G: Clone + Into<E>,
{
    fn from(unex: &Unexpected<G>) -> Self {
        Self::from_error(unex.error().clone().into())
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self {
            repr: result.into(),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(ex: Expected<T, E>) -> Self {
        ex.repr.into_result()
    }
}

impl<T, E> Carrier for Expected<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn from_value(value: T) -> Self {
        Self::new(value)
    }

    #[inline]
    fn from_error(error: E) -> Self {
        Self::from_error(error)
    }
}

impl<T: Clone, E: Clone> Clone for Expected<T, E> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
        }
    }

    /// Copy-assignment. Same-state payloads are assigned through their own
    /// `clone_from`; otherwise the source payload is cloned before `self` is
    /// touched.
    fn clone_from(&mut self, source: &Self) {
        self.repr.clone_from_repr(&source.repr);
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Expected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Repr::Error(e) => f.debug_tuple("Error").field(e).finish(),
        }
    }
}

// =============================================================================
// Observers
// =============================================================================

impl<T, E> Expected<T, E> {
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        !self.has_value()
    }

    #[inline]
    pub fn state(&self) -> State {
        self.repr.state()
    }

    /// Borrow the success payload.
    ///
    /// Returns the access-failure signal, carrying a clone of the error, when
    /// the container holds an error.
    pub fn value(&self) -> Result<&T, BadExpectedAccess<E>>
    where
        E: Clone,
    {
        match &self.repr {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(BadExpectedAccess::new(e.clone())),
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadExpectedAccess<E>>
    where
        E: Clone,
    {
        match &mut self.repr {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(BadExpectedAccess::new(e.clone())),
        }
    }

    /// Take the success payload; the error moves into the signal otherwise.
    pub fn into_value(self) -> Result<T, BadExpectedAccess<E>> {
        match self.repr {
            Repr::Value(v) => Ok(v),
            Repr::Error(e) => Err(BadExpectedAccess::new(e)),
        }
    }

    /// Borrow the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a value.
    #[track_caller]
    pub fn error(&self) -> &E {
        match &self.repr {
            Repr::Error(e) => e,
            Repr::Value(_) => error_on_value(),
        }
    }

    /// # Panics
    ///
    /// Panics if the container holds a value.
    #[track_caller]
    pub fn error_mut(&mut self) -> &mut E {
        match &mut self.repr {
            Repr::Error(e) => e,
            Repr::Value(_) => error_on_value(),
        }
    }

    /// # Panics
    ///
    /// Panics if the container holds a value.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self.repr {
            Repr::Error(e) => e,
            Repr::Value(_) => error_on_value(),
        }
    }

    /// # Safety
    ///
    /// The container must hold a value.
    #[inline]
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.has_value(), "value_unchecked on an error");
        match &self.repr {
            Repr::Value(v) => v,
            // SAFETY: the caller guarantees the success state.
            Repr::Error(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The container must hold a value.
    #[inline]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value(), "value_unchecked_mut on an error");
        match &mut self.repr {
            Repr::Value(v) => v,
            // SAFETY: the caller guarantees the success state.
            Repr::Error(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The container must hold an error.
    #[inline]
    pub unsafe fn error_unchecked(&self) -> &E {
        debug_assert!(self.has_error(), "error_unchecked on a value");
        match &self.repr {
            Repr::Error(e) => e,
            // SAFETY: the caller guarantees the failure state.
            Repr::Value(_) => unsafe { std::hint::unreachable_unchecked() },
        }
    }

    /// A clone of the value, or `fallback` converted into `T`.
    pub fn value_or(&self, fallback: impl Into<T>) -> T
    where
        T: Clone,
    {
        match &self.repr {
            Repr::Value(v) => v.clone(),
            Repr::Error(_) => fallback.into(),
        }
    }

    pub fn into_value_or(self, fallback: impl Into<T>) -> T {
        match self.repr {
            Repr::Value(v) => v,
            Repr::Error(_) => fallback.into(),
        }
    }

    /// A clone of the error, or `fallback` converted into `E`.
    pub fn error_or(&self, fallback: impl Into<E>) -> E
    where
        E: Clone,
    {
        match &self.repr {
            Repr::Error(e) => e.clone(),
            Repr::Value(_) => fallback.into(),
        }
    }

    pub fn into_error_or(self, fallback: impl Into<E>) -> E {
        match self.repr {
            Repr::Error(e) => e,
            Repr::Value(_) => fallback.into(),
        }
    }

    /// True when holding a value equal to `value`.
    ///
    /// This is the general form of `expected == value`; the `==` operator
    /// against a bare value is only provided for the primitive types,
    /// `String` and `&str`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.repr.value().is_some_and(|v| v == value)
    }

    /// True when holding an error equal to `error`.
    pub fn contains_error<G>(&self, error: &G) -> bool
    where
        E: PartialEq<G>,
    {
        self.repr.error().is_some_and(|e| e == error)
    }

    pub fn as_ref(&self) -> Expected<&T, &E> {
        Expected {
            repr: self.repr.as_ref(),
        }
    }

    pub fn as_mut(&mut self) -> Expected<&mut T, &mut E> {
        Expected {
            repr: self.repr.as_mut(),
        }
    }

    /// Borrowing view for pattern matching.
    pub fn as_result(&self) -> Result<&T, &E> {
        self.repr.as_ref().into_result()
    }

    pub fn into_result(self) -> Result<T, E> {
        self.repr.into_result()
    }

    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }

    pub fn err(self) -> Option<E> {
        self.into_result().err()
    }
}

#[cold]
#[track_caller]
fn error_on_value() -> ! {
    panic!("called `error` on an `Expected` holding a value")
}

// =============================================================================
// Modifiers
// =============================================================================

impl<T, E> Expected<T, E> {
    /// Switch to the success state holding `value`, whatever the current
    /// state.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.repr.emplace_value(value)
    }

    /// Like [`emplace`](Self::emplace); the value is built before the
    /// container is touched, so a panic in `f` leaves it unchanged.
    pub fn emplace_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        let value = f();
        self.repr.emplace_value(value)
    }

    /// Move-assignment.
    pub fn assign(&mut self, other: Self) -> &mut Self {
        self.repr.assign(other.repr);
        self
    }

    /// Copy-assignment. Behaves like `clone_from`, returning the updated
    /// container; a panicking clone leaves `self` as it was.
    pub fn assign_cloned(&mut self, source: &Self) -> &mut Self
    where
        T: Clone,
        E: Clone,
    {
        self.repr.clone_from_repr(&source.repr);
        self
    }

    pub fn assign_value(&mut self, value: T) -> &mut Self {
        self.repr.assign_value(value);
        self
    }

    pub fn assign_error(&mut self, error: E) -> &mut Self {
        self.repr.assign_error(error);
        self
    }

    pub fn assign_unexpected<G: Into<E>>(&mut self, unex: Unexpected<G>) -> &mut Self {
        self.assign_error(unex.into_error().into())
    }

    /// Build a value with `build` and store it. If `build` fails, its error is
    /// returned and the container is left exactly as it was.
    pub fn try_assign_value_with<X>(
        &mut self,
        build: impl FnOnce() -> Result<T, X>,
    ) -> Result<&mut Self, X> {
        self.repr.try_assign_value_with(build)?;
        Ok(self)
    }

    /// The failure-side counterpart of
    /// [`try_assign_value_with`](Self::try_assign_value_with).
    pub fn try_assign_error_with<X>(
        &mut self,
        build: impl FnOnce() -> Result<E, X>,
    ) -> Result<&mut Self, X> {
        self.repr.try_assign_error_with(build)?;
        Ok(self)
    }

    /// Store `T::try_from(input)`; on conversion failure nothing changes.
    pub fn try_assign_value<U>(&mut self, input: U) -> Result<&mut Self, T::Error>
    where
        T: TryFrom<U>,
    {
        self.try_assign_value_with(|| T::try_from(input))
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.repr, &mut other.repr);
    }
}

// =============================================================================
// Monadic operations
// =============================================================================

impl<T, E> Expected<T, E> {
    /// Feed the value to `f`; an error is passed through without calling it.
    pub fn and_then<R, F>(self, f: F) -> R
    where
        F: FnOnce(T) -> R,
        R: Carrier<Error = E>,
    {
        match self.repr {
            Repr::Value(v) => f(v),
            Repr::Error(e) => R::from_error(e),
        }
    }

    pub fn and_then_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
        R: Carrier<Error = E>,
        E: Clone,
    {
        match &self.repr {
            Repr::Value(v) => f(v),
            Repr::Error(e) => R::from_error(e.clone()),
        }
    }

    pub fn and_then_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
        R: Carrier<Error = E>,
        E: Clone,
    {
        match &mut self.repr {
            Repr::Value(v) => f(v),
            Repr::Error(e) => R::from_error(e.clone()),
        }
    }

    /// Feed the error to `f`; a value is passed through without calling it.
    pub fn or_else<R, F>(self, f: F) -> R
    where
        F: FnOnce(E) -> R,
        R: Carrier<Value = T>,
    {
        match self.repr {
            Repr::Value(v) => R::from_value(v),
            Repr::Error(e) => f(e),
        }
    }

    pub fn or_else_ref<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&E) -> R,
        R: Carrier<Value = T>,
        T: Clone,
    {
        match &self.repr {
            Repr::Value(v) => R::from_value(v.clone()),
            Repr::Error(e) => f(e),
        }
    }

    pub fn or_else_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut E) -> R,
        R: Carrier<Value = T>,
        T: Clone,
    {
        match &mut self.repr {
            Repr::Value(v) => R::from_value(v.clone()),
            Repr::Error(e) => f(e),
        }
    }

    /// Map the value, leaving an error untouched.
    pub fn transform<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|v| Expected::new(f(v)))
    }

    pub fn transform_ref<U, F>(&self, f: F) -> Expected<U, E>
    where
        F: FnOnce(&T) -> U,
        E: Clone,
    {
        self.and_then_ref(|v| Expected::new(f(v)))
    }

    pub fn transform_mut<U, F>(&mut self, f: F) -> Expected<U, E>
    where
        F: FnOnce(&mut T) -> U,
        E: Clone,
    {
        self.and_then_mut(|v| Expected::new(f(v)))
    }

    /// Map the error, leaving a value untouched.
    pub fn transform_error<G, F>(self, f: F) -> Expected<T, G>
    where
        F: FnOnce(E) -> G,
    {
        self.or_else(|e| Expected::from_error(f(e)))
    }

    pub fn transform_error_ref<G, F>(&self, f: F) -> Expected<T, G>
    where
        F: FnOnce(&E) -> G,
        T: Clone,
    {
        self.or_else_ref(|e| Expected::from_error(f(e)))
    }

    pub fn transform_error_mut<G, F>(&mut self, f: F) -> Expected<T, G>
    where
        F: FnOnce(&mut E) -> G,
        T: Clone,
    {
        self.or_else_mut(|e| Expected::from_error(f(e)))
    }
}
