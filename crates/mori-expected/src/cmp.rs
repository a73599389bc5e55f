use crate::expected::Expected;
use crate::repr::Repr;
use crate::unexpected::Unexpected;
use crate::void::VoidExpected;

impl<T, E, T2, E2> PartialEq<Expected<T2, E2>> for Expected<T, E>
where
    T: PartialEq<T2>,
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Expected<T2, E2>) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Value(a), Repr::Value(b)) => a == b,
            (Repr::Error(a), Repr::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Expected<T, E> {}

impl<T, E, G> PartialEq<Unexpected<G>> for Expected<T, E>
where
    E: PartialEq<G>,
{
    fn eq(&self, other: &Unexpected<G>) -> bool {
        self.contains_error(other.error())
    }
}

impl<G, T, E> PartialEq<Expected<T, E>> for Unexpected<G>
where
    E: PartialEq<G>,
{
    fn eq(&self, other: &Expected<T, E>) -> bool {
        other == self
    }
}

impl<E, E2> PartialEq<VoidExpected<E2>> for VoidExpected<E>
where
    E: PartialEq<E2>,
{
    fn eq(&self, other: &VoidExpected<E2>) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Value(()), Repr::Value(())) => true,
            (Repr::Error(a), Repr::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<E: Eq> Eq for VoidExpected<E> {}

impl<E, G> PartialEq<Unexpected<G>> for VoidExpected<E>
where
    E: PartialEq<G>,
{
    fn eq(&self, other: &Unexpected<G>) -> bool {
        self.contains_error(other.error())
    }
}

impl<G, E> PartialEq<VoidExpected<E>> for Unexpected<G>
where
    E: PartialEq<G>,
{
    fn eq(&self, other: &VoidExpected<E>) -> bool {
        other == self
    }
}

/// `expected == value` for concrete payload types. A blanket
/// `PartialEq<U>` would overlap the container and wrapper impls above.
macro_rules! impl_value_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T, E> PartialEq<$ty> for Expected<T, E>
            where
                T: PartialEq<$ty>,
            {
                fn eq(&self, other: &$ty) -> bool {
                    self.contains(other)
                }
            }

            impl<T, E> PartialEq<Expected<T, E>> for $ty
            where
                T: PartialEq<$ty>,
            {
                fn eq(&self, other: &Expected<T, E>) -> bool {
                    other.contains(self)
                }
            }
        )*
    };
}

impl_value_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl<'a, T, E> PartialEq<&'a str> for Expected<T, E>
where
    T: PartialEq<&'a str>,
{
    fn eq(&self, other: &&'a str) -> bool {
        self.contains(other)
    }
}
