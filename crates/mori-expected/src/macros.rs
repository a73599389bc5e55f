/// Build the success alternative of whatever [`Carrier`](crate::Carrier) the
/// context expects.
///
/// ```rust
/// use mori_expected::{Expected, VoidExpected, ok};
///
/// let a: Expected<u8, String> = ok!(1);
/// let b: VoidExpected<String> = ok!();
/// assert!(a.has_value() && b.has_value());
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        $crate::Carrier::from_value(())
    };
    ($value:expr $(,)?) => {
        $crate::Carrier::from_value($value)
    };
}

/// Build the failure alternative of whatever [`Carrier`](crate::Carrier) the
/// context expects. With no argument the error is `Default::default()`.
///
/// ```rust
/// use mori_expected::{Result, err};
///
/// let failed: Result<u8> = err!();
/// assert!(failed.error().is_marker());
/// ```
#[macro_export]
macro_rules! err {
    () => {
        $crate::Carrier::from_error(::core::default::Default::default())
    };
    ($error:expr $(,)?) => {
        $crate::Carrier::from_error($error)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Expected, Unexpected, VoidExpected};

    #[test]
    fn test_shorthands_follow_the_target_type() {
        let a: Expected<u8, String> = ok!(1);
        let b: Expected<u8, String> = err!("bad".to_string());
        let c: VoidExpected<i32> = err!();
        let d: Result<u8, ()> = ok!(2);

        assert!(a == 1_u8);
        assert!(b == Unexpected::new("bad"));
        assert!(c == Unexpected::new(0));
        assert_eq!(d, Ok(2));
    }
}
