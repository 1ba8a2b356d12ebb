//! The zero value of a type: `0`, `0.0`, `false`, `""`, empty collections,
//! `None`.
//!
//! This is what a value is compared against when asking whether it is
//! meaningfully present.

#![cfg_attr(not(test), no_std)]


/// Returns the zero value of `T`.
///
/// ```
/// assert_eq!(zero_value::zero::<u32>(), 0);
/// assert_eq!(zero_value::zero::<&str>(), "");
/// assert_eq!(zero_value::zero::<Option<char>>(), None);
/// ```
#[must_use]
pub fn zero<T>() -> T
where
  T: Default,
{
  T::default()
}

/// Returns whether `value` is the zero value of its type.
///
/// Uses the type's own equality, so for floats this is exact: `-0.0` is zero,
/// `NaN` is not.
///
/// ```
/// # use zero_value::is_zero;
/// assert!(is_zero(&0u8));
/// assert!(!is_zero(&"hi"));
/// assert!(is_zero(&-0.0f64));
/// assert!(!is_zero(&f64::NAN));
/// ```
#[must_use]
pub fn is_zero<T>(value: &T) -> bool
where
  T: Default + PartialEq,
{
  *value == zero::<T>()
}
