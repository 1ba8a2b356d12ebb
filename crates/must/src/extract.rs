//! Unwrapping results that must not be errors.
//!
//! Each function here takes the `Result` of some call whose failure would be a
//! bug, checks it is `Ok`, and returns what it holds. Several values come back
//! as a tuple. A failure is blamed on the line that called the function, not on
//! this module.
//!
//! ```
//! fn read_config() -> Result<String, std::io::Error> {
//!   Ok("config-value".to_owned())
//! }
//! fn find_pair() -> Result<(Option<u8>, Option<char>), String> {
//!   Ok((Some(1), Some('x')))
//! }
//!
//! assert_eq!(must::extract::value(read_config()), "config-value");
//! assert_eq!(must::extract::present(find_pair()), (1, 'x'));
//! ```

use crate::Reporter;
use std::fmt;

/// Values that can each be checked to be present.
///
/// Implemented for `Option<A>` and tuples of one to nine `Option`s.
pub trait AllPresent {
  /// What is left after unwrapping each value.
  type Output;

  /// Checks each value is present, using `reporter`, and unwraps them.
  fn all_present(self, reporter: Reporter) -> Self::Output;
}

/// Values that can each be checked to be non-zero.
///
/// Implemented for tuples of one to nine values.
pub trait AllNice: Sized {
  /// Checks each value is not the zero value of its type, using `reporter`.
  fn all_nice(self, reporter: Reporter) -> Self;
}

impl<A> AllPresent for Option<A> {
  type Output = A;

  #[track_caller]
  fn all_present(self, reporter: Reporter) -> A {
    crate::full_at(reporter, self)
  }
}

macro_rules! impl_tuple {
  ($($name:ident)+) => {
    impl<$($name),+> AllPresent for ($(Option<$name>,)+) {
      type Output = ($($name,)+);

      #[track_caller]
      #[allow(non_snake_case)]
      fn all_present(self, reporter: Reporter) -> Self::Output {
        let ($($name,)+) = self;
        ($(crate::full_at(reporter, $name),)+)
      }
    }

    impl<$($name),+> AllNice for ($($name,)+)
    where
      $($name: Default + PartialEq + fmt::Debug,)+
    {
      #[track_caller]
      #[allow(non_snake_case)]
      fn all_nice(self, reporter: Reporter) -> Self {
        let ($($name,)+) = self;
        ($(crate::nice_at(reporter, $name),)+)
      }
    }
  };
}

impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
impl_tuple!(A B C D E);
impl_tuple!(A B C D E F);
impl_tuple!(A B C D E F G);
impl_tuple!(A B C D E F G H);
impl_tuple!(A B C D E F G H I);

/// Checks `res` is `Ok`, and returns what it holds.
#[track_caller]
pub fn value<T, E>(res: Result<T, E>) -> T
where
  E: fmt::Debug,
{
  crate::ok_at(Reporter::WRAPPED, res)
}

/// Checks `res` is `Ok` and that everything it holds is present, and returns
/// the unwrapped values.
#[track_caller]
pub fn present<T, E>(res: Result<T, E>) -> T::Output
where
  T: AllPresent,
  E: fmt::Debug,
{
  crate::ok_at(Reporter::WRAPPED, res).all_present(Reporter::DOUBLE_WRAPPED)
}

/// Checks `res` is `Ok` and what it holds is non-zero, and returns it.
#[track_caller]
pub fn nice<T, E>(res: Result<T, E>) -> T
where
  T: Default + PartialEq + fmt::Debug,
  E: fmt::Debug,
{
  crate::nice_at(Reporter::WRAPPED, crate::ok_at(Reporter::WRAPPED, res))
}

/// Checks `res` is `Ok` and each value in the tuple it holds is non-zero, and
/// returns the tuple.
#[track_caller]
pub fn all_nice<T, E>(res: Result<T, E>) -> T
where
  T: AllNice,
  E: fmt::Debug,
{
  crate::ok_at(Reporter::WRAPPED, res).all_nice(Reporter::DOUBLE_WRAPPED)
}
