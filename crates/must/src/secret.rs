//! Checks that never report their operands.
//!
//! Same conditions and labels as the checks at the crate root, but a failure
//! carries no fields, so tokens, passwords and the like stay out of logs and
//! panic messages. The operands need not implement `Debug`.

use crate::{Failure, Reporter, IS_ZERO, NOT_SAME, NOT_ZERO};

/// Checks `a` is not the zero value of its type, and returns it.
#[track_caller]
pub fn nice<T>(a: T) -> T
where
  T: Default + PartialEq,
{
  nice_at(Reporter::DIRECT, a)
}

/// Checks `a` is the zero value of its type.
#[track_caller]
pub fn zero<T>(a: T)
where
  T: Default + PartialEq,
{
  if !zero_value::is_zero(&a) {
    Failure::new(NOT_ZERO).report(Reporter::DIRECT);
  }
}

/// Checks `a == b`.
#[track_caller]
pub fn same<T>(a: T, b: T)
where
  T: PartialEq,
{
  same_at(Reporter::DIRECT, &a, &b);
}

/// Checks `a` and `b` are equal and non-zero, and returns `a`.
#[track_caller]
pub fn sane<T>(a: T, b: T) -> T
where
  T: Default + PartialEq,
{
  same_at(Reporter::WRAPPED, &a, &b);
  nice_at(Reporter::WRAPPED, a)
}

#[track_caller]
fn nice_at<T>(reporter: Reporter, a: T) -> T
where
  T: Default + PartialEq,
{
  if zero_value::is_zero(&a) {
    Failure::new(IS_ZERO).report(reporter);
  }
  a
}

#[track_caller]
fn same_at<T>(reporter: Reporter, a: &T, b: &T)
where
  T: PartialEq,
{
  if a != b {
    Failure::new(NOT_SAME).report(reporter);
  }
}
