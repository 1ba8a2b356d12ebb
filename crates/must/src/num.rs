//! Checks on numbers.
//!
//! Comparisons go through [`PartialOrd::partial_cmp`], so a check fails when
//! its operands are unordered, as with `NaN`.

use crate::{Failure, Reporter};
use std::cmp::Ordering;
use std::fmt;

/// A primitive number.
pub trait Num: Copy + PartialOrd + fmt::Debug {
  /// Zero.
  const ZERO: Self;
}

macro_rules! impl_num {
  ($zero:literal: $($t:ident)*) => {
    $(
      impl Num for $t {
        const ZERO: Self = $zero;
      }
    )*
  };
}

impl_num!(0: i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
impl_num!(0.0: f32 f64);

/// Checks `a < b`.
#[track_caller]
pub fn less<T: Num>(a: T, b: T) {
  compare(a, b, Ordering::is_lt, "not less, should be less");
}

/// Checks `a <= b`.
#[track_caller]
pub fn lte<T: Num>(a: T, b: T) {
  compare(a, b, Ordering::is_le, "not less or equal, should be less or equal");
}

/// Checks `a > b`.
#[track_caller]
pub fn gt<T: Num>(a: T, b: T) {
  compare(a, b, Ordering::is_gt, "not greater, should be greater");
}

/// Checks `a >= b`.
#[track_caller]
pub fn gte<T: Num>(a: T, b: T) {
  compare(a, b, Ordering::is_ge, "not greater or equal, should be greater or equal");
}

/// Checks `v > 0`.
#[track_caller]
pub fn positive<T: Num>(v: T) {
  if !v.partial_cmp(&T::ZERO).is_some_and(Ordering::is_gt) {
    Failure::new("not positive, should be positive").debug("v", &v).report(Reporter::DIRECT);
  }
}

/// Checks `v < 0`.
#[track_caller]
pub fn negative<T: Num>(v: T) {
  if !v.partial_cmp(&T::ZERO).is_some_and(Ordering::is_lt) {
    Failure::new("not negative, should be negative").debug("v", &v).report(Reporter::DIRECT);
  }
}

#[track_caller]
fn compare<T: Num>(a: T, b: T, holds: fn(Ordering) -> bool, label: &'static str) {
  if !a.partial_cmp(&b).is_some_and(holds) {
    Failure::new(label).debug("a", &a).debug("b", &b).report(Reporter::DIRECT);
  }
}
