//! Checks on sequences of items.
//!
//! A `None` where a collection was expected counts as an empty collection, so
//! `have(None::<Vec<u8>>)` fails and `length(None::<Vec<u8>>, 0)` passes.

use crate::{Failure, Reporter};
use std::fmt;

const NOT_IN: &str = "value not in collection, should be in";

/// A collection that can be viewed as a slice.
pub trait Items {
  /// The type of the items.
  type Item;

  /// Returns the items.
  fn items(&self) -> &[Self::Item];
}

impl<T> Items for [T] {
  type Item = T;

  fn items(&self) -> &[T] {
    self
  }
}

impl<T, const N: usize> Items for [T; N] {
  type Item = T;

  fn items(&self) -> &[T] {
    self
  }
}

impl<T> Items for Vec<T> {
  type Item = T;

  fn items(&self) -> &[T] {
    self
  }
}

impl<T> Items for Box<[T]> {
  type Item = T;

  fn items(&self) -> &[T] {
    self
  }
}

impl<C> Items for Option<C>
where
  C: Items,
{
  type Item = C::Item;

  fn items(&self) -> &[C::Item] {
    match self {
      Some(c) => c.items(),
      None => &[],
    }
  }
}

impl<C> Items for &C
where
  C: ?Sized + Items,
{
  type Item = C::Item;

  fn items(&self) -> &[C::Item] {
    (**self).items()
  }
}

/// Checks `c` has at least one item, and returns it.
#[track_caller]
pub fn have<C: Items>(c: C) -> C {
  if c.items().is_empty() {
    Failure::new("collection is empty, should have items").report(Reporter::DIRECT);
  }
  c
}

/// Checks `c` has no items.
#[track_caller]
pub fn none<C: Items>(c: C) {
  let len = c.items().len();
  if len != 0 {
    Failure::new("collection not empty, should be empty").size("len", len).report(Reporter::DIRECT);
  }
}

/// Checks `c` has exactly `n` items.
#[track_caller]
pub fn length<C: Items>(c: C, n: usize) {
  let len = c.items().len();
  if len != n {
    Failure::new("length mismatch").size("len", len).size("n", n).report(Reporter::DIRECT);
  }
}

/// Checks some item of `c` equals `v`.
#[track_caller]
pub fn contains<C>(c: C, v: C::Item)
where
  C: Items,
  C::Item: PartialEq + fmt::Debug,
{
  let items = c.items();
  if !items.contains(&v) {
    Failure::new(NOT_IN).size("len", items.len()).debug("v", &v).report(Reporter::DIRECT);
  }
}

/// Checks `v` equals some item of `c`.
#[track_caller]
pub fn is_in<C>(v: C::Item, c: C)
where
  C: Items,
  C::Item: PartialEq + fmt::Debug,
{
  let items = c.items();
  if !items.contains(&v) {
    Failure::new(NOT_IN).debug("v", &v).size("len", items.len()).report(Reporter::DIRECT);
  }
}

/// Checks `a` and `b` have equal items in the same order.
#[track_caller]
pub fn equals<A, B>(a: A, b: B)
where
  A: Items,
  B: Items<Item = A::Item>,
  A::Item: PartialEq,
{
  let (a, b) = (a.items(), b.items());
  if a != b {
    Failure::new("collections differ, should be equal")
      .size("len_a", a.len())
      .size("len_b", b.len())
      .report(Reporter::DIRECT);
  }
}

/// Checks `a` and `b` differ in some item or in length.
#[track_caller]
pub fn diff<A, B>(a: A, b: B)
where
  A: Items,
  B: Items<Item = A::Item>,
  A::Item: PartialEq,
{
  let (a, b) = (a.items(), b.items());
  if a == b {
    Failure::new("collections are equal, should differ")
      .size("len_a", a.len())
      .size("len_b", b.len())
      .report(Reporter::DIRECT);
  }
}
