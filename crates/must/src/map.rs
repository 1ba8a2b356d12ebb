//! Checks on maps.
//!
//! As with [`crate::slice`], a `None` map counts as an empty one.

use crate::{Failure, Reporter};
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A map from keys to values.
pub trait Entries {
  /// The type of the keys.
  type Key;

  /// The type of the values.
  type Value;

  /// An iterator over the entries.
  type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
  where
    Self: 'a;

  /// Returns the number of entries.
  fn entry_count(&self) -> usize;

  /// Returns the entries, in no particular order.
  fn entries(&self) -> Self::Iter<'_>;

  /// Returns the value for `key`, if any.
  fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;
}

impl<K, V, S> Entries for HashMap<K, V, S>
where
  K: Eq + Hash,
  S: BuildHasher,
{
  type Key = K;

  type Value = V;

  type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

  fn entry_count(&self) -> usize {
    self.len()
  }

  fn entries(&self) -> Self::Iter<'_> {
    self.iter()
  }

  fn lookup(&self, key: &K) -> Option<&V> {
    self.get(key)
  }
}

impl<K, V> Entries for BTreeMap<K, V>
where
  K: Ord,
{
  type Key = K;

  type Value = V;

  type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

  fn entry_count(&self) -> usize {
    self.len()
  }

  fn entries(&self) -> Self::Iter<'_> {
    self.iter()
  }

  fn lookup(&self, key: &K) -> Option<&V> {
    self.get(key)
  }
}

impl<M> Entries for Option<M>
where
  M: Entries,
{
  type Key = M::Key;

  type Value = M::Value;

  type Iter<'a> = std::iter::Flatten<std::option::IntoIter<M::Iter<'a>>> where Self: 'a;

  fn entry_count(&self) -> usize {
    self.as_ref().map_or(0, M::entry_count)
  }

  fn entries(&self) -> Self::Iter<'_> {
    self.as_ref().map(|m| m.entries()).into_iter().flatten()
  }

  fn lookup(&self, key: &M::Key) -> Option<&M::Value> {
    self.as_ref().and_then(|m| m.lookup(key))
  }
}

impl<M> Entries for &M
where
  M: ?Sized + Entries,
{
  type Key = M::Key;

  type Value = M::Value;

  type Iter<'a> = M::Iter<'a> where Self: 'a;

  fn entry_count(&self) -> usize {
    (**self).entry_count()
  }

  fn entries(&self) -> Self::Iter<'_> {
    (**self).entries()
  }

  fn lookup(&self, key: &M::Key) -> Option<&M::Value> {
    (**self).lookup(key)
  }
}

fn same_entries<A, B>(a: &A, b: &B) -> bool
where
  A: Entries,
  B: Entries<Key = A::Key, Value = A::Value>,
  A::Value: PartialEq,
{
  a.entry_count() == b.entry_count() && a.entries().all(|(k, v)| b.lookup(k) == Some(v))
}

/// Checks `a` and `b` have the same entries.
#[track_caller]
pub fn equals<A, B>(a: A, b: B)
where
  A: Entries,
  B: Entries<Key = A::Key, Value = A::Value>,
  A::Value: PartialEq,
{
  if !same_entries(&a, &b) {
    Failure::new("maps differ, should be equal")
      .size("len_a", a.entry_count())
      .size("len_b", b.entry_count())
      .report(Reporter::DIRECT);
  }
}

/// Checks `a` and `b` differ in some entry.
#[track_caller]
pub fn diff<A, B>(a: A, b: B)
where
  A: Entries,
  B: Entries<Key = A::Key, Value = A::Value>,
  A::Value: PartialEq,
{
  if same_entries(&a, &b) {
    Failure::new("maps are equal, should differ")
      .size("len_a", a.entry_count())
      .size("len_b", b.entry_count())
      .report(Reporter::DIRECT);
  }
}

/// Checks `m` has at least one entry, and returns it.
#[track_caller]
pub fn have<M: Entries>(m: M) -> M {
  if m.entry_count() == 0 {
    Failure::new("map is empty, should have entries").report(Reporter::DIRECT);
  }
  m
}

/// Checks `m` has no entries.
#[track_caller]
pub fn none<M: Entries>(m: M) {
  let len = m.entry_count();
  if len != 0 {
    Failure::new("map not empty, should be empty").size("len", len).report(Reporter::DIRECT);
  }
}

/// Checks `m` has exactly `n` entries.
#[track_caller]
pub fn length<M: Entries>(m: M, n: usize) {
  let len = m.entry_count();
  if len != n {
    Failure::new("length mismatch").size("len", len).size("n", n).report(Reporter::DIRECT);
  }
}

/// Returns the value for `key`. Checks there is one.
///
/// ```
/// let mut ports = std::collections::HashMap::new();
/// ports.insert("http", 80);
/// assert_eq!(*must::map::get(&ports, &"http"), 80);
/// ```
#[track_caller]
pub fn get<'m, M>(m: &'m M, key: &M::Key) -> &'m M::Value
where
  M: Entries,
  M::Key: fmt::Debug,
{
  match m.lookup(key) {
    Some(v) => v,
    None => Failure::new("key not in map, should be in").debug("key", key).report(Reporter::DIRECT),
  }
}
