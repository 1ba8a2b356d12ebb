//! Checks on text.

use crate::{Failure, Reporter};

/// Checks `s` is exactly `n` bytes long.
#[track_caller]
pub fn length(s: &str, n: usize) {
  if s.len() != n {
    Failure::new("length mismatch").size("len", s.len()).size("n", n).report(Reporter::DIRECT);
  }
}

/// Checks `s` starts with `prefix`.
#[track_caller]
pub fn has_prefix(s: &str, prefix: &str) {
  if !s.starts_with(prefix) {
    fail("string missing prefix, should have prefix", s, "prefix", prefix);
  }
}

/// Checks `s` ends with `suffix`.
#[track_caller]
pub fn has_suffix(s: &str, suffix: &str) {
  if !s.ends_with(suffix) {
    fail("string missing suffix, should have suffix", s, "suffix", suffix);
  }
}

/// Checks `s` does not start with `prefix`.
#[track_caller]
pub fn not_has_prefix(s: &str, prefix: &str) {
  if s.starts_with(prefix) {
    fail("string has prefix, should not have prefix", s, "prefix", prefix);
  }
}

/// Checks `s` does not end with `suffix`.
#[track_caller]
pub fn not_has_suffix(s: &str, suffix: &str) {
  if s.ends_with(suffix) {
    fail("string has suffix, should not have suffix", s, "suffix", suffix);
  }
}

/// Checks `sub` occurs in `s`.
#[track_caller]
pub fn contains(s: &str, sub: &str) {
  if !s.contains(sub) {
    fail("string missing substring, should have substring", s, "substring", sub);
  }
}

/// Checks `sub` does not occur in `s`.
#[track_caller]
pub fn not_contains(s: &str, sub: &str) {
  if s.contains(sub) {
    fail("string has substring, should not have substring", s, "substring", sub);
  }
}

#[track_caller]
fn fail(label: &'static str, s: &str, key: &'static str, pattern: &str) -> ! {
  Failure::new(label).str("string", s).str(key, pattern).report(Reporter::DIRECT)
}
