//! Checks for things that must be true.
//!
//! Each check either returns, sometimes handing back the value it checked, or
//! panics. It never returns an error. Use these where a failed check means a
//! bug, not a condition to recover from.
//!
//! On failure, a check builds a [`Failure`]: a fixed label and the operands
//! involved. The failure is recorded by the installed [`Sink`] ([`LogSink`]
//! unless [`set_sink`] was called), then the check panics with the failure's
//! text. The failure is blamed on the line that called the check, even when
//! the check was reached through one of the wrappers in [`extract`].
//!
//! ```
//! let port = must::nice(8080u16);
//! must::equals("ready", "ready");
//! let hosts = must::have(vec!["a", "b"]);
//! must::contains(&hosts, "b");
//! must::num::gt(port, 1024);
//! ```
//!
//! Checks in [`secret`] report no operands, for values that shouldn't end up in
//! logs.

// checks are often called just to check.
#![allow(clippy::must_use_candidate)]
// operands are taken by value, like `assert_eq!`.
#![allow(clippy::needless_pass_by_value)]

pub mod extract;
pub mod map;
pub mod num;
pub mod secret;
pub mod slice;
pub mod strings;

mod report;


pub use report::{
  set_sink, Depth, Failure, Field, LogSink, Report, Reporter, SetSinkError, Sink, Value,
};
pub use slice::{contains, have, is_in, length};

use std::error::Error;
use std::{fmt, iter};

const IS_ZERO: &str = "value is zero, should be non-zero";
const NOT_ZERO: &str = "value is not zero, should be zero";
const NOT_SAME: &str = "values differ, should be equal";

/// Checks `v` is `true`.
#[track_caller]
pub fn is_true(v: bool) {
  if !v {
    Failure::new("value is false, should be true").bool("v", v).report(Reporter::DIRECT);
  }
}

/// Checks `v` is `false`.
#[track_caller]
pub fn is_false(v: bool) {
  if v {
    Failure::new("value is true, should be false").bool("v", v).report(Reporter::DIRECT);
  }
}

/// Checks at most one of `flags` is `true`. Reports the indices of the first
/// two that are.
#[track_caller]
pub fn exclusive(flags: &[bool]) {
  let mut first = None;
  for (idx, &flag) in flags.iter().enumerate() {
    if !flag {
      continue;
    }
    match first {
      None => first = Some(idx),
      Some(prev) => Failure::new("multiple values are true, should be at most one")
        .size("first", prev)
        .size("second", idx)
        .report(Reporter::DIRECT),
    }
  }
}

/// Checks `res` is not an error.
#[track_caller]
pub fn done<E>(res: Result<(), E>)
where
  E: fmt::Debug,
{
  ok_at(Reporter::DIRECT, res);
}

/// Checks `a` is not the zero value of its type, and returns it.
///
/// ```
/// assert_eq!(must::nice(42), 42);
/// assert_eq!(must::nice("x"), "x");
/// ```
#[track_caller]
pub fn nice<T>(a: T) -> T
where
  T: Default + PartialEq + fmt::Debug,
{
  nice_at(Reporter::DIRECT, a)
}

/// Checks `a` is the zero value of its type.
#[track_caller]
pub fn zero<T>(a: T)
where
  T: Default + PartialEq + fmt::Debug,
{
  if !zero_value::is_zero(&a) {
    Failure::new(NOT_ZERO).debug("a", &a).report(Reporter::DIRECT);
  }
}

/// Checks `a == b`.
#[track_caller]
pub fn equals<T>(a: T, b: T)
where
  T: PartialEq + fmt::Debug,
{
  equals_at(Reporter::DIRECT, a, b);
}

/// Checks `a != b`.
#[track_caller]
pub fn diff<T>(a: T, b: T)
where
  T: PartialEq + fmt::Debug,
{
  if a == b {
    Failure::new("values are equal, should differ")
      .debug("a", &a)
      .debug("b", &b)
      .report(Reporter::DIRECT);
  }
}

/// Checks `a` and `b` are both non-zero and equal, and returns `a`.
#[track_caller]
pub fn sane<T>(a: T, b: T) -> T
where
  T: Default + PartialEq + fmt::Debug,
{
  let a = nice_at(Reporter::WRAPPED, a);
  let b = nice_at(Reporter::WRAPPED, b);
  equals_at(Reporter::WRAPPED, &a, &b);
  a
}

/// Checks `target` is `err` or one of its sources, comparing with `==`.
///
/// ```
/// must::error_is(&std::fmt::Error, &std::fmt::Error);
/// ```
#[track_caller]
pub fn error_is<E>(err: &(dyn Error + 'static), target: &E)
where
  E: Error + PartialEq + 'static,
{
  let mut chain = iter::successors(Some(err), |&e| e.source());
  if !chain.any(|e| e.downcast_ref::<E>() == Some(target)) {
    Failure::new("error mismatch, should be same error")
      .error("err", err)
      .error("target", target)
      .report(Reporter::DIRECT);
  }
}

/// Checks `v` is present, and returns what it holds.
#[track_caller]
pub fn full<T>(v: Option<T>) -> T {
  full_at(Reporter::DIRECT, v)
}

/// Checks `v` is absent.
#[track_caller]
pub fn null<T>(v: &Option<T>) {
  if v.is_some() {
    Failure::new("value present, should be absent").report(Reporter::DIRECT);
  }
}

#[track_caller]
fn ok_at<T, E>(reporter: Reporter, res: Result<T, E>) -> T
where
  E: fmt::Debug,
{
  match res {
    Ok(x) => x,
    Err(e) => Failure::new("has error, should be no error").error("err", &e).report(reporter),
  }
}

#[track_caller]
fn nice_at<T>(reporter: Reporter, a: T) -> T
where
  T: Default + PartialEq + fmt::Debug,
{
  if zero_value::is_zero(&a) {
    Failure::new(IS_ZERO).debug("a", &a).report(reporter);
  }
  a
}

#[track_caller]
fn equals_at<T>(reporter: Reporter, a: T, b: T)
where
  T: PartialEq + fmt::Debug,
{
  if a != b {
    Failure::new(NOT_SAME).debug("a", &a).debug("b", &b).report(reporter);
  }
}

#[track_caller]
fn full_at<T>(reporter: Reporter, v: Option<T>) -> T {
  match v {
    Some(x) => x,
    None => Failure::new("value absent, should be present").report(reporter),
  }
}
