//! Failure records and how they reach the sink.

use drop_bomb::DropBomb;
use log::kv;
use std::fmt;
use std::panic::Location;
use std::sync::OnceLock;

/// The value of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  /// A boolean operand.
  Bool(bool),
  /// A length, count, or index.
  Size(usize),
  /// A text operand.
  Str(String),
  /// Any other operand, rendered with its `Debug` impl.
  Debug(String),
  /// A failure indicator, rendered with its `Debug` impl.
  Error(String),
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Bool(b) => b.fmt(f),
      Value::Size(n) => n.fmt(f),
      Value::Str(s) => write!(f, "{s:?}"),
      Value::Debug(s) | Value::Error(s) => f.write_str(s),
    }
  }
}

/// A named piece of data attached to a [`Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
  /// The name.
  pub key: &'static str,
  /// The data.
  pub value: Value,
}

/// A violated invariant: a fixed label, and the data involved.
///
/// Build one with [`Failure::new`] and the field methods, then hand it to
/// [`Failure::report`]. A `Failure` that is dropped without being reported
/// will panic when dropped.
#[derive(Debug)]
#[must_use = "a Failure does nothing until it is reported"]
pub struct Failure {
  label: &'static str,
  fields: Vec<Field>,
  bomb: DropBomb,
}

impl Failure {
  /// Returns a new `Failure` with no fields.
  pub fn new(label: &'static str) -> Self {
    Self { label, fields: Vec::new(), bomb: DropBomb::new("a Failure must be reported") }
  }

  /// Adds a boolean field.
  pub fn bool(self, key: &'static str, v: bool) -> Self {
    self.with(key, Value::Bool(v))
  }

  /// Adds a length, count, or index.
  pub fn size(self, key: &'static str, n: usize) -> Self {
    self.with(key, Value::Size(n))
  }

  /// Adds a text field.
  pub fn str(self, key: &'static str, s: &str) -> Self {
    self.with(key, Value::Str(s.to_owned()))
  }

  /// Adds a field holding the `Debug` rendering of `v`.
  pub fn debug<T>(self, key: &'static str, v: &T) -> Self
  where
    T: ?Sized + fmt::Debug,
  {
    self.with(key, Value::Debug(format!("{v:?}")))
  }

  /// Adds a field holding a failure indicator.
  pub fn error<E>(self, key: &'static str, e: &E) -> Self
  where
    E: ?Sized + fmt::Debug,
  {
    self.with(key, Value::Error(format!("{e:?}")))
  }

  fn with(mut self, key: &'static str, value: Value) -> Self {
    self.fields.push(Field { key, value });
    self
  }

  /// Returns the label.
  #[must_use]
  pub fn label(&self) -> &'static str {
    self.label
  }

  /// Returns the fields, in the order they were added.
  #[must_use]
  pub fn fields(&self) -> &[Field] {
    &self.fields
  }

  /// Reports this with `reporter`. Does not return.
  #[track_caller]
  pub fn report(self, reporter: Reporter) -> ! {
    reporter.fail(self)
  }
}

impl fmt::Display for Failure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label)?;
    for field in &self.fields {
      write!(f, " {}={}", field.key, field.value)?;
    }
    Ok(())
  }
}

/// How many layers of this library sit between the code being blamed and the
/// reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Depth {
  /// A check called directly.
  Direct,
  /// A check called from one wrapper, like [`crate::sane`] or
  /// [`crate::extract::value`].
  Wrapped,
  /// A check called from two wrappers.
  DoubleWrapped,
}

impl Depth {
  /// Returns the number of library layers above the reporter. Only recorded
  /// and logged as `depth`; the call site itself comes from `#[track_caller]`.
  #[must_use]
  pub fn offset(self) -> u8 {
    match self {
      Depth::Direct => 1,
      Depth::Wrapped => 2,
      Depth::DoubleWrapped => 3,
    }
  }
}

impl fmt::Display for Depth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.offset().fmt(f)
  }
}

/// Reports failures and aborts.
///
/// Every function between the user's call site and [`Reporter::fail`] must be
/// `#[track_caller]`. A function that calls the reporter through `n` such
/// layers uses the reporter for that depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
  depth: Depth,
}

impl Reporter {
  /// For checks called directly by user code.
  pub const DIRECT: Self = Self { depth: Depth::Direct };

  /// For checks called through one wrapper.
  pub const WRAPPED: Self = Self { depth: Depth::Wrapped };

  /// For checks called through two wrappers.
  pub const DOUBLE_WRAPPED: Self = Self { depth: Depth::DoubleWrapped };

  /// Returns the depth.
  #[must_use]
  pub fn depth(self) -> Depth {
    self.depth
  }

  /// Hands `failure` to the sink, attributed to the caller, then panics.
  ///
  /// # Panics
  ///
  /// Always.
  #[track_caller]
  pub fn fail(self, mut failure: Failure) -> ! {
    failure.bomb.defuse();
    let report = Report { failure: &failure, location: Location::caller(), depth: self.depth };
    sink().record(&report);
    panic!("{failure}")
  }
}

/// A failure on its way to the sink.
#[derive(Debug)]
pub struct Report<'a> {
  failure: &'a Failure,
  location: &'static Location<'static>,
  depth: Depth,
}

impl<'a> Report<'a> {
  /// Returns the failure.
  #[must_use]
  pub fn failure(&self) -> &'a Failure {
    self.failure
  }

  /// Returns the failure's label.
  #[must_use]
  pub fn label(&self) -> &'static str {
    self.failure.label
  }

  /// Returns the failure's fields.
  #[must_use]
  pub fn fields(&self) -> &'a [Field] {
    &self.failure.fields
  }

  /// Returns the location the failure is blamed on.
  #[must_use]
  pub fn location(&self) -> &'static Location<'static> {
    self.location
  }

  /// Returns the depth of the reporter.
  #[must_use]
  pub fn depth(&self) -> Depth {
    self.depth
  }
}

impl kv::Source for Report<'_> {
  fn visit<'kvs>(&'kvs self, visitor: &mut dyn kv::VisitSource<'kvs>) -> Result<(), kv::Error> {
    visitor.visit_pair(kv::Key::from_str("depth"), kv::Value::from(self.depth.offset()))?;
    for field in &self.failure.fields {
      let value = match &field.value {
        Value::Bool(b) => kv::Value::from(*b),
        Value::Size(n) => kv::Value::from(*n),
        Value::Str(s) | Value::Debug(s) | Value::Error(s) => kv::Value::from(s.as_str()),
      };
      visitor.visit_pair(kv::Key::from_str(field.key), value)?;
    }
    Ok(())
  }
}

/// Somewhere to record failures.
///
/// The sink only records. The reporter panics after the sink returns, so a
/// sink cannot let a failed check continue.
pub trait Sink: Send + Sync {
  /// Records the report.
  fn record(&self, report: &Report<'_>);
}

/// The default sink. Writes each report to the `log` crate at error level,
/// with target `must` and the fields as key-values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Sink for LogSink {
  fn record(&self, report: &Report<'_>) {
    if log::Level::Error > log::max_level() {
      return;
    }
    log::logger().log(
      &log::Record::builder()
        .level(log::Level::Error)
        .target("must")
        .args(format_args!("{}", report.label()))
        .file(Some(report.location().file()))
        .line(Some(report.location().line()))
        .key_values(report)
        .build(),
    );
  }
}

static SINK: OnceLock<Box<dyn Sink>> = OnceLock::new();
static LOG_SINK: LogSink = LogSink;

/// Sets the sink for all failures in this process.
///
/// If this is never called, failures go to [`LogSink`].
///
/// # Errors
///
/// If a sink was already set.
pub fn set_sink(sink: Box<dyn Sink>) -> Result<(), SetSinkError> {
  SINK.set(sink).map_err(|_| SetSinkError(()))
}

fn sink() -> &'static dyn Sink {
  match SINK.get() {
    Some(x) => x.as_ref(),
    None => &LOG_SINK,
  }
}

/// An error when a sink was already set.
#[derive(Debug)]
pub struct SetSinkError(());

impl fmt::Display for SetSinkError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "a sink was already set")
  }
}

impl std::error::Error for SetSinkError {}
