//! The logged container and its chaining operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Boxed step function for heterogeneous step lists.
///
/// Plain `fn` items and closures can be chained directly; boxing is only
/// needed when different closures share one list.
pub type LoggedStep<T> = Box<dyn Fn(T) -> Logged<T>>;

/// A value paired with the ordered log of operations applied to it.
///
/// Containers are immutable - `chain` consumes the container and returns
/// a new one whose log is the prior log followed by the step's entries.
///
/// # Example
///
/// ```rust
/// use monad_patterns::logged::Logged;
///
/// let start = Logged::lift(3);
/// assert_eq!(*start.value(), 3);
/// assert!(start.logs().is_empty());
///
/// let next = start.chain(|x| Logged::with_entry(x + 1, format!("incremented {x}")));
/// assert_eq!(*next.value(), 4);
/// assert_eq!(next.logs(), ["incremented 3"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logged<T> {
    value: T,
    logs: Vec<String>,
}

impl<T> Logged<T> {
    /// Wrap a plain value with an empty log.
    pub fn lift(value: T) -> Self {
        Self {
            value,
            logs: Vec::new(),
        }
    }

    /// Build a container that already carries log entries.
    ///
    /// Step functions use this (or [`Logged::with_entry`]) to describe
    /// what they did.
    pub fn new(value: T, logs: Vec<String>) -> Self {
        Self { value, logs }
    }

    /// Build a container carrying a single log entry.
    pub fn with_entry(value: T, entry: impl Into<String>) -> Self {
        Self {
            value,
            logs: vec![entry.into()],
        }
    }

    /// Run one step on the held value, returning a new container.
    ///
    /// The result holds the step's value. Its log is this container's log
    /// followed by the step's log, in that order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_patterns::logged::{double, square, Logged};
    ///
    /// let result = Logged::lift(5).chain(square).chain(double);
    /// assert_eq!(*result.value(), 50);
    /// assert_eq!(result.logs(), ["squared 5", "doubled 25"]);
    /// ```
    pub fn chain<U, F>(self, step: F) -> Logged<U>
    where
        F: FnOnce(T) -> Logged<U>,
    {
        let Logged { value, mut logs } = self;
        let next = step(value);
        logs.extend(next.logs);
        Logged {
            value: next.value,
            logs,
        }
    }

    /// Chain every step in order, left to right.
    ///
    /// Identical to calling [`Logged::chain`] once per step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_patterns::logged::{double, square, Logged, LoggedStep};
    ///
    /// let steps: Vec<LoggedStep<i64>> = vec![Box::new(square), Box::new(double)];
    /// let folded = Logged::lift(5).chain_all(steps);
    ///
    /// assert_eq!(folded, Logged::lift(5).chain(square).chain(double));
    /// ```
    pub fn chain_all<I>(self, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> Logged<T>,
    {
        steps
            .into_iter()
            .enumerate()
            .fold(self, |acc, (index, step)| {
                trace!(step = index, entries = acc.logs.len(), "chaining logged step");
                acc.chain(step)
            })
    }

    /// Transform the held value without touching the log.
    pub fn map<U, F>(self, f: F) -> Logged<U>
    where
        F: FnOnce(T) -> U,
    {
        Logged {
            value: f(self.value),
            logs: self.logs,
        }
    }

    /// Append one entry to the log, keeping the value.
    pub fn tell(mut self, entry: impl Into<String>) -> Self {
        self.logs.push(entry.into());
        self
    }

    /// Get the held value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get the log entries in the order they were recorded.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Split the container into its value and log.
    pub fn into_parts(self) -> (T, Vec<String>) {
        (self.value, self.logs)
    }
}

impl<T> Logged<Logged<T>> {
    /// Collapse a nested container into one layer, outer entries first.
    pub fn flatten(self) -> Logged<T> {
        self.chain(|inner| inner)
    }
}

impl<T: fmt::Display> fmt::Display for Logged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value = {}, logs = [{}]", self.value, self.logs.join(", "))
    }
}
