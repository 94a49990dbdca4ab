//! The optional container and its chaining operations.

use super::error::AbsentValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Boxed step function for heterogeneous step lists.
pub type OptionalStep<T> = Box<dyn Fn(T) -> Optional<T>>;

/// A value that may be absent.
///
/// `Absent` is absorbing: chaining onto it never runs the step and always
/// yields `Absent` again.
///
/// # Example
///
/// ```rust
/// use monad_patterns::optional::Optional;
///
/// let zero = Optional::lift(0);
/// assert!(zero.is_present());
/// assert_eq!(zero.value(), Some(&0));
///
/// let gone: Optional<i32> = Optional::absent();
/// assert_eq!(gone.chain(|x| Optional::lift(x + 1)), Optional::Absent);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Optional<T> {
    /// A value is held
    Present(T),

    /// No value; every later step is skipped
    Absent,
}

impl<T> Optional<T> {
    /// Wrap a plain value. Always present.
    pub fn lift(value: T) -> Self {
        Self::Present(value)
    }

    /// The absent container.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Run one step on the held value.
    ///
    /// An absent container returns `Absent` without calling `step`. A present
    /// one returns whatever `step` returns, present or absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_patterns::optional::{add_forty_two, divide, Optional};
    ///
    /// let ok = Optional::lift(10.0).chain(divide(5.0)).chain(add_forty_two);
    /// assert_eq!(ok, Optional::Present(44.0));
    ///
    /// let undefined = Optional::lift(10.0).chain(divide(0.0)).chain(add_forty_two);
    /// assert_eq!(undefined, Optional::Absent);
    /// ```
    pub fn chain<U, F>(self, step: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => step(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chain every step in order, left to right.
    ///
    /// Identical to calling [`Optional::chain`] once per step, so steps after
    /// the first absent result are never called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monad_patterns::optional::{add_forty_two, divide, Optional, OptionalStep};
    ///
    /// let steps: Vec<OptionalStep<f64>> = vec![Box::new(divide(0.0)), Box::new(add_forty_two)];
    /// assert!(Optional::lift(10.0).chain_all(steps).is_absent());
    /// ```
    pub fn chain_all<I>(self, steps: I) -> Self
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> Optional<T>,
    {
        let mut skipped = 0usize;
        let result = steps
            .into_iter()
            .enumerate()
            .fold(self, |acc, (index, step)| {
                if acc.is_absent() {
                    skipped += 1;
                } else {
                    trace!(step = index, "chaining optional step");
                }
                acc.chain(step)
            });

        if skipped > 0 {
            debug!(skipped, "optional chain short-circuited");
        }

        result
    }

    /// Transform the held value, if any.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.chain(|value| Optional::Present(f(value)))
    }

    /// Check whether a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Check whether the chain short-circuited.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the held value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Take the held value, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Leave the chain, turning absence into an error.
    ///
    /// ```rust
    /// use monad_patterns::optional::{AbsentValue, Optional};
    ///
    /// assert_eq!(Optional::lift(3).into_result(), Ok(3));
    /// assert_eq!(Optional::<i32>::absent().into_result(), Err(AbsentValue));
    /// ```
    pub fn into_result(self) -> Result<T, AbsentValue> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AbsentValue),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Present({value})"),
            Self::Absent => write!(f, "Absent"),
        }
    }
}
