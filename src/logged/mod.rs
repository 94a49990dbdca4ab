//! Logged values.
//!
//! A `Logged<T>` carries a value together with an ordered history of
//! human-readable entries describing what was done to it:
//! - `lift` starts a computation with an empty history
//! - `chain` runs a step and appends the step's entries after the prior ones
//! - `chain_all` folds `chain` over an ordered list of steps
//!
//! Entries are only ever appended. Nothing reorders or edits them.

mod container;
mod steps;

pub use container::{Logged, LoggedStep};
pub use steps::{double, increment, square};
