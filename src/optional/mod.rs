//! Optional values with short-circuiting absence.
//!
//! An `Optional<T>` is either `Present(T)` or `Absent`. Absence is its own
//! variant, so zero, empty strings and `false` are ordinary payloads.
//!
//! Once a chain reaches `Absent` it stays absent: `chain` skips every later
//! step without calling it. Steps therefore never check for absence
//! themselves.

mod container;
mod error;
mod steps;

pub use container::{Optional, OptionalStep};
pub use error::AbsentValue;
pub use steps::{add_forty_two, divide};
