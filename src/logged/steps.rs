//! Sample logged steps.
//!
//! Each step logs the value it was given, not the value it produced:
//! doubling 25 records "doubled 25".
//!
//! Arithmetic wraps on overflow, so every `i64` input yields a value.

use super::container::Logged;

/// Square a number.
///
/// ```rust
/// use monad_patterns::logged::square;
///
/// let squared = square(5);
/// assert_eq!(*squared.value(), 25);
/// assert_eq!(squared.logs(), ["squared 5"]);
/// ```
pub fn square(x: i64) -> Logged<i64> {
    Logged::with_entry(x.wrapping_mul(x), format!("squared {x}"))
}

/// Double a number.
pub fn double(x: i64) -> Logged<i64> {
    Logged::with_entry(x.wrapping_mul(2), format!("doubled {x}"))
}

/// Add one to a number.
pub fn increment(x: i64) -> Logged<i64> {
    Logged::with_entry(x.wrapping_add(1), format!("incremented {x}"))
}
