//! Sample optional steps.

use super::container::Optional;

/// Build a step that divides its input by `divisor`.
///
/// The divisor is fixed when the step is built, so one `divide(5.0)` can be
/// reused across chains. Dividing by zero yields `Absent`.
///
/// # Example
///
/// ```rust
/// use monad_patterns::optional::{divide, Optional};
///
/// let halve = divide(2.0);
/// assert_eq!(halve(9.0), Optional::Present(4.5));
/// assert_eq!(halve(0.0), Optional::Present(0.0));
///
/// assert!(divide(0.0)(9.0).is_absent());
/// ```
pub fn divide(divisor: f64) -> impl Fn(f64) -> Optional<f64> {
    move |dividend| {
        if divisor == 0.0 {
            Optional::Absent
        } else {
            Optional::Present(dividend / divisor)
        }
    }
}

/// Add 42. Never absent; `chain` handles absence for it.
pub fn add_forty_two(x: f64) -> Optional<f64> {
    Optional::Present(x + 42.0)
}
