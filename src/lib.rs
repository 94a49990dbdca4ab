//! Monad Patterns: the monad design pattern through two small containers
//!
//! Every monad here is three things: a wrapping container, a `lift` that puts a
//! plain value into the container, and a `chain` that runs one step of
//! computation inside it while threading the container's extra structure along.
//!
//! # Containers
//!
//! - **Logged**: a value paired with an append-only history of log entries
//! - **Optional**: a value that may be absent, where absence short-circuits
//!   every later step
//!
//! The two containers are independent. Both are immutable values: each `chain`
//! returns a fresh container and never touches the one it was called on.
//!
//! # Example
//!
//! ```rust
//! use monad_patterns::logged::{double, square, Logged};
//! use monad_patterns::optional::{add_forty_two, divide, Optional};
//!
//! let logged = Logged::lift(5).chain(square).chain(double);
//! assert_eq!(*logged.value(), 50);
//! assert_eq!(logged.logs(), ["squared 5", "doubled 25"]);
//!
//! let quotient = Optional::lift(10.0).chain(divide(5.0)).chain(add_forty_two);
//! assert_eq!(quotient, Optional::Present(44.0));
//!
//! let undefined = Optional::lift(10.0).chain(divide(0.0)).chain(add_forty_two);
//! assert!(undefined.is_absent());
//! ```

pub mod logged;
pub mod logging;
pub mod optional;

// Re-export commonly used types
pub use logged::{Logged, LoggedStep};
pub use optional::{AbsentValue, Optional, OptionalStep};
