//! Error raised when a value is demanded from an absent container.

use thiserror::Error;

/// The container held no value.
///
/// Absence is an ordinary outcome inside a chain. It only becomes an error
/// when a caller leaves the chain and insists on a plain value.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("No value present: the chain short-circuited to absent")]
pub struct AbsentValue;
