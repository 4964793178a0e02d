//! Bound violation error.

use thiserror::Error;

/// A magnitude reached or crossed [`crate::SIGNED_MAX`].
///
/// `value` is the rejected magnitude, or for signed addition the sum that
/// would have been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Value {value} out of bound.")]
pub struct OutOfBound {
    value: u64,
}

impl OutOfBound {
    pub(crate) fn new(value: u64) -> Self {
        OutOfBound { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}
