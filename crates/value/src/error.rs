//! Value tree error types.

use thiserror::Error;

/// Type-erased error raised by a pluggable scalar.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ValueError {
    /// The unsigned slot rejected a magnitude. Displays the scalar's own
    /// message unchanged.
    #[error("{0}")]
    Unsigned(BoxError),
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },
    #[error("cannot use key on {0}")]
    NotAnObject(&'static str),
    #[error("cannot push onto {0}")]
    NotAnArray(&'static str),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ValueError {
    /// Wraps an error coming out of a [`crate::UnsignedNumber`] impl.
    pub fn unsigned<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ValueError::Unsigned(Box::new(err))
    }

    /// Recovers the concrete scalar error, if this is one of type `E`.
    pub fn unsigned_error<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            ValueError::Unsigned(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Signed addition on a plain `u64` numeral left the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value {addend} + {magnitude} is out of range")]
pub struct UnsignedOverflow {
    pub addend: i64,
    pub magnitude: u64,
}
