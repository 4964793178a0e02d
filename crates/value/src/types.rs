//! The scalar substitution point.

use std::fmt::Debug;

use crate::unsigned::UnsignedNumber;

/// Bundle of leaf representations a [`crate::Value`] tree is built from.
///
/// Implementors are zero-sized markers; only the associated types matter.
pub trait ValueTypes: Copy + Debug + PartialEq + Send + Sync + 'static {
    type Integer: Copy + Debug + PartialEq + From<i64> + Into<i64> + Send + Sync;
    type Unsigned: UnsignedNumber;
    type Float: Copy + Debug + PartialEq + From<f64> + Into<f64> + Send + Sync;
    type Str: Clone + Debug + PartialEq + AsRef<str> + From<String> + Send + Sync;
    type Bool: Copy + Debug + PartialEq + From<bool> + Into<bool> + Send + Sync;
}

/// Plain Rust primitives in every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultTypes;

impl ValueTypes for DefaultTypes {
    type Integer = i64;
    type Unsigned = u64;
    type Float = f64;
    type Str = String;
    type Bool = bool;
}
