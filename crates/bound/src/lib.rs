//! json-scalar-bound - an unsigned JSON scalar that never reaches `i64::MAX`.
//!
//! [`BoundedU64`] fills the unsigned slot of a
//! [`json_scalar_value::Value`] tree. Every numeral such a tree holds, and
//! therefore every numeral it serializes, fits a consumer that only has
//! signed 64-bit integers.
//!
//! ```
//! use json_scalar_bound::{BoundedValue, OutOfBound, SIGNED_MAX};
//!
//! let mut doc = BoundedValue::null();
//! doc.set("in_bound", SIGNED_MAX - 1).unwrap();
//!
//! let err = doc.set("out_of_bound", SIGNED_MAX + 1).unwrap_err();
//! assert_eq!(err.to_string(), "Value 9223372036854775808 out of bound.");
//! assert!(err.unsigned_error::<OutOfBound>().is_some());
//! ```

mod bounded;
mod bridge;
mod error;

pub use bounded::{add_byte, add_signed, BoundedU64, SIGNED_MAX};
pub use bridge::{from_value_node, to_value_node, BoundedTypes, BoundedValue};
pub use error::OutOfBound;
