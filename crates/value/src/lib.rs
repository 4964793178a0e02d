//! json-scalar-value - generic JSON value tree with pluggable scalars.
//!
//! The tree is parameterized by a [`ValueTypes`] bundle that names the
//! integer, unsigned, floating, string and boolean representations stored in
//! its leaves. The unsigned slot is the interesting one: any type satisfying
//! the [`UnsignedNumber`] contract can be plugged in, including types that
//! refuse magnitudes above some bound.
//!
//! # Overview
//!
//! - [`Value`] - the tree itself
//! - [`ValueTypes`] / [`DefaultTypes`] - the scalar substitution point
//! - [`UnsignedNumber`] - what a custom unsigned scalar must provide
//! - [`ToValue`] / [`FromValue`] - boxing and unboxing of leaf values
//! - [`to_string`], [`from_str`], [`from_json`], [`to_json`] - text and
//!   `serde_json` bridges
//!
//! # Example
//!
//! ```
//! use json_scalar_value::{DefaultTypes, Value};
//!
//! let mut doc = Value::<DefaultTypes>::null();
//! doc.set("answer", 42u64).unwrap();
//! assert_eq!(doc.to_string(), r#"{"answer":42}"#);
//! ```

mod convert;
mod error;
mod json;
mod ser;
mod types;
mod unsigned;
mod value;

pub use convert::{FromValue, ToValue};
pub use error::{BoxError, UnsignedOverflow, ValueError};
pub use json::{from_json, from_str, to_json};
pub use ser::{to_string, write_unsigned};
pub use types::{DefaultTypes, ValueTypes};
pub use unsigned::UnsignedNumber;
pub use value::Value;
