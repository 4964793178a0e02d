//! The generic JSON value tree.

use std::fmt;

use indexmap::IndexMap;

use crate::convert::{FromValue, ToValue};
use crate::error::ValueError;
use crate::ser;
use crate::types::ValueTypes;
use crate::unsigned::UnsignedNumber;

/// A JSON value whose leaf representations are chosen by `T`.
///
/// Object members keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T: ValueTypes> {
    Null,
    Bool(T::Bool),
    Integer(T::Integer),
    Unsigned(T::Unsigned),
    Float(T::Float),
    String(T::Str),
    Array(Vec<Value<T>>),
    Object(IndexMap<String, Value<T>>),
}

impl<T: ValueTypes> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T: ValueTypes> Value<T> {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn object() -> Self {
        Value::Object(IndexMap::new())
    }

    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Builds an unsigned node, letting the unsigned slot validate `value`.
    pub fn unsigned(value: u64) -> Result<Self, ValueError> {
        T::Unsigned::try_from_u64(value)
            .map(Value::Unsigned)
            .map_err(ValueError::unsigned)
    }

    /// Boxes any convertible leaf or subtree.
    pub fn new<V: ToValue<T>>(value: V) -> Result<Self, ValueError> {
        value.to_value()
    }

    /// Type name as it appears in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::Unsigned(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_unsigned(&self) -> Option<T::Unsigned> {
        match self {
            Value::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    /// Number of members or elements. Scalars count as zero, like `null`.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<&Value<T>> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<T>> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    pub fn at(&self, index: usize) -> Option<&Value<T>> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Unboxes this node into `S`.
    pub fn get_as<S: FromValue<T>>(&self) -> Result<S, ValueError> {
        S::from_value(self)
    }

    /// Stores `value` under `key`.
    ///
    /// A `null` receiver becomes an empty object first. The value is
    /// converted before anything is touched, so a rejected value leaves the
    /// tree exactly as it was.
    pub fn set<V: ToValue<T>>(
        &mut self,
        key: impl Into<String>,
        value: V,
    ) -> Result<(), ValueError> {
        let value = value.to_value()?;
        if self.is_null() {
            *self = Value::object();
        }
        match self {
            Value::Object(map) => {
                map.insert(key.into(), value);
                Ok(())
            }
            other => Err(ValueError::NotAnObject(other.type_name())),
        }
    }

    /// Appends `value`. A `null` receiver becomes an empty array first.
    pub fn push<V: ToValue<T>>(&mut self, value: V) -> Result<(), ValueError> {
        let value = value.to_value()?;
        if self.is_null() {
            *self = Value::array();
        }
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(ValueError::NotAnArray(other.type_name())),
        }
    }

    /// Overwrites this node with an unsigned numeral.
    ///
    /// An existing unsigned node is assigned in place through the slot's
    /// own assignment; any other node is replaced only once the new numeral
    /// has been validated.
    pub fn assign_unsigned(&mut self, value: u64) -> Result<(), ValueError> {
        match self {
            Value::Unsigned(n) => n.assign_u64(value).map_err(ValueError::unsigned),
            other => {
                *other = Value::unsigned(value)?;
                Ok(())
            }
        }
    }

    /// Signed sum of this integral node and `x`.
    pub fn checked_add(&self, x: i64) -> Result<i64, ValueError> {
        match self {
            Value::Integer(n) => {
                let n: i64 = (*n).into();
                n.checked_add(x).ok_or_else(|| ValueError::OutOfRange {
                    value: format!("{n} + {x}"),
                    target: "i64",
                })
            }
            Value::Unsigned(n) => n.add_to_i64(x).map_err(|err| {
                tracing::debug!(addend = x, magnitude = n.to_u64(), %err, "signed addition rejected");
                ValueError::unsigned(err)
            }),
            other => Err(ValueError::TypeMismatch {
                expected: "integer",
                found: other.type_name(),
            }),
        }
    }
}

impl<T: ValueTypes> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ser::to_string(self))
    }
}
