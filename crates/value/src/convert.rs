//! Boxing leaf values into a tree and unboxing them back out.
//!
//! Custom scalars plug in by implementing [`ToValue`] and [`FromValue`] for
//! their own type; the tree's `set`, `push` and `get_as` dispatch through
//! these traits.

use crate::error::ValueError;
use crate::types::ValueTypes;
use crate::unsigned::UnsignedNumber;
use crate::value::Value;

/// Conversion into a tree node of a `T`-typed tree.
pub trait ToValue<T: ValueTypes> {
    fn to_value(self) -> Result<Value<T>, ValueError>;
}

/// Conversion out of a tree node of a `T`-typed tree.
pub trait FromValue<T: ValueTypes>: Sized {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError>;
}

fn mismatch<T: ValueTypes>(expected: &'static str, found: &Value<T>) -> ValueError {
    ValueError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

impl<T: ValueTypes> ToValue<T> for Value<T> {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(self)
    }
}

impl<T: ValueTypes> ToValue<T> for u64 {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Value::unsigned(self)
    }
}

impl<T: ValueTypes> ToValue<T> for u32 {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Value::unsigned(u64::from(self))
    }
}

impl<T: ValueTypes> ToValue<T> for i64 {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(Value::Integer(T::Integer::from(self)))
    }
}

impl<T: ValueTypes> ToValue<T> for i32 {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(Value::Integer(T::Integer::from(i64::from(self))))
    }
}

impl<T: ValueTypes> ToValue<T> for f64 {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(Value::Float(T::Float::from(self)))
    }
}

impl<T: ValueTypes> ToValue<T> for bool {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(Value::Bool(T::Bool::from(self)))
    }
}

impl<T: ValueTypes> ToValue<T> for String {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(Value::String(T::Str::from(self)))
    }
}

impl<T: ValueTypes> ToValue<T> for &str {
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(Value::String(T::Str::from(self.to_owned())))
    }
}

/// Reads an integral node as the tree's unsigned numeral, requiring it to be
/// strictly below `ceiling`.
fn unsigned_below<T: ValueTypes>(
    value: &Value<T>,
    ceiling: u64,
    target: &'static str,
) -> Result<T::Unsigned, ValueError> {
    let n = match value {
        Value::Unsigned(n) => *n,
        Value::Integer(n) => {
            let n: i64 = (*n).into();
            let raw = u64::try_from(n).map_err(|_| ValueError::OutOfRange {
                value: n.to_string(),
                target,
            })?;
            T::Unsigned::try_from_u64(raw).map_err(ValueError::unsigned)?
        }
        other => return Err(mismatch("unsigned number", other)),
    };
    if n >= ceiling {
        return Err(ValueError::OutOfRange {
            value: n.to_u64().to_string(),
            target,
        });
    }
    Ok(n)
}

impl<T: ValueTypes> FromValue<T> for u64 {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        match value {
            Value::Unsigned(n) => Ok(n.to_u64()),
            Value::Integer(n) => {
                let n: i64 = (*n).into();
                u64::try_from(n).map_err(|_| ValueError::OutOfRange {
                    value: n.to_string(),
                    target: "u64",
                })
            }
            other => Err(mismatch("unsigned number", other)),
        }
    }
}

impl<T: ValueTypes> FromValue<T> for u32 {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        Ok(unsigned_below(value, u64::from(u32::MAX) + 1, "u32")?.to_u32())
    }
}

impl<T: ValueTypes> FromValue<T> for u16 {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        Ok(unsigned_below(value, u64::from(u16::MAX) + 1, "u16")?.to_u16())
    }
}

impl<T: ValueTypes> FromValue<T> for i64 {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        match value {
            Value::Integer(n) => Ok((*n).into()),
            Value::Unsigned(_) => {
                Ok(unsigned_below(value, i64::MAX as u64 + 1, "i64")?.to_intmax())
            }
            other => Err(mismatch("integer", other)),
        }
    }
}

impl<T: ValueTypes> FromValue<T> for f64 {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        match value {
            Value::Float(n) => Ok((*n).into()),
            Value::Integer(n) => Ok(Into::<i64>::into(*n) as f64),
            Value::Unsigned(n) => Ok(n.to_u64() as f64),
            other => Err(mismatch("number", other)),
        }
    }
}

impl<T: ValueTypes> FromValue<T> for bool {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok((*b).into()),
            other => Err(mismatch("boolean", other)),
        }
    }
}

impl<T: ValueTypes> FromValue<T> for String {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s.as_ref().to_owned()),
            other => Err(mismatch("string", other)),
        }
    }
}

impl<T: ValueTypes> FromValue<T> for Value<T> {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}
