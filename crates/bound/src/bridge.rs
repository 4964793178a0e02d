//! Plugging [`BoundedU64`] into the generic value tree.

use json_scalar_value::{FromValue, ToValue, UnsignedNumber, Value, ValueError, ValueTypes};

use crate::bounded::{add_byte, add_signed, BoundedU64};
use crate::error::OutOfBound;

/// Default scalars everywhere except the unsigned slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundedTypes;

impl ValueTypes for BoundedTypes {
    type Integer = i64;
    type Unsigned = BoundedU64;
    type Float = f64;
    type Str = String;
    type Bool = bool;
}

/// A JSON tree whose unsigned numerals are all below `i64::MAX`.
pub type BoundedValue = Value<BoundedTypes>;

impl UnsignedNumber for BoundedU64 {
    type Error = OutOfBound;

    fn try_from_u64(value: u64) -> Result<Self, OutOfBound> {
        BoundedU64::new(value)
    }

    fn assign_u64(&mut self, value: u64) -> Result<(), OutOfBound> {
        self.assign(value)
    }

    #[inline]
    fn div_assign_u64(&mut self, divisor: u64) {
        *self /= divisor;
    }

    #[inline]
    fn div_u64(self, divisor: u64) -> Self {
        self / divisor
    }

    #[inline]
    fn rem_u64(self, divisor: u64) -> i64 {
        self % divisor
    }

    #[inline]
    fn to_u64(self) -> u64 {
        self.get()
    }

    #[inline]
    fn to_intmax(self) -> i64 {
        BoundedU64::to_intmax(self)
    }

    #[inline]
    fn to_u16(self) -> u16 {
        BoundedU64::to_u16(self)
    }

    #[inline]
    fn to_u32(self) -> u32 {
        BoundedU64::to_u32(self)
    }

    #[inline]
    fn add_to_byte(self, x: u8) -> u8 {
        add_byte(x, self)
    }

    fn add_to_i64(self, x: i64) -> Result<i64, OutOfBound> {
        add_signed(x, self)
    }
}

/// Wraps `scalar` as an unsigned node. Never fails: the scalar is already
/// valid for the slot.
pub fn to_value_node<T>(scalar: BoundedU64) -> Value<T>
where
    T: ValueTypes<Unsigned = BoundedU64>,
{
    Value::Unsigned(scalar)
}

/// Reads an unsigned numeral back out of `node`.
///
/// Unsigned nodes of any tree and non-negative integer nodes are accepted.
/// The magnitude goes through [`BoundedU64::new`], so a numeral that is out
/// of bound yields [`OutOfBound`] wrapped in [`ValueError::Unsigned`].
pub fn from_value_node<T: ValueTypes>(node: &Value<T>) -> Result<BoundedU64, ValueError> {
    let raw = match node {
        Value::Unsigned(n) => n.to_u64(),
        Value::Integer(n) => {
            let n: i64 = (*n).into();
            u64::try_from(n).map_err(|_| ValueError::OutOfRange {
                value: n.to_string(),
                target: "bounded unsigned",
            })?
        }
        other => {
            return Err(ValueError::TypeMismatch {
                expected: "unsigned number",
                found: other.type_name(),
            })
        }
    };
    BoundedU64::new(raw).map_err(ValueError::unsigned)
}

impl<T> ToValue<T> for BoundedU64
where
    T: ValueTypes<Unsigned = BoundedU64>,
{
    fn to_value(self) -> Result<Value<T>, ValueError> {
        Ok(to_value_node(self))
    }
}

impl<T: ValueTypes> FromValue<T> for BoundedU64 {
    fn from_value(value: &Value<T>) -> Result<Self, ValueError> {
        from_value_node(value)
    }
}
