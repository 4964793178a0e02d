//! Compact JSON serialization.
//!
//! Unsigned numerals are rendered through the [`UnsignedNumber`] contract
//! alone, so a custom unsigned scalar never has to be widened to `u64` to be
//! printed.

use crate::types::ValueTypes;
use crate::unsigned::UnsignedNumber;
use crate::value::Value;

const DIGIT_PAIRS: &[u8; 200] = b"\
0001020304050607080910111213141516171819\
2021222324252627282930313233343536373839\
4041424344454647484950515253545556575859\
6061626364656667686970717273747576777879\
8081828384858687888990919293949596979899";

/// Serializes `value` without any insignificant whitespace.
pub fn to_string<T: ValueTypes>(value: &Value<T>) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value<T: ValueTypes>(out: &mut String, value: &Value<T>) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if (*b).into() { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&Into::<i64>::into(*n).to_string()),
        Value::Unsigned(n) => write_unsigned(out, *n),
        Value::Float(n) => write_float(out, (*n).into()),
        Value::String(s) => write_str(out, s.as_ref()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

/// Appends the decimal digits of `value`.
pub fn write_unsigned<U: UnsignedNumber>(out: &mut String, value: U) {
    if value == 0u64 {
        out.push('0');
        return;
    }

    // u64::MAX has 20 digits
    let mut buf = [0u8; 20];
    let len = count_digits(value);
    let mut pos = len;
    let mut rest = value;

    while rest >= 100u64 {
        let idx = rest.rem_u64(100) as usize * 2;
        rest.div_assign_u64(100);
        pos -= 2;
        buf[pos] = DIGIT_PAIRS[idx];
        buf[pos + 1] = DIGIT_PAIRS[idx + 1];
    }

    if rest >= 10u64 {
        let idx = rest.to_u32() as usize * 2;
        pos -= 2;
        buf[pos] = DIGIT_PAIRS[idx];
        buf[pos + 1] = DIGIT_PAIRS[idx + 1];
    } else {
        pos -= 1;
        buf[pos] = rest.add_to_byte(b'0');
    }
    debug_assert_eq!(pos, 0);

    out.extend(buf[..len].iter().map(|&b| char::from(b)));
}

fn count_digits<U: UnsignedNumber>(mut x: U) -> usize {
    let mut n = 1;
    loop {
        if x < 10u64 {
            return n;
        }
        if x < 100u64 {
            return n + 1;
        }
        if x < 1000u64 {
            return n + 2;
        }
        if x < 10000u64 {
            return n + 3;
        }
        x = x.div_u64(10000);
        n += 4;
    }
}

fn write_float(out: &mut String, value: f64) {
    match serde_json::Number::from_f64(value) {
        Some(n) => out.push_str(&n.to_string()),
        // NaN and infinities have no JSON spelling
        None => out.push_str("null"),
    }
}

fn write_str(out: &mut String, s: &str) {
    out.push_str(&serde_json::Value::String(s.to_owned()).to_string());
}
