//! The contract a type must satisfy to fill the unsigned slot of a tree.

use std::fmt::Debug;

use crate::error::UnsignedOverflow;

/// Operations the value tree performs on its unsigned numerals.
///
/// Construction and assignment from a raw `u64` are fallible so a type can
/// refuse magnitudes it cannot represent. Every other operation is expected
/// to preserve whatever bound the type enforces, and therefore cannot fail,
/// except [`add_to_i64`](UnsignedNumber::add_to_i64) whose result is
/// narrower than the magnitude range.
///
/// Copies are plain data copies and are never re-validated.
pub trait UnsignedNumber:
    Copy + Default + Debug + PartialEq + PartialEq<u64> + PartialOrd<u64> + Send + Sync + 'static
{
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds a numeral from a raw magnitude.
    fn try_from_u64(value: u64) -> Result<Self, Self::Error>;

    /// Replaces the magnitude in place. On failure `self` is left as it was.
    fn assign_u64(&mut self, value: u64) -> Result<(), Self::Error> {
        *self = Self::try_from_u64(value)?;
        Ok(())
    }

    /// In-place truncating division.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn div_assign_u64(&mut self, divisor: u64);

    /// Truncating division returning a new numeral.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn div_u64(self, divisor: u64) -> Self;

    /// Remainder, widened to a signed integer for digit arithmetic.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    fn rem_u64(self, divisor: u64) -> i64;

    fn to_u64(self) -> u64;

    /// Signed projection. Lossy if the magnitude exceeds `i64::MAX`.
    fn to_intmax(self) -> i64;

    /// Truncating projection for callers that already bounded the value.
    fn to_u16(self) -> u16;

    /// Truncating projection for callers that already bounded the value.
    fn to_u32(self) -> u32;

    /// `(self + x) mod 256`, used to turn a single digit into ASCII.
    fn add_to_byte(self, x: u8) -> u8;

    /// `x + self` as a signed integer, failing if the sum leaves `i64`.
    fn add_to_i64(self, x: i64) -> Result<i64, Self::Error>;
}

impl UnsignedNumber for u64 {
    type Error = UnsignedOverflow;

    #[inline]
    fn try_from_u64(value: u64) -> Result<Self, Self::Error> {
        Ok(value)
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
        (self % divisor) as i64
    }

    #[inline]
    fn to_u64(self) -> u64 {
        self
    }

    #[inline]
    fn to_intmax(self) -> i64 {
        self as i64
    }

    #[inline]
    fn to_u16(self) -> u16 {
        self as u16
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn add_to_byte(self, x: u8) -> u8 {
        (self as u8).wrapping_add(x)
    }

    fn add_to_i64(self, x: i64) -> Result<i64, Self::Error> {
        i64::try_from(i128::from(self) + i128::from(x)).map_err(|_| UnsignedOverflow {
            addend: x,
            magnitude: self,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_u64_accepts_everything() {
        assert_eq!(<u64 as UnsignedNumber>::try_from_u64(u64::MAX), Ok(u64::MAX));
        let mut n = 7u64;
        n.assign_u64(u64::MAX).unwrap();
        assert_eq!(n, u64::MAX);
    }

    #[test]
    fn plain_u64_digit_helpers() {
        assert_eq!(UnsignedNumber::rem_u64(1234u64, 100), 34);
        assert_eq!(UnsignedNumber::div_u64(1234u64, 100), 12);
        assert_eq!(UnsignedNumber::add_to_byte(7u64, b'0'), b'7');
        assert_eq!(UnsignedNumber::add_to_byte(256u64 + 3, b'0'), b'3');
    }

    #[test]
    fn plain_u64_signed_addition() {
        assert_eq!(UnsignedNumber::add_to_i64(10u64, -20), Ok(-10));
        assert_eq!(
            UnsignedNumber::add_to_i64(i64::MAX as u64, 1),
            Err(UnsignedOverflow {
                addend: 1,
                magnitude: i64::MAX as u64
            })
        );
        assert!(UnsignedNumber::add_to_i64(u64::MAX, -1).is_err());
        assert_eq!(UnsignedNumber::add_to_i64(1u64 << 63, -1), Ok(i64::MAX));
        assert_eq!(UnsignedNumber::add_to_i64(u64::MAX, i64::MIN), Ok(i64::MAX));
    }
}
