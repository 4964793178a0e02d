//! The bounded unsigned scalar.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, DivAssign, Rem};

use crate::error::OutOfBound;

/// Exclusive upper bound of a [`BoundedU64`]: the largest `i64`.
pub const SIGNED_MAX: u64 = i64::MAX as u64;

/// An unsigned magnitude that always stays strictly below [`SIGNED_MAX`].
///
/// Only construction and assignment from a raw `u64` are checked. Copies
/// are plain copies, and every operator below can only shrink the magnitude,
/// so the invariant cannot be broken afterwards. Signed addition, whose
/// result is narrower than the magnitude range, is checked separately in
/// [`add_signed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedU64(u64);

impl BoundedU64 {
    pub const ZERO: Self = BoundedU64(0);
    pub const MAX: Self = BoundedU64(SIGNED_MAX - 1);

    pub fn new(value: u64) -> Result<Self, OutOfBound> {
        check(value)?;
        Ok(BoundedU64(value))
    }

    /// Replaces the magnitude. A rejected value leaves `self` untouched.
    pub fn assign(&mut self, value: u64) -> Result<(), OutOfBound> {
        check(value)?;
        self.0 = value;
        Ok(())
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Lossless by the bound.
    #[inline]
    pub const fn to_intmax(self) -> i64 {
        self.0 as i64
    }

    /// Truncates; only meaningful once the caller has bounded the value.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        self.0 as u16
    }

    /// Truncates; only meaningful once the caller has bounded the value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0 as u32
    }
}

fn check(value: u64) -> Result<(), OutOfBound> {
    if value >= SIGNED_MAX {
        tracing::debug!(value, bound = SIGNED_MAX, "unsigned magnitude out of bound");
        return Err(OutOfBound::new(value));
    }
    Ok(())
}

/// `(b + x) mod 256`, for turning a digit into an ASCII byte.
#[inline]
pub fn add_byte(x: u8, b: BoundedU64) -> u8 {
    (b.0 as u8).wrapping_add(x)
}

/// `x + b` as an `i64`.
///
/// Fails when `x` is positive and the sum would pass `i64::MAX`. The
/// reported value is that sum, which always fits a `u64`.
pub fn add_signed(x: i64, b: BoundedU64) -> Result<i64, OutOfBound> {
    if x > 0 && SIGNED_MAX - b.0 < x as u64 {
        let sum = b.0 + x as u64;
        tracing::debug!(addend = x, magnitude = b.0, "signed sum out of bound");
        return Err(OutOfBound::new(sum));
    }
    Ok(b.0 as i64 + x)
}

impl TryFrom<u64> for BoundedU64 {
    type Error = OutOfBound;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        BoundedU64::new(value)
    }
}

impl From<BoundedU64> for u64 {
    fn from(b: BoundedU64) -> Self {
        b.0
    }
}

impl From<BoundedU64> for i64 {
    fn from(b: BoundedU64) -> Self {
        b.to_intmax()
    }
}

impl fmt::Display for BoundedU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq<u64> for BoundedU64 {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<BoundedU64> for u64 {
    fn eq(&self, other: &BoundedU64) -> bool {
        *self == other.0
    }
}

impl PartialOrd<u64> for BoundedU64 {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

/// # Panics
///
/// Panics if the divisor is zero.
impl DivAssign<u64> for BoundedU64 {
    fn div_assign(&mut self, divisor: u64) {
        self.0 /= divisor;
    }
}

/// # Panics
///
/// Panics if the divisor is zero.
impl Div<u64> for BoundedU64 {
    type Output = BoundedU64;

    fn div(self, divisor: u64) -> BoundedU64 {
        BoundedU64(self.0 / divisor)
    }
}

/// # Panics
///
/// Panics if the divisor is zero.
impl Rem<u64> for BoundedU64 {
    type Output = i64;

    fn rem(self, divisor: u64) -> i64 {
        (self.0 % divisor) as i64
    }
}

impl Add<BoundedU64> for u8 {
    type Output = u8;

    fn add(self, b: BoundedU64) -> u8 {
        add_byte(self, b)
    }
}
