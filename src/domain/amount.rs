//! Raw token amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw token quantity in the smallest on-chain unit (lamports for SOL,
/// base units for SPL tokens).
///
/// `Amount` carries no decimal interpretation — formatting for display is
/// the caller's concern. Arithmetic is checked and returns `None` rather
/// than panicking; division takes an explicit [`Rounding`] direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an `Amount` from a `u64` on-chain field.
    pub const fn from_u64(value: u64) -> Self {
        Self(value as u128)
    }

    /// Returns the raw `u128` value.
    #[must_use]
    pub const fn get(self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition. `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. `None` on underflow.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. `None` on overflow.
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with an explicit rounding direction.
    /// `None` if `divisor` is zero.
    pub const fn checked_div(self, divisor: Self, rounding: Rounding) -> Option<Self> {
        match crate::math::div_round(self.0, divisor.0, rounding) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
