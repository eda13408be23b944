//! Basis-point representation for fees and slippage tolerance.

use core::fmt;

use serde::{Deserialize, Serialize};

/// 100% expressed in basis points.
pub const MAX_BPS: u16 = 10_000;

/// A percentage in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for both pool fees and slippage tolerance. Construction is
/// infallible; range validation happens at the point of use
/// ([`SlippageGuard`](crate::slippage::SlippageGuard) rejects tolerances
/// above 10 000 bps before any quote is computed).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a `BasisPoints` from a raw `u16`.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw `u16` value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns `true` if the value is a valid percentage (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Converts to a percentage in `0.0..=100.0`.
    #[must_use]
    pub fn as_percent(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
