//! Slippage-derived execution bound.

use core::fmt;

use super::{Amount, BasisPoints};

/// Which way a slippage bound protects the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundDirection {
    /// Floor on the amount received — used when the counter-amount is an
    /// output (tokens from a buy, SOL from a sell).
    Minimum,
    /// Ceiling on the amount paid — used when the counter-amount is an
    /// input the trader must supply.
    Maximum,
}

/// A binding execution constraint derived from a quote and a tolerance.
///
/// Created by [`SlippageGuard`](crate::slippage::SlippageGuard) and
/// consumed exactly once by the coordinator to parameterize the
/// execution request. `bound_amount` is what the on-chain program
/// enforces; `expected_amount` is kept for post-trade deviation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TradeBound {
    expected_amount: Amount,
    bound_amount: Amount,
    tolerance: BasisPoints,
    direction: BoundDirection,
}

impl TradeBound {
    /// Assembles a bound. Only [`SlippageGuard`](crate::slippage::SlippageGuard)
    /// should construct these, after validating the tolerance.
    #[must_use]
    pub(crate) const fn new(
        expected_amount: Amount,
        bound_amount: Amount,
        tolerance: BasisPoints,
        direction: BoundDirection,
    ) -> Self {
        Self {
            expected_amount,
            bound_amount,
            tolerance,
            direction,
        }
    }

    /// Returns the quoted counter-amount the bound was derived from.
    #[must_use]
    pub const fn expected_amount(&self) -> Amount {
        self.expected_amount
    }

    /// Returns the binding minimum or maximum amount.
    #[must_use]
    pub const fn bound_amount(&self) -> Amount {
        self.bound_amount
    }

    /// Returns the tolerance used to derive the bound.
    #[must_use]
    pub const fn tolerance(&self) -> BasisPoints {
        self.tolerance
    }

    /// Returns the bound direction.
    #[must_use]
    pub const fn direction(&self) -> BoundDirection {
        self.direction
    }
}

impl fmt::Display for TradeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.direction {
            BoundDirection::Minimum => "min",
            BoundDirection::Maximum => "max",
        };
        write!(
            f,
            "{kind}={} (expected {}, tolerance {})",
            self.bound_amount, self.expected_amount, self.tolerance
        )
    }
}
