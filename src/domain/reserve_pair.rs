//! Directed reserve pair for constant-product pricing.

use core::fmt;

use crate::error::{Result, TradeError};

/// A directed pair of reserves: the side being paid into and the side
/// being paid out of. Both must be strictly positive — a pool with an
/// empty side cannot quote.
///
/// The pair is a value: applying a trade yields a new pair rather than
/// mutating in place, so a quote and the snapshot it was computed from
/// can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservePair {
    reserve_in: u128,
    reserve_out: u128,
}

impl ReservePair {
    /// Creates a validated reserve pair.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::InvalidReserves`] if either side is zero.
    pub const fn new(reserve_in: u128, reserve_out: u128) -> Result<Self> {
        if reserve_in == 0 || reserve_out == 0 {
            return Err(TradeError::InvalidReserves("reserves must be positive"));
        }
        Ok(Self {
            reserve_in,
            reserve_out,
        })
    }

    /// Returns the input-side reserve.
    #[must_use]
    pub const fn reserve_in(self) -> u128 {
        self.reserve_in
    }

    /// Returns the output-side reserve.
    #[must_use]
    pub const fn reserve_out(self) -> u128 {
        self.reserve_out
    }

    /// Returns the pair after a completed trade: input reserve grows by
    /// `amount_in`, output reserve shrinks by `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`TradeError::CalculationError`] on input-reserve overflow.
    /// - [`TradeError::OutputExceedsReserves`] if the trade would drain
    ///   the output side (the pair would no longer be able to quote).
    pub fn apply(self, amount_in: u128, amount_out: u128) -> Result<Self> {
        let reserve_in = self
            .reserve_in
            .checked_add(amount_in)
            .ok_or(TradeError::CalculationError("reserve_in overflow"))?;
        if amount_out >= self.reserve_out {
            return Err(TradeError::OutputExceedsReserves);
        }
        Ok(Self {
            reserve_in,
            reserve_out: self.reserve_out - amount_out,
        })
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.reserve_in, self.reserve_out)
    }
}
