//! Pre-trade quote produced by a pricing engine.

use core::fmt;

use super::{Amount, BasisPoints};
use crate::error::{Result, TradeError};

/// An immutable quote for one prospective trade.
///
/// Produced by a pricing engine from a single reserve snapshot, consumed
/// by [`SlippageGuard`](crate::slippage::SlippageGuard) to derive an
/// execution bound, and then discarded. A quote has no lifecycle of its
/// own — re-quoting always starts from a fresh snapshot.
///
/// `price_impact_bps` and `effective_price` are derived display metrics:
/// the impact is capped at 10 000 bps, but the amounts that gate fund
/// movement are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    amount_in: Amount,
    amount_out: Amount,
    price_impact_bps: BasisPoints,
    effective_price: f64,
}

impl Quote {
    /// Creates a validated quote.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::InvalidAmount`] if either amount is zero —
    /// an engine that computed a zero output must surface
    /// [`TradeError::InsufficientOutput`] instead of building a quote.
    pub fn new(
        amount_in: Amount,
        amount_out: Amount,
        price_impact_bps: BasisPoints,
        effective_price: f64,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(TradeError::InvalidAmount("quote amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(TradeError::InvalidAmount(
                "quote amount_out must be positive",
            ));
        }
        Ok(Self {
            amount_in,
            amount_out,
            price_impact_bps,
            effective_price,
        })
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the expected output amount.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the price impact in basis points, capped at 10 000.
    #[must_use]
    pub const fn price_impact_bps(&self) -> BasisPoints {
        self.price_impact_bps
    }

    /// Returns the effective price `amount_out / amount_in`.
    #[must_use]
    pub const fn effective_price(&self) -> f64 {
        self.effective_price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(in={}, out={}, impact={})",
            self.amount_in, self.amount_out, self.price_impact_bps
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_quote() {
        let Ok(q) = Quote::new(
            Amount::new(1_000),
            Amount::new(1_990),
            BasisPoints::new(20),
            1.99,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q.amount_in(), Amount::new(1_000));
        assert_eq!(q.amount_out(), Amount::new(1_990));
        assert_eq!(q.price_impact_bps(), BasisPoints::new(20));
        assert!((q.effective_price() - 1.99).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_amount_in_rejected() {
        let result = Quote::new(Amount::ZERO, Amount::new(1), BasisPoints::ZERO, 0.0);
        assert!(matches!(result, Err(TradeError::InvalidAmount(_))));
    }

    #[test]
    fn zero_amount_out_rejected() {
        let result = Quote::new(Amount::new(1), Amount::ZERO, BasisPoints::ZERO, 0.0);
        assert!(matches!(result, Err(TradeError::InvalidAmount(_))));
    }

    #[test]
    fn display_mentions_amounts() {
        let Ok(q) = Quote::new(Amount::new(5), Amount::new(9), BasisPoints::new(1), 1.8) else {
            panic!("expected Ok");
        };
        let s = format!("{q}");
        assert!(s.contains('5'));
        assert!(s.contains('9'));
    }
}
