//! Slippage tolerance validation and bound derivation.

use crate::domain::{Amount, BasisPoints, BoundDirection, Quote, Rounding, TradeBound, MAX_BPS};
use crate::error::{Result, TradeError};

/// Default slippage tolerance: 5%.
pub const DEFAULT_TOLERANCE: BasisPoints = BasisPoints::new(500);

/// Derives execution bounds from quotes under a validated tolerance.
///
/// The tolerance is validated once, at construction — every bound the
/// guard hands out afterwards is known to come from a tolerance in
/// `0..=10_000` bps. The coordinator constructs the guard before
/// fetching any state, so an invalid tolerance fails the trade without
/// a single network call.
///
/// Bounds round against the trader: a minimum-output floor rounds down
/// (the trader accepts slightly less), a maximum-input ceiling also
/// rounds down (the trader pays no more than quoted plus tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlippageGuard {
    tolerance: BasisPoints,
}

impl SlippageGuard {
    /// Creates a guard with the given tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::InvalidTolerance`] if the tolerance exceeds
    /// 10 000 bps.
    pub const fn new(tolerance: BasisPoints) -> Result<Self> {
        if !tolerance.is_valid_percent() {
            return Err(TradeError::InvalidTolerance(tolerance.get()));
        }
        Ok(Self { tolerance })
    }

    /// Creates a guard with the 5% default tolerance.
    #[must_use]
    pub const fn with_default_tolerance() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Returns the validated tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> BasisPoints {
        self.tolerance
    }

    /// Floor on an expected output:
    /// `floor(expected × (10_000 - tolerance) / 10_000)`.
    ///
    /// At full tolerance the floor is zero — the trade accepts any output.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::CalculationError`] on overflow.
    pub fn min_output(&self, expected: Amount) -> Result<TradeBound> {
        let bound = self.scale(expected, MAX_BPS - self.tolerance.get())?;
        Ok(TradeBound::new(
            expected,
            bound,
            self.tolerance,
            BoundDirection::Minimum,
        ))
    }

    /// Ceiling on an expected input:
    /// `floor(expected × (10_000 + tolerance) / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::CalculationError`] on overflow.
    pub fn max_input(&self, expected: Amount) -> Result<TradeBound> {
        let bound = self.scale(expected, MAX_BPS + self.tolerance.get())?;
        Ok(TradeBound::new(
            expected,
            bound,
            self.tolerance,
            BoundDirection::Maximum,
        ))
    }

    /// Derives the bound for a quote: a minimum on its output or a
    /// maximum on its input.
    ///
    /// # Errors
    ///
    /// Returns [`TradeError::CalculationError`] on overflow.
    pub fn bound_for(&self, quote: &Quote, direction: BoundDirection) -> Result<TradeBound> {
        match direction {
            BoundDirection::Minimum => self.min_output(quote.amount_out()),
            BoundDirection::Maximum => self.max_input(quote.amount_in()),
        }
    }

    /// Post-trade deviation of the executed amount from the expected one,
    /// as a signed percentage. Negative means the trader did worse than
    /// quoted. Display metric; `0.0` for a zero expectation.
    #[must_use]
    pub fn deviation_percent(expected: Amount, actual: Amount) -> f64 {
        if expected.is_zero() {
            return 0.0;
        }
        let expected_f = expected.get() as f64;
        let actual_f = actual.get() as f64;
        (actual_f - expected_f) / expected_f * 100.0
    }

    fn scale(&self, amount: Amount, factor_bps: u16) -> Result<Amount> {
        amount
            .checked_mul(Amount::new(u128::from(factor_bps)))
            .and_then(|scaled| {
                scaled.checked_div(Amount::new(u128::from(MAX_BPS)), Rounding::Down)
            })
            .ok_or(TradeError::CalculationError("slippage bound overflow"))
    }
}

impl Default for SlippageGuard {
    fn default() -> Self {
        Self::with_default_tolerance()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn guard(bps: u16) -> SlippageGuard {
        let Ok(guard) = SlippageGuard::new(BasisPoints::new(bps)) else {
            panic!("expected Ok");
        };
        guard
    }

    #[test]
    fn tolerance_validated_at_construction() {
        assert!(SlippageGuard::new(BasisPoints::new(0)).is_ok());
        assert!(SlippageGuard::new(BasisPoints::new(10_000)).is_ok());
        assert!(matches!(
            SlippageGuard::new(BasisPoints::new(10_001)),
            Err(TradeError::InvalidTolerance(10_001))
        ));
    }

    #[test]
    fn default_is_five_percent() {
        assert_eq!(SlippageGuard::default().tolerance(), BasisPoints::new(500));
    }

    #[test]
    fn min_output_floors() {
        let Ok(bound) = guard(500).min_output(Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(bound.bound_amount(), Amount::new(950));
        assert_eq!(bound.direction(), BoundDirection::Minimum);
    }

    #[test]
    fn min_output_rounds_down() {
        // 999 × 9_500 / 10_000 = 949.05, floored.
        let Ok(bound) = guard(500).min_output(Amount::new(999)) else {
            panic!("expected Ok");
        };
        assert_eq!(bound.bound_amount(), Amount::new(949));
    }

    #[test]
    fn max_input_ceilings() {
        let Ok(bound) = guard(500).max_input(Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(bound.bound_amount(), Amount::new(1_050));
        assert_eq!(bound.direction(), BoundDirection::Maximum);
    }

    #[test]
    fn zero_tolerance_is_identity() {
        let g = guard(0);
        let Ok(min) = g.min_output(Amount::new(12_345)) else {
            panic!("expected Ok");
        };
        let Ok(max) = g.max_input(Amount::new(12_345)) else {
            panic!("expected Ok");
        };
        assert_eq!(min.bound_amount(), Amount::new(12_345));
        assert_eq!(max.bound_amount(), Amount::new(12_345));
    }

    #[test]
    fn full_tolerance_floors_to_zero() {
        let Ok(bound) = guard(10_000).min_output(Amount::new(999)) else {
            panic!("expected Ok");
        };
        assert_eq!(bound.bound_amount(), Amount::ZERO);
    }

    #[test]
    fn bound_for_picks_side() {
        let Ok(quote) = Quote::new(
            Amount::new(1_000),
            Amount::new(2_000),
            BasisPoints::new(10),
            2.0,
        ) else {
            panic!("expected Ok");
        };
        let g = guard(100);
        let Ok(min) = g.bound_for(&quote, BoundDirection::Minimum) else {
            panic!("expected Ok");
        };
        let Ok(max) = g.bound_for(&quote, BoundDirection::Maximum) else {
            panic!("expected Ok");
        };
        assert_eq!(min.expected_amount(), Amount::new(2_000));
        assert_eq!(min.bound_amount(), Amount::new(1_980));
        assert_eq!(max.expected_amount(), Amount::new(1_000));
        assert_eq!(max.bound_amount(), Amount::new(1_010));
    }

    #[test]
    fn deviation_signs() {
        let dev = SlippageGuard::deviation_percent(Amount::new(1_000), Amount::new(950));
        assert!((dev + 5.0).abs() < 1e-9);
        let dev = SlippageGuard::deviation_percent(Amount::new(1_000), Amount::new(1_100));
        assert!((dev - 10.0).abs() < 1e-9);
        let dev = SlippageGuard::deviation_percent(Amount::ZERO, Amount::new(1));
        assert!(dev.abs() < f64::EPSILON);
    }
}
