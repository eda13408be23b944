//! Unified error types for the launchcurve library.
//!
//! Every fallible operation across the crate returns [`TradeError`].
//! The variants fall into two families:
//!
//! - **Local faults** — deterministic computation errors (`InvalidAmount`,
//!   `InvalidReserves`, `InvalidTolerance`, `InsufficientOutput`,
//!   `OutputExceedsReserves`, `CalculationError`, `CurveComplete`).
//!   Retrying a pure function with the same input is pointless, so these
//!   are returned immediately and never retried inside the crate.
//! - **Collaborator faults** — failures surfaced by the networking layer
//!   (`NotFound`, `Network`, `Rejected`, `Unconfirmed`). These are
//!   recoverable by a caller-directed retry with a fresh state snapshot.
//!
//! Use [`TradeError::is_local`] to distinguish the two families.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, TradeError>;

/// Error type for all pricing, bounding, and trade coordination operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    /// A trade amount was zero or otherwise unusable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// One or both reserves were zero where a positive reserve is required.
    #[error("invalid reserves: {0}")]
    InvalidReserves(&'static str),

    /// Slippage tolerance outside the `0..=10_000` basis-point range.
    #[error("invalid slippage tolerance: {0} bps (must be 0..=10000)")]
    InvalidTolerance(u16),

    /// The computed output amount rounded to zero.
    #[error("insufficient output amount")]
    InsufficientOutput,

    /// A requested output met or exceeded the available output reserve.
    #[error("output amount exceeds reserves")]
    OutputExceedsReserves,

    /// Intermediate arithmetic overflowed or produced a nonsensical value.
    #[error("calculation error: {0}")]
    CalculationError(&'static str),

    /// The bonding curve has completed; it no longer prices trades.
    #[error("bonding curve is complete")]
    CurveComplete,

    /// A requested account or pool does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A collaborator failed to reach the network.
    #[error("network error: {0}")]
    Network(String),

    /// The execution venue rejected the submitted trade.
    #[error("trade rejected: {0}")]
    Rejected(String),

    /// Confirmation was not observed before the timeout elapsed. The trade
    /// may still land; the signature is retained so the caller can keep
    /// polling. Distinct from [`Rejected`](Self::Rejected).
    #[error("trade unconfirmed after timeout (signature: {signature})")]
    Unconfirmed {
        /// Signature of the submitted, not-yet-confirmed trade.
        signature: String,
    },
}

impl TradeError {
    /// Returns `true` for deterministic local computation faults.
    ///
    /// Local faults are never worth retrying with the same input;
    /// collaborator faults may succeed on retry with a fresh snapshot.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidReserves(_)
                | Self::InvalidTolerance(_)
                | Self::InsufficientOutput
                | Self::OutputExceedsReserves
                | Self::CalculationError(_)
                | Self::CurveComplete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_faults_classified() {
        assert!(TradeError::InvalidAmount("zero").is_local());
        assert!(TradeError::InvalidReserves("zero").is_local());
        assert!(TradeError::InvalidTolerance(10_001).is_local());
        assert!(TradeError::InsufficientOutput.is_local());
        assert!(TradeError::OutputExceedsReserves.is_local());
        assert!(TradeError::CalculationError("overflow").is_local());
        assert!(TradeError::CurveComplete.is_local());
    }

    #[test]
    fn collaborator_faults_classified() {
        assert!(!TradeError::NotFound("curve".into()).is_local());
        assert!(!TradeError::Network("timeout".into()).is_local());
        assert!(!TradeError::Rejected("simulation failed".into()).is_local());
        assert!(!TradeError::Unconfirmed {
            signature: "sig".into()
        }
        .is_local());
    }

    #[test]
    fn display_includes_detail() {
        let err = TradeError::InvalidTolerance(10_001);
        let msg = format!("{err}");
        assert!(msg.contains("10001"));

        let err = TradeError::Unconfirmed {
            signature: "abc123".into(),
        };
        assert!(format!("{err}").contains("abc123"));
    }
}
