//! Trade execution value types shared with the collaborator layer.

use core::fmt;
use core::time::Duration;

use super::{Address, Quote, TradeBound};

/// Opaque transaction signature returned by the execution collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Wraps a signature string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the signature as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirmation commitment level requested from the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Commitment {
    /// Processed by a leader; may still be dropped.
    Processed,
    /// Confirmed by a cluster majority. The default.
    #[default]
    Confirmed,
    /// Finalized; rollback is no longer possible.
    Finalized,
}

/// Result of polling for confirmation within a timeout.
///
/// `Unconfirmed` means the timeout elapsed without an observation — the
/// trade may still land. It is deliberately distinct from a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
    /// The trade was observed at the requested commitment level.
    Confirmed,
    /// No observation before the timeout elapsed.
    Unconfirmed,
}

/// Which way a bonding-curve trade moves value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeSide {
    /// Spend SOL, receive tokens.
    Buy,
    /// Spend tokens, receive SOL.
    Sell,
}

/// Everything the execution collaborator needs to build and sign one
/// trade transaction. The coordinator assembles an intent from a quote
/// and its bound; the intent is consumed by a single submission and
/// never reused — a failed attempt requires a fresh quote.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeIntent {
    /// Trade against a token's bonding curve.
    Curve {
        /// Token mint being traded.
        mint: Address,
        /// Buy or sell.
        side: TradeSide,
        /// Exact input amount (lamports for a buy, tokens for a sell).
        amount_in: u128,
        /// Slippage bound the program must enforce.
        bound: TradeBound,
    },
    /// Swap against a constant-product pool.
    Pool {
        /// Registry identifier of the pool.
        pool_id: String,
        /// Swap direction relative to the pool's token ordering.
        a_to_b: bool,
        /// Exact input amount.
        amount_in: u128,
        /// Slippage bound the program must enforce.
        bound: TradeBound,
    },
}

/// Timeout and commitment settings for confirmation polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPolicy {
    /// Commitment level to wait for.
    pub commitment: Commitment,
    /// How long to poll before reporting the trade unconfirmed.
    pub timeout: Duration,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            commitment: Commitment::Confirmed,
            timeout: Duration::from_secs(60),
        }
    }
}

/// Successful outcome of one coordinated trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeReceipt {
    /// Signature of the confirmed transaction.
    pub signature: Signature,
    /// The quote the trade was priced from.
    pub quote: Quote,
    /// The bound the execution was constrained by.
    pub bound: TradeBound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_round_trip() {
        let sig = Signature::new("5KtP…");
        assert_eq!(sig.as_str(), "5KtP…");
        assert_eq!(format!("{sig}"), "5KtP…");
    }

    #[test]
    fn default_commitment_is_confirmed() {
        assert_eq!(Commitment::default(), Commitment::Confirmed);
    }

    #[test]
    fn default_confirm_policy() {
        let policy = ConfirmPolicy::default();
        assert_eq!(policy.commitment, Commitment::Confirmed);
        assert_eq!(policy.timeout, Duration::from_secs(60));
    }

    #[test]
    fn confirmation_variants_distinct() {
        assert_ne!(Confirmation::Confirmed, Confirmation::Unconfirmed);
    }
}
