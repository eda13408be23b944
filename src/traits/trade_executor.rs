//! Write-side collaborator: submitting and confirming trades.

use core::time::Duration;

use async_trait::async_trait;

use crate::domain::{Commitment, Confirmation, Signature, TradeIntent};
use crate::error::Result;

/// Builds, signs, submits, and confirms trade transactions.
///
/// Submission and confirmation are separate calls with distinct failure
/// meanings: a failed `submit` is a trade that never reached the chain,
/// while an `Unconfirmed` result from `confirm` is a trade that may
/// still land. The coordinator never retries either on its own.
#[async_trait]
pub trait TradeExecutor: Send + Sync {
    /// Builds and submits one transaction for the intent.
    ///
    /// # Errors
    ///
    /// `Rejected` if the venue refused the trade; `Network` on transport
    /// failure.
    async fn submit(&self, intent: &TradeIntent) -> Result<Signature>;

    /// Polls for the signature to reach `commitment`, giving up after
    /// `timeout`.
    ///
    /// Returns [`Confirmation::Unconfirmed`] when the timeout elapses
    /// without an observation — implementations must not translate that
    /// into an error themselves.
    ///
    /// # Errors
    ///
    /// `Rejected` if the transaction landed and failed; `Network` on
    /// transport failure.
    async fn confirm(
        &self,
        signature: &Signature,
        commitment: Commitment,
        timeout: Duration,
    ) -> Result<Confirmation>;
}
