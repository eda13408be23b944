//! Read-side collaborator: fetching chain state.

use async_trait::async_trait;

use crate::config::GlobalConfig;
use crate::domain::{Address, CurveState, PoolState};
use crate::error::Result;

/// Source of on-chain state snapshots.
///
/// The coordinator fetches exactly one snapshot per trade through this
/// trait and prices everything from it. Implementations are expected to
/// return the freshest state they can; they must not fabricate a
/// snapshot when the account is missing — that is
/// [`TradeError::NotFound`](crate::error::TradeError::NotFound).
#[async_trait]
pub trait StateSource: Send + Sync {
    /// Fetches the bonding-curve account for `mint`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no curve exists for the mint; `Network` on transport
    /// failure.
    async fn fetch_curve_state(&self, mint: &Address) -> Result<CurveState>;

    /// Fetches a pool snapshot by registry id.
    ///
    /// # Errors
    ///
    /// `NotFound` if the pool does not exist; `Network` on transport
    /// failure.
    async fn fetch_pool_state(&self, pool_id: &str) -> Result<PoolState>;

    /// Fetches the protocol's global configuration account.
    ///
    /// The coordinator asks before every curve trade; implementations
    /// that want to avoid the round trip may serve this from a
    /// short-lived cache such as
    /// [`ConfigCache`](crate::config::ConfigCache).
    ///
    /// # Errors
    ///
    /// `NotFound` if the account is missing; `Network` on transport
    /// failure.
    async fn fetch_global_config(&self) -> Result<GlobalConfig>;
}
