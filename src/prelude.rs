//! Convenience re-exports for downstream users.

pub use crate::amm::{AmmEngine, PoolRegistry, Route, MINIMUM_LIQUIDITY};
pub use crate::config::{ConfigCache, GlobalConfig};
pub use crate::coordinator::TradeCoordinator;
pub use crate::curve::BondingCurveEngine;
pub use crate::domain::{
    Address, Amount, BasisPoints, BoundDirection, Commitment, Confirmation, ConfirmPolicy,
    CurveState, PoolState, Quote, ReservePair, Rounding, Signature, TradeBound, TradeIntent,
    TradeReceipt, TradeSide, MAX_BPS,
};
pub use crate::error::{Result, TradeError};
pub use crate::events::{
    CompleteEvent, CreateEvent, EventClassifier, ProtocolEvent, TradeEvent,
};
pub use crate::slippage::{SlippageGuard, DEFAULT_TOLERANCE};
pub use crate::traits::{StateSource, TradeExecutor};
