//! Core domain types: validated newtypes and point-in-time snapshots.
//!
//! Everything here is a value. Snapshots are fetched fresh per trade and
//! never mutated in place; derived quantities are recomputed on demand.

mod address;
mod amount;
mod basis_points;
mod curve_state;
mod pool_state;
mod quote;
mod reserve_pair;
mod rounding;
mod trade;
mod trade_bound;

pub use address::Address;
pub use amount::Amount;
pub use basis_points::{BasisPoints, MAX_BPS};
pub use curve_state::CurveState;
pub use pool_state::PoolState;
pub use quote::Quote;
pub use reserve_pair::ReservePair;
pub use rounding::Rounding;
pub use trade::{
    Commitment, Confirmation, ConfirmPolicy, Signature, TradeIntent, TradeReceipt, TradeSide,
};
pub use trade_bound::{BoundDirection, TradeBound};
