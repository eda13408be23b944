//! Collaborator traits at the network seam.

mod state_source;
mod trade_executor;

pub use state_source::StateSource;
pub use trade_executor::TradeExecutor;
