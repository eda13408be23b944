//! Protocol configuration and its refresh policy.

mod cache;
mod global_config;

pub use cache::ConfigCache;
pub use global_config::GlobalConfig;
