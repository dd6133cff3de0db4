//! External collaborators: market data, account and sentiment providers.

pub mod binance;
pub mod market_data;
pub mod sentiment;
