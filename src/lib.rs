//! Bandpulse: Bollinger-band reclaim signal scoring engine
//!
//! Raw candles flow one way through the crate: provider -> enrichment ->
//! scoring. The enrichment table and the scoring cascade are pure functions;
//! everything else is I/O plumbing around them.

pub mod common;
pub mod config;
pub mod core;
pub mod enrichment;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
