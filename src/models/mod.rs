//! Shared data models spanning the engine layers.

pub mod account;
pub mod candle;
pub mod signal;

pub use account::{AccountSnapshot, SentimentIndex};
pub use candle::{Candle, EnrichedCandle};
pub use signal::{RuleId, Signal, SignalReport, TraceEntry};
