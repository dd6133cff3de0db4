//! Rolling-window technical indicators
//!
//! Each indicator is an independent function over a candle or price series,
//! returning a vector aligned with its input. Positions without sufficient
//! look-back history are None; callers decide how to treat warm-up gaps.

pub mod momentum;
pub mod trend;
pub mod volatility;
