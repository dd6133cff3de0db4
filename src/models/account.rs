//! Read-only account and sentiment data supplied by external providers
//!
//! Consumed for display only; none of these fields participate in scoring.

use serde::{Deserialize, Serialize};

/// Snapshot of balance, position and unrealized PnL for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub total_balance: f64,
    pub position_amt: f64,
    pub entry_price: f64,
    pub unrealized_pnl: f64,
    pub pnl_percent: f64,
}

impl AccountSnapshot {
    /// Snapshot with no open position
    pub fn flat(total_balance: f64) -> Self {
        Self {
            total_balance,
            position_amt: 0.0,
            entry_price: 0.0,
            unrealized_pnl: 0.0,
            pnl_percent: 0.0,
        }
    }

    pub fn with_position(
        total_balance: f64,
        position_amt: f64,
        entry_price: f64,
        unrealized_pnl: f64,
    ) -> Self {
        let pnl_percent = if entry_price > 0.0 && position_amt != 0.0 {
            (unrealized_pnl / (entry_price * position_amt.abs())) * 100.0
        } else {
            0.0
        };
        Self {
            total_balance,
            position_amt,
            entry_price,
            unrealized_pnl,
            pnl_percent,
        }
    }
}

/// Auxiliary market sentiment index (informational only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentIndex {
    pub value: i64,
    pub classification: String,
}
