//! Signal decision types and the structured rule trace

use serde::{Deserialize, Serialize};

/// Directional trade decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Long,
    Short,
    Hold,
}

/// Identifies which rule of the scoring cascade fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    AdxGate,
    NoBollingerPattern,
    LowerBandReclaim,
    UpperBandReclaim,
    TrendConfirmation,
    VolatilityExpansion,
    OversoldConfirmation,
    OverboughtConfirmation,
}

/// One fired rule with its score contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub rule: RuleId,
    pub delta: i32,
    pub description: String,
}

impl TraceEntry {
    pub fn new(rule: RuleId, delta: i32, description: String) -> Self {
        Self {
            rule,
            delta,
            description,
        }
    }
}

/// Full result of one scoring evaluation
///
/// The engine reports the raw triple; whether the score clears the
/// actionability threshold is the caller's policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    pub signal: Signal,
    pub score: i32,
    pub trace: Vec<TraceEntry>,
}

impl SignalReport {
    pub fn new(signal: Signal, score: i32, trace: Vec<TraceEntry>) -> Self {
        Self {
            signal,
            score,
            trace,
        }
    }

    /// Render the trace to text, one line per fired rule
    pub fn explanation(&self) -> String {
        self.trace
            .iter()
            .map(|entry| entry.description.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compare against a caller-supplied score threshold
    pub fn is_actionable(&self, threshold: i32) -> bool {
        self.signal != Signal::Hold && self.score >= threshold
    }
}
