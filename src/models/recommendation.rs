use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Sell,
    Recycle,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Sell => "sell",
            Action::Recycle => "recycle",
            Action::Hold => "hold",
        };
        f.write_str(label)
    }
}

/// One row of engine output, valued for the whole stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub sell_value: u64,
    pub recycle_value: u64,
    /// sell_value - recycle_value; positive favors selling
    pub margin: i64,
    pub action: Action,
}

/// Tunable policy for the stash optimizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeParams {
    pub quest_aware: bool,
    /// Minimum |margin| required to act on an item
    pub min_profit_threshold: u64,
    /// Accepted but not yet used by the hold set
    pub include_hideout: bool,
    /// Accepted but not yet used by the hold set
    pub include_projects: bool,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            quest_aware: true,
            min_profit_threshold: 0,
            include_hideout: false,
            include_projects: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptimizeResult {
    pub sell: Vec<Recommendation>,
    pub recycle: Vec<Recommendation>,
    pub hold: Vec<Recommendation>,
    pub total_sell_value: u64,
    pub total_recycle_value: u64,
    pub total_hold_count: usize,
}

/// A stash item that produces a target material through recycling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecycleSource {
    pub item_id: String,
    pub name: String,
    /// Units owned across all stash stacks
    pub quantity: u32,
    pub yield_per_unit: u64,
    pub total_yield: u64,
    /// Recycle steps from this item down to the target
    pub depth: usize,
    /// Display names from source to target, both inclusive
    pub chain: Vec<String>,
}
