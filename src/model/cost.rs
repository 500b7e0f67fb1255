// src/model/cost.rs

use crate::simulation::config::ModelConfig;
use serde::{Deserialize, Serialize};

/// Per-unit cost coefficients of the one-period inventory problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    pub order_cost: f64,
    pub holding_cost: f64,
    pub shortage_cost: f64,
}

impl From<&ModelConfig> for CostParameters {
    fn from(config: &ModelConfig) -> Self {
        Self {
            order_cost: config.order_cost,
            holding_cost: config.holding_cost,
            shortage_cost: config.shortage_cost,
        }
    }
}

/// Expected components of one period's cost.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostBreakdown {
    pub inventory: usize,
    pub expected_holding: f64,
    pub expected_shortage: f64,
    pub total: f64,
}

/// Stock after ordering `action` in `state`, capped at the top demand state.
pub fn post_order_inventory(state: usize, action: usize, num_states: usize) -> usize {
    (state + action).min(num_states - 1)
}

impl CostParameters {
    /// Expected cost of ordering `action` in `state` given the next-state row.
    ///
    /// An all-zero row contributes nothing, leaving the pure order cost.
    pub fn expected_cost(&self, state: usize, action: usize, row: &[f64]) -> CostBreakdown {
        let inventory = post_order_inventory(state, action, row.len());

        let mut expected_shortage = 0.0;
        let mut expected_holding = 0.0;
        for (next, &p) in row.iter().enumerate() {
            expected_shortage += p * next.saturating_sub(inventory) as f64;
            expected_holding += p * next.min(inventory) as f64;
        }

        let total = self.order_cost * action as f64
            + self.holding_cost * expected_holding
            + self.shortage_cost * expected_shortage;

        CostBreakdown {
            inventory,
            expected_holding,
            expected_shortage,
            total,
        }
    }

    /// Negated expected cost, so maximising reward minimises cost.
    pub fn reward(&self, state: usize, action: usize, row: &[f64]) -> f64 {
        -self.expected_cost(state, action, row).total
    }

    /// Cost actually incurred when demand turned out to be `next_state`.
    pub fn realized_cost(&self, action: usize, inventory: usize, next_state: usize) -> f64 {
        let shortage = next_state.saturating_sub(inventory) as f64;
        let holding = next_state.min(inventory) as f64;
        self.order_cost * action as f64 + self.holding_cost * holding + self.shortage_cost * shortage
    }
}
