// src/simulation/engine.rs

use crate::model::cost::{post_order_inventory, CostParameters};
use crate::strategy::traits::{OrderContext, OrderPolicy};
use serde::Serialize;
use tracing::{debug, info};

// Serialize so the history can be written to CSV.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub period: usize,
    pub policy: String,
    pub demand_state: usize,
    pub order_placed: usize,
    pub inventory: usize,
    pub next_demand_state: usize,
    pub holding: usize,
    pub shortage: usize,
    pub cost: f64,
}

/// Replays an observed demand-state sequence under one or more policies.
///
/// In period `t` the policy orders in state `s_t`; the realised cost is
/// charged against the state observed at `t + 1`.
pub struct Backtest {
    costs: CostParameters,
    context: OrderContext,
    states: Vec<usize>,
    pub history: Vec<HistoryRecord>,
}

impl Backtest {
    pub fn new(costs: CostParameters, context: OrderContext, states: Vec<usize>) -> Self {
        Self {
            costs,
            context,
            states,
            history: Vec::new(),
        }
    }

    /// Runs `policy` across the whole sequence, appending to the history.
    pub fn run(&mut self, name: &str, policy: &mut dyn OrderPolicy) -> f64 {
        let mut total = 0.0;
        for (period, pair) in self.states.windows(2).enumerate() {
            let (state, next_state) = (pair[0], pair[1]);
            let order = self.context.clamp(policy.order_quantity(state, &self.context));
            let inventory = post_order_inventory(state, order, self.context.num_states);
            let cost = self.costs.realized_cost(order, inventory, next_state);
            total += cost;

            self.history.push(HistoryRecord {
                period: period + 1,
                policy: name.to_string(),
                demand_state: state,
                order_placed: order,
                inventory,
                next_demand_state: next_state,
                holding: next_state.min(inventory),
                shortage: next_state.saturating_sub(inventory),
                cost,
            });
        }
        debug!(policy = name, total_cost = total, "backtest finished");
        total
    }

    /// Total realised cost recorded for the named policy.
    pub fn total_cost_for_policy(&self, name: &str) -> f64 {
        self.history
            .iter()
            .filter(|record| record.policy == name)
            .map(|record| record.cost)
            .sum()
    }

    /// Total realised cost across every recorded policy.
    pub fn total_cost(&self) -> f64 {
        self.history.iter().map(|record| record.cost).sum()
    }

    /// Per-policy totals in the order policies were run.
    pub fn cost_breakdown(&self) -> Vec<(String, f64)> {
        let mut breakdown: Vec<(String, f64)> = Vec::new();
        for record in &self.history {
            match breakdown.iter_mut().find(|(name, _)| *name == record.policy) {
                Some((_, cost)) => *cost += record.cost,
                None => breakdown.push((record.policy.clone(), record.cost)),
            }
        }
        breakdown
    }
}

/// Backtests each named policy and returns them ranked by total cost, cheapest first.
pub fn compare_policies(
    backtest: &mut Backtest,
    policies: Vec<(String, Box<dyn OrderPolicy>)>,
) -> Vec<(String, f64)> {
    let mut ranking: Vec<(String, f64)> = policies
        .into_iter()
        .map(|(name, mut policy)| {
            let total = backtest.run(&name, policy.as_mut());
            (name, total)
        })
        .collect();
    ranking.sort_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((best, cost)) = ranking.first() {
        info!(policy = %best, total_cost = cost, "cheapest policy on observed demand");
    }
    ranking
}
