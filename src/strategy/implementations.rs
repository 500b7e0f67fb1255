// src/strategy/implementations.rs

use crate::model::cost::CostParameters;
use crate::strategy::optimization::optimal_target_state;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use crate::strategy::value_iteration::Solution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =========================================================================
// 1. MDP Policy
// =========================================================================

/// Looks up the order quantity chosen by value iteration.
#[derive(Debug, Clone)]
pub struct MdpPolicy {
    policy: Vec<usize>,
}

impl MdpPolicy {
    pub fn new(policy: Vec<usize>) -> Self {
        Self { policy }
    }

    pub fn from_solution(solution: &Solution) -> Self {
        Self::new(solution.policy.clone())
    }
}

impl OrderPolicy for MdpPolicy {
    fn order_quantity(&mut self, state: usize, context: &OrderContext) -> usize {
        context.clamp(self.policy.get(state).copied().unwrap_or(0))
    }
}

// =========================================================================
// 2. Naive Policy (Pass-Through)
// =========================================================================

/// Orders as many units as the current demand state, ignoring the future.
#[derive(Debug, Clone, Default)]
pub struct NaivePolicy;

impl NaivePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl OrderPolicy for NaivePolicy {
    fn order_quantity(&mut self, state: usize, context: &OrderContext) -> usize {
        context.clamp(state)
    }
}

// =========================================================================
// 3. Constant Policy
// =========================================================================

#[derive(Debug, Clone)]
pub struct ConstantPolicy {
    quantity: usize,
}

impl ConstantPolicy {
    pub fn new(quantity: usize) -> Self {
        Self { quantity }
    }
}

impl OrderPolicy for ConstantPolicy {
    fn order_quantity(&mut self, _state: usize, context: &OrderContext) -> usize {
        context.clamp(self.quantity)
    }
}

// =========================================================================
// 4. Random Policy
// =========================================================================

/// Orders a uniformly random admissible quantity. Seeded for reproducibility.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OrderPolicy for RandomPolicy {
    fn order_quantity(&mut self, _state: usize, context: &OrderContext) -> usize {
        self.rng.gen_range(0..=context.max_order)
    }
}

// =========================================================================
// 5. Base Stock Policy (Order-Up-To)
// =========================================================================

/// Orders enough to lift stock to a target demand state.
///
/// If the current state already meets the target, orders 0.
#[derive(Debug, Clone)]
pub struct BaseStockPolicy {
    target_state: usize,
}

impl BaseStockPolicy {
    pub fn new(target_state: usize) -> Self {
        Self { target_state }
    }

    /// Target chosen as the newsvendor quantile of the steady-state demand.
    pub fn with_optimal_target(steady_state: &[f64], costs: &CostParameters) -> Self {
        Self::new(optimal_target_state(
            steady_state,
            costs.shortage_cost,
            costs.holding_cost,
        ))
    }

    pub fn target_state(&self) -> usize {
        self.target_state
    }
}

impl OrderPolicy for BaseStockPolicy {
    fn order_quantity(&mut self, state: usize, context: &OrderContext) -> usize {
        context.clamp(self.target_state.saturating_sub(state))
    }
}
