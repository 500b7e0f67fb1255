// src/strategy/traits.rs

use std::fmt::Debug;

/// Bounds of the decision problem handed to every policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderContext {
    pub num_states: usize,
    pub max_order: usize,
}

impl OrderContext {
    /// Clamps a raw order into the admissible range `[0, max_order]`.
    pub fn clamp(&self, order: usize) -> usize {
        order.min(self.max_order)
    }
}

/// Decision logic for how much to order in a demand state.
///
/// `Send` + `Sync` so several candidate policies can be evaluated side by side.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Order quantity for the current demand `state`, within `[0, context.max_order]`.
    fn order_quantity(&mut self, state: usize, context: &OrderContext) -> usize;
}
