// src/strategy/optimization.rs

//! Newsvendor helpers over a discrete demand distribution.

/// Critical ratio (target service level).
///
/// Formula: CR = ShortageCost / (ShortageCost + HoldingCost)
pub fn calculate_critical_ratio(shortage_cost: f64, holding_cost: f64) -> f64 {
    if shortage_cost + holding_cost == 0.0 {
        return 0.0;
    }
    shortage_cost / (shortage_cost + holding_cost)
}

/// Smallest state whose cumulative probability reaches `ratio`.
///
/// Falls back to the top state when rounding keeps the total below `ratio`.
pub fn quantile_state(distribution: &[f64], ratio: f64) -> usize {
    let mut cumulative = 0.0;
    for (state, p) in distribution.iter().enumerate() {
        cumulative += p;
        if cumulative >= ratio {
            return state;
        }
    }
    distribution.len().saturating_sub(1)
}

/// Order-up-to demand state balancing holding against shortage.
pub fn optimal_target_state(distribution: &[f64], shortage_cost: f64, holding_cost: f64) -> usize {
    let critical_ratio = calculate_critical_ratio(shortage_cost, holding_cost);
    quantile_state(distribution, critical_ratio)
}
