// src/strategy/value_iteration.rs

use crate::model::mdp::MdpModel;
use crate::simulation::config::SolverSettings;
use tracing::{info, trace, warn};

/// Output of value iteration. Holds no reference back to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Discounted reward-to-go per state (negative cost).
    pub values: Vec<f64>,
    /// Optimal order quantity per state.
    pub policy: Vec<usize>,
    pub iterations: usize,
    /// False when `max_iter` was reached before the tolerance.
    pub converged: bool,
}

/// Greedy action and its Q-value in `state` against `values`.
///
/// Ties go to the lowest order quantity.
pub fn best_action(model: &MdpModel, state: usize, values: &[f64]) -> (usize, f64) {
    let continuation = model.gamma() * model.transitions().expectation(state, values);
    let mut best = (0, model.reward(state, 0) + continuation);
    for action in 1..model.num_actions() {
        let q = model.reward(state, action) + continuation;
        if q > best.1 {
            best = (action, q);
        }
    }
    best
}

/// Solves the model by synchronous value iteration.
///
/// Every sweep reads only the previous sweep's values. Iteration stops once
/// the largest per-state change drops below `tol`, or after `max_iter` sweeps.
/// On convergence the values of the last accepted sweep are returned, while
/// the policy is the greedy choice of the final sweep.
pub fn solve(model: &MdpModel, settings: &SolverSettings) -> Solution {
    let n = model.num_states();
    let mut values = vec![0.0; n];
    let mut policy = vec![0; n];
    let mut iterations = 0;
    let mut converged = false;
    let mut delta = f64::INFINITY;

    while iterations < settings.max_iter {
        iterations += 1;

        let mut next = vec![0.0; n];
        for state in 0..n {
            let (action, q) = best_action(model, state, &values);
            next[state] = q;
            policy[state] = action;
        }

        delta = values
            .iter()
            .zip(&next)
            .map(|(old, new)| (new - old).abs())
            .fold(0.0_f64, f64::max);
        trace!(iteration = iterations, delta, "value iteration sweep");

        if delta < settings.tol {
            converged = true;
            break;
        }
        values = next;
    }

    if converged {
        info!(iterations, delta, "value iteration converged");
    } else {
        warn!(
            iterations,
            delta,
            tol = settings.tol,
            "value iteration stopped at the iteration cap"
        );
    }

    Solution {
        values,
        policy,
        iterations,
        converged,
    }
}
