// src/model/transition.rs

use crate::error::{MdpError, Result};
use tracing::warn;

/// Empirical one-period transition probabilities between demand states.
///
/// Each row sums to 1.0 when the source state was followed by at least one
/// observation. Rows of unobserved states stay all zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    rows: Vec<Vec<f64>>,
}

impl TransitionMatrix {
    /// Counts consecutive `(s_t, s_t+1)` pairs and normalises each row.
    pub fn estimate(states: &[usize], num_states: usize) -> Result<Self> {
        if let Some(&bad) = states.iter().find(|&&s| s >= num_states) {
            return Err(MdpError::invalid_input(format!(
                "state {bad} is outside [0, {}]",
                num_states.saturating_sub(1)
            )));
        }

        let mut counts = vec![vec![0.0_f64; num_states]; num_states];
        for pair in states.windows(2) {
            counts[pair[0]][pair[1]] += 1.0;
        }

        for (state, row) in counts.iter_mut().enumerate() {
            let total: f64 = row.iter().sum();
            if total == 0.0 {
                warn!(state, "no outgoing transitions observed, row left at zero");
                continue;
            }
            for p in row.iter_mut() {
                *p /= total;
            }
        }

        Ok(Self { rows: counts })
    }

    /// Wraps explicit rows. Each row must be all zero or sum to one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(MdpError::invalid_input("transition matrix is empty"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(MdpError::invalid_input(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if row.iter().any(|p| !p.is_finite() || *p < 0.0) {
                return Err(MdpError::invalid_input(format!(
                    "row {i} holds a negative or non-finite probability"
                )));
            }
            let sum: f64 = row.iter().sum();
            if sum != 0.0 && (sum - 1.0).abs() > 1e-9 {
                return Err(MdpError::invalid_input(format!(
                    "row {i} sums to {sum}, expected 1 or 0"
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn num_states(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, state: usize) -> &[f64] {
        &self.rows[state]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// True when no transition out of `state` was observed.
    pub fn is_unobserved(&self, state: usize) -> bool {
        self.rows[state].iter().all(|&p| p == 0.0)
    }

    /// `Σ_s' P[state][s'] * values[s']`. Zero for an unobserved row.
    pub fn expectation(&self, state: usize, values: &[f64]) -> f64 {
        self.rows[state]
            .iter()
            .zip(values)
            .map(|(p, v)| p * v)
            .sum()
    }

    /// Steady-state distribution by power iteration from the uniform start.
    ///
    /// Iterates the lazy chain `(I + P) / 2`, which shares the steady state of
    /// `P` but settles on periodic chains too. Probability mass that flows into
    /// unobserved rows is dropped and the rest renormalised each step.
    /// Returns `None` if all mass vanishes or the iteration does not settle
    /// within `max_iter` steps.
    pub fn stationary(&self, max_iter: usize, tol: f64) -> Option<Vec<f64>> {
        let n = self.num_states();
        let mut dist = vec![1.0 / n as f64; n];

        for _ in 0..max_iter {
            let mut next = vec![0.0; n];
            for (i, row) in self.rows.iter().enumerate() {
                if self.is_unobserved(i) {
                    continue;
                }
                next[i] += 0.5 * dist[i];
                for (j, p) in row.iter().enumerate() {
                    next[j] += 0.5 * dist[i] * p;
                }
            }

            let mass: f64 = next.iter().sum();
            if mass <= 0.0 {
                return None;
            }
            next.iter_mut().for_each(|p| *p /= mass);

            let diff: f64 = dist.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            dist = next;
            if diff < tol {
                return Some(dist);
            }
        }

        None
    }
}
