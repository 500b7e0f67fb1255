// src/model/discretizer.rs

use crate::error::{MdpError, Result};
use tracing::{debug, warn};

/// Bucket edges over `[0, max_observed_demand]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandBins {
    edges: Vec<f64>,
}

/// A demand series mapped onto its buckets, one state per period.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizedDemand {
    pub bins: DemandBins,
    pub states: Vec<usize>,
}

impl DemandBins {
    /// Builds `num_states + 1` linearly spaced edges from 0 to `max_demand`.
    pub fn linear(max_demand: f64, num_states: usize) -> Self {
        let step = max_demand / num_states as f64;
        let mut edges: Vec<f64> = (0..=num_states).map(|i| i as f64 * step).collect();
        // Pin the top edge so the maximum never falls outside the last bin.
        if let Some(last) = edges.last_mut() {
            *last = max_demand;
        }
        Self { edges }
    }

    pub fn num_states(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Demand range `(low, high]` covered by `state`.
    pub fn range(&self, state: usize) -> (f64, f64) {
        (self.edges[state], self.edges[state + 1])
    }

    /// Right-inclusive lookup: the bin whose right edge is the smallest edge >= `value`.
    pub fn state_of(&self, value: f64) -> usize {
        let top = self.num_states().saturating_sub(1);
        if self.edges[self.edges.len() - 1] <= 0.0 {
            return 0;
        }
        let first_at_or_above = self.edges.partition_point(|&edge| edge < value);
        first_at_or_above.saturating_sub(1).min(top)
    }
}

/// Maps raw daily totals onto `num_states` demand states.
///
/// Fails on an empty series or on negative / non-finite observations. A series
/// whose maximum is zero cannot be spread over buckets, so every period lands in
/// state 0.
pub fn discretize(observations: &[f64], num_states: usize) -> Result<DiscretizedDemand> {
    if observations.is_empty() {
        return Err(MdpError::invalid_input("demand series is empty"));
    }
    if num_states == 0 {
        return Err(MdpError::configuration("num_states must be positive"));
    }
    if let Some((period, value)) = observations
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(MdpError::invalid_input(format!(
            "demand at period {period} must be a non-negative real, got {value}"
        )));
    }

    let max_demand = observations.iter().copied().fold(0.0_f64, f64::max);
    let bins = DemandBins::linear(max_demand, num_states);

    if max_demand == 0.0 {
        warn!(
            periods = observations.len(),
            "all observed demand is zero, assigning every period to state 0"
        );
        return Ok(DiscretizedDemand {
            bins,
            states: vec![0; observations.len()],
        });
    }

    let states: Vec<usize> = observations.iter().map(|&v| bins.state_of(v)).collect();
    debug!(max_demand, num_states, periods = states.len(), "discretized demand");

    Ok(DiscretizedDemand { bins, states })
}
