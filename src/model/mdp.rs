// src/model/mdp.rs

use crate::error::{MdpError, Result};
use crate::model::cost::CostParameters;
use crate::model::discretizer::{discretize, DiscretizedDemand};
use crate::model::transition::TransitionMatrix;
use crate::simulation::config::ModelConfig;
use tracing::info;

/// The discretised inventory MDP: transitions, costs and bounds.
///
/// Built once and read-only afterwards. Solvers borrow it.
#[derive(Debug, Clone)]
pub struct MdpModel {
    transitions: TransitionMatrix,
    costs: CostParameters,
    max_order: usize,
    gamma: f64,
}

impl MdpModel {
    pub fn new(transitions: TransitionMatrix, config: &ModelConfig) -> Result<Self> {
        config.validate()?;
        if transitions.num_states() != config.num_states {
            return Err(MdpError::configuration(format!(
                "transition matrix has {} states, config expects {}",
                transitions.num_states(),
                config.num_states
            )));
        }
        Ok(Self {
            transitions,
            costs: CostParameters::from(config),
            max_order: config.max_order,
            gamma: config.gamma,
        })
    }

    /// Discretises a daily-total series and estimates the model from it.
    pub fn from_daily_sales(
        daily_totals: &[f64],
        config: &ModelConfig,
    ) -> Result<(Self, DiscretizedDemand)> {
        config.validate()?;
        let demand = discretize(daily_totals, config.num_states)?;
        let transitions = TransitionMatrix::estimate(&demand.states, config.num_states)?;
        let unobserved = (0..config.num_states)
            .filter(|&s| transitions.is_unobserved(s))
            .count();
        info!(
            periods = daily_totals.len(),
            num_states = config.num_states,
            max_order = config.max_order,
            unobserved_states = unobserved,
            "built inventory model"
        );
        Ok((Self::new(transitions, config)?, demand))
    }

    pub fn num_states(&self) -> usize {
        self.transitions.num_states()
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    pub fn num_actions(&self) -> usize {
        self.max_order + 1
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn costs(&self) -> &CostParameters {
        &self.costs
    }

    pub fn transitions(&self) -> &TransitionMatrix {
        &self.transitions
    }

    pub fn reward(&self, state: usize, action: usize) -> f64 {
        self.costs.reward(state, action, self.transitions.row(state))
    }
}
