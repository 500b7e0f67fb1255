// src/simulation/config.rs

use crate::error::{MdpError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the inventory model. Immutable once a model is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub num_states: usize,
    pub max_order: usize,
    pub holding_cost: f64,
    pub shortage_cost: f64,
    pub order_cost: f64,
    pub gamma: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            num_states: 10,
            max_order: 5,
            holding_cost: 1.0,
            shortage_cost: 50.0,
            order_cost: 2.0,
            gamma: 0.95,
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_states < 2 {
            return Err(MdpError::configuration(format!(
                "num_states must be greater than 1, got {}",
                self.num_states
            )));
        }
        for (name, value) in [
            ("holding_cost", self.holding_cost),
            ("shortage_cost", self.shortage_cost),
            ("order_cost", self.order_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MdpError::configuration(format!(
                    "{name} must be a non-negative real, got {value}"
                )));
            }
        }
        if !(0.0..1.0).contains(&self.gamma) {
            return Err(MdpError::configuration(format!(
                "gamma must lie in [0, 1), got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

/// Stopping rule for value iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    pub tol: f64,
    pub max_iter: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: 1000,
        }
    }
}

impl SolverSettings {
    pub fn validate(&self) -> Result<()> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(MdpError::configuration(format!(
                "tol must be a positive real, got {}",
                self.tol
            )));
        }
        if self.max_iter == 0 {
            return Err(MdpError::configuration("max_iter must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ModelConfig::default().validate().is_ok());
        assert!(SolverSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_single_state() {
        let config = ModelConfig {
            num_states: 1,
            ..ModelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MdpError::Configuration { .. })
        ));
    }

    #[test]
    fn rejects_gamma_of_one() {
        let config = ModelConfig {
            gamma: 1.0,
            ..ModelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MdpError::Configuration { .. })
        ));
    }

    #[test]
    fn rejects_negative_cost() {
        let config = ModelConfig {
            shortage_cost: -1.0,
            ..ModelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_tolerance() {
        let settings = SolverSettings {
            tol: 0.0,
            max_iter: 10,
        };
        assert!(settings.validate().is_err());
    }
}
