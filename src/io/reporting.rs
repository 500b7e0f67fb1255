// src/io/reporting.rs

use crate::error::Result;
use crate::model::discretizer::DemandBins;
use crate::simulation::engine::HistoryRecord;
use crate::strategy::value_iteration::Solution;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One line of the policy report: what to order in each demand state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyRow {
    pub state: usize,
    pub demand_low: f64,
    pub demand_high: f64,
    pub order_quantity: usize,
    pub value: f64,
    pub steady_state_probability: Option<f64>,
}

/// Joins the solved policy with bucket bounds and the steady-state distribution.
pub fn policy_rows(
    bins: &DemandBins,
    solution: &Solution,
    steady_state: Option<&[f64]>,
) -> Vec<PolicyRow> {
    solution
        .policy
        .iter()
        .zip(&solution.values)
        .enumerate()
        .map(|(state, (&order_quantity, &value))| {
            let (demand_low, demand_high) = bins.range(state);
            PolicyRow {
                state,
                demand_low,
                demand_high,
                order_quantity,
                value,
                steady_state_probability: steady_state.and_then(|pi| pi.get(state).copied()),
            }
        })
        .collect()
}

/// Writes the policy table to a CSV file.
pub fn write_policy_report<P: AsRef<Path>>(file_path: P, rows: &[PolicyRow]) -> Result<()> {
    write_rows(file_path.as_ref(), rows)
}

/// Writes the backtest history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/backtest.csv").
/// * `data` - The history records from the backtest engine.
pub fn write_simulation_log<P: AsRef<Path>>(file_path: P, data: &[HistoryRecord]) -> Result<()> {
    write_rows(file_path.as_ref(), data)
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    // Flush so everything hits disk before we report success.
    wtr.flush()?;

    info!(rows = rows.len(), path = %path.display(), "exported csv");
    Ok(())
}
