//! End-to-end scenarios from sales data to policy.

use std::io::Write;

use bakery_mdp::io::sales::load_daily_totals;
use bakery_mdp::io::reporting::{policy_rows, write_policy_report};
use bakery_mdp::model::transition::TransitionMatrix;
use bakery_mdp::strategy::value_iteration::solve;
use bakery_mdp::{MdpError, MdpModel, ModelConfig, SolverSettings};

#[test]
fn documented_state_sequence_counts() {
    let p = TransitionMatrix::estimate(&[0, 1, 2, 0, 1, 2, 2, 2], 3).unwrap();
    for s in 0..3 {
        let sum: f64 = p.row(s).iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "row {s} sums to {sum}");
    }
    assert_eq!(p.row(0), &[0.0, 1.0, 0.0]);
    assert_eq!(p.row(1), &[0.0, 0.0, 1.0]);
    assert!((p.row(2)[0] - 1.0 / 3.0).abs() < 1e-12);
    assert!((p.row(2)[2] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn identical_sales_give_self_loop_and_no_orders() {
    let config = ModelConfig {
        num_states: 4,
        ..ModelConfig::default()
    };
    let (model, demand) = MdpModel::from_daily_sales(&[5.0; 10], &config).unwrap();

    let populated: Vec<usize> = demand.states.clone();
    assert!(populated.iter().all(|&s| s == populated[0]));
    let s = populated[0];

    let row = model.transitions().row(s);
    assert_eq!(row[s], 1.0);
    assert_eq!(row.iter().sum::<f64>(), 1.0);

    let sol = solve(&model, &SolverSettings::default());
    assert_eq!(sol.policy[s], 0);
}

#[test]
fn expensive_shortage_orders_heavily_when_demand_jumps() {
    // Demand alternates low and high, so low-demand days precede high ones.
    let sales: Vec<f64> = (0..40)
        .map(|d| if d % 2 == 0 { 10.0 } else { 100.0 })
        .collect();
    let config = ModelConfig {
        num_states: 10,
        max_order: 5,
        holding_cost: 0.1,
        shortage_cost: 1_000.0,
        order_cost: 1.0,
        gamma: 0.9,
    };
    let (model, demand) = MdpModel::from_daily_sales(&sales, &config).unwrap();
    let sol = solve(&model, &SolverSettings::default());

    let low_state = demand.states[0];
    assert!(sol.policy[low_state] >= config.max_order - 1);
    assert!(sol.converged);
}

#[test]
fn cheap_shortage_orders_nothing() {
    let sales: Vec<f64> = (0..40).map(|d| (d % 5) as f64 * 10.0 + 5.0).collect();
    let config = ModelConfig {
        shortage_cost: 0.0,
        ..ModelConfig::default()
    };
    let (model, _) = MdpModel::from_daily_sales(&sales, &config).unwrap();
    let sol = solve(&model, &SolverSettings::default());
    assert!(sol.policy.iter().all(|&a| a == 0));
}

#[test]
fn invalid_configuration_fails_before_solving() {
    let config = ModelConfig {
        num_states: 0,
        ..ModelConfig::default()
    };
    assert!(matches!(
        MdpModel::from_daily_sales(&[1.0, 2.0], &config),
        Err(MdpError::Configuration { .. })
    ));
}

#[test]
fn csv_to_policy_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.csv");
    let mut file = std::fs::File::create(&input).unwrap();
    writeln!(file, "DATE,Quantity,article").unwrap();
    for day in 1..=28 {
        let qty = if day % 7 >= 5 { 60 } else { 30 + day % 3 };
        writeln!(file, "2021-02-{day:02},{qty},bread").unwrap();
        writeln!(file, "2021-02-{day:02},4,croissant").unwrap();
    }
    drop(file);

    let totals = load_daily_totals(&input).unwrap();
    assert_eq!(totals.len(), 28);
    assert_eq!(totals[0].date, "2021-02-01");

    let series: Vec<f64> = totals.iter().map(|d| d.quantity).collect();
    let config = ModelConfig {
        num_states: 5,
        max_order: 3,
        ..ModelConfig::default()
    };
    let (model, demand) = MdpModel::from_daily_sales(&series, &config).unwrap();
    let sol = solve(&model, &SolverSettings::default());
    let steady = model.transitions().stationary(10_000, 1e-10);
    let rows = policy_rows(&demand.bins, &sol, steady.as_deref());

    let output = dir.path().join("policy.csv");
    write_policy_report(&output, &rows).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("state,demand_low,demand_high,order_quantity,value"));
    assert_eq!(written.lines().count(), 1 + 5);
}
