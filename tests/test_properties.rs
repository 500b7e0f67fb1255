//! Property-based tests for discretisation, estimation and the solver.

use proptest::prelude::*;

use bakery_mdp::model::discretizer::discretize;
use bakery_mdp::model::transition::TransitionMatrix;
use bakery_mdp::strategy::value_iteration::solve;
use bakery_mdp::{MdpModel, ModelConfig, SolverSettings};

/// Strategy: a non-empty series of non-negative daily totals.
fn sales_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0..500.0f64, 1..60)
}

/// Strategy: a valid model configuration.
fn config_strategy() -> impl Strategy<Value = ModelConfig> {
    (2..12usize, 0..6usize, 0.0..5.0f64, 0.0..100.0f64, 0.0..5.0f64, 0.0..0.95f64).prop_map(
        |(num_states, max_order, holding_cost, shortage_cost, order_cost, gamma)| ModelConfig {
            num_states,
            max_order,
            holding_cost,
            shortage_cost,
            order_cost,
            gamma,
        },
    )
}

proptest! {
    // 1. Every observation lands in range and the maximum lands in the top state
    #[test]
    fn discretization_total_and_in_range(sales in sales_strategy(), n in 2..20usize) {
        let d = discretize(&sales, n).unwrap();
        prop_assert_eq!(d.states.len(), sales.len());
        prop_assert!(d.states.iter().all(|&s| s < n));

        let max = sales.iter().copied().fold(0.0f64, f64::max);
        if max > 0.0 {
            for (v, s) in sales.iter().zip(&d.states) {
                if *v == max {
                    prop_assert_eq!(*s, n - 1);
                }
            }
        }
    }

    // 2. Bin edges are non-decreasing and span [0, max]
    #[test]
    fn edges_monotone(sales in sales_strategy(), n in 2..20usize) {
        let d = discretize(&sales, n).unwrap();
        let edges = d.bins.edges();
        prop_assert_eq!(edges.len(), n + 1);
        prop_assert_eq!(edges[0], 0.0);
        prop_assert!(edges.windows(2).all(|w| w[0] <= w[1]));
    }

    // 3. Rows sum to one or are exactly zero
    #[test]
    fn rows_stochastic_or_zero(states in prop::collection::vec(0..8usize, 0..80)) {
        let p = TransitionMatrix::estimate(&states, 8).unwrap();
        for row in p.rows() {
            let sum: f64 = row.iter().sum();
            prop_assert!(row.iter().all(|&x| x >= 0.0));
            prop_assert!((sum - 1.0).abs() < 1e-9 || row.iter().all(|&x| x == 0.0));
        }
    }

    // 4. Policy actions are admissible and V covers every state
    #[test]
    fn policy_in_range(sales in sales_strategy(), config in config_strategy()) {
        let (model, _) = MdpModel::from_daily_sales(&sales, &config).unwrap();
        let sol = solve(&model, &SolverSettings::default());
        prop_assert_eq!(sol.values.len(), config.num_states);
        prop_assert_eq!(sol.policy.len(), config.num_states);
        prop_assert!(sol.policy.iter().all(|&a| a <= config.max_order));
    }

    // 5. Solving is deterministic
    #[test]
    fn solve_deterministic(sales in sales_strategy(), config in config_strategy()) {
        let (m1, _) = MdpModel::from_daily_sales(&sales, &config).unwrap();
        let (m2, _) = MdpModel::from_daily_sales(&sales, &config).unwrap();
        let settings = SolverSettings::default();
        prop_assert_eq!(solve(&m1, &settings), solve(&m2, &settings));
    }

    // 6. A single action leaves nothing to choose
    #[test]
    fn zero_max_order_forces_zero(sales in sales_strategy(), mut config in config_strategy()) {
        config.max_order = 0;
        let (model, _) = MdpModel::from_daily_sales(&sales, &config).unwrap();
        let sol = solve(&model, &SolverSettings::default());
        prop_assert!(sol.policy.iter().all(|&a| a == 0));
    }
}
