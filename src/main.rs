use bakery_mdp::io::{demand, reporting, sales};
use bakery_mdp::logging;
use bakery_mdp::simulation::config::{ModelConfig, SolverSettings};
use bakery_mdp::simulation::engine::{compare_policies, Backtest};
use bakery_mdp::strategy::implementations::{
    BaseStockPolicy, ConstantPolicy, MdpPolicy, NaivePolicy, RandomPolicy,
};
use bakery_mdp::strategy::traits::{OrderContext, OrderPolicy};
use bakery_mdp::strategy::value_iteration::solve;
use bakery_mdp::{MdpModel, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "bakery-mdp",
    about = "Optimal bakery ordering policy from daily sales via value iteration"
)]
struct Cli {
    /// Sales CSV with `date` and `quantity` columns. Synthetic demand is used when omitted.
    sales_csv: Option<String>,

    /// Number of discretised demand states
    #[arg(long, default_value = "10")]
    num_states: usize,

    /// Largest order quantity considered
    #[arg(long, default_value = "5")]
    max_order: usize,

    #[arg(long, default_value = "1.0")]
    holding_cost: f64,

    #[arg(long, default_value = "50.0")]
    shortage_cost: f64,

    #[arg(long, default_value = "2.0")]
    order_cost: f64,

    /// Discount factor in [0, 1)
    #[arg(long, default_value = "0.95")]
    gamma: f64,

    /// Convergence tolerance on the value function
    #[arg(long, default_value = "1e-5")]
    tol: f64,

    #[arg(long, default_value = "1000")]
    max_iter: usize,

    /// Days of synthetic demand when no CSV is given
    #[arg(long, default_value = "365")]
    days: usize,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Output path for the policy report
    #[arg(long, default_value = "policy.csv")]
    output: String,

    /// Output path for the backtest history
    #[arg(long)]
    history: Option<String>,
}

fn main() -> ExitCode {
    logging::init("info");
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    println!("=== Bakery Inventory MDP ===");

    // 1. SETUP CONFIGURATION
    let config = ModelConfig {
        num_states: cli.num_states,
        max_order: cli.max_order,
        holding_cost: cli.holding_cost,
        shortage_cost: cli.shortage_cost,
        order_cost: cli.order_cost,
        gamma: cli.gamma,
    };
    let settings = SolverSettings {
        tol: cli.tol,
        max_iter: cli.max_iter,
    };
    config.validate()?;
    settings.validate()?;

    // 2. LOAD DEMAND
    let daily_totals: Vec<f64> = match &cli.sales_csv {
        Some(path) => sales::load_daily_totals(path)?
            .into_iter()
            .map(|day| day.quantity)
            .collect(),
        None => {
            println!("No sales file given, generating {} days of demand.", cli.days);
            demand::generate_weekly_demand(
                cli.days,
                &demand::bakery_weekday_means(),
                8.0,
                cli.seed,
            )
        }
    };

    // 3. BUILD MODEL AND SOLVE
    let (model, discretized) = MdpModel::from_daily_sales(&daily_totals, &config)?;
    let solution = solve(&model, &settings);
    println!(
        "Value iteration: {} iterations ({})",
        solution.iterations,
        if solution.converged {
            "converged"
        } else {
            "iteration cap reached"
        }
    );

    let steady_state = model.transitions().stationary(10_000, 1e-10);

    // 4. REPORT POLICY
    let rows = reporting::policy_rows(&discretized.bins, &solution, steady_state.as_deref());
    println!("\n{:>5} {:>17} {:>6} {:>12} {:>8}", "state", "demand", "order", "value", "p");
    for row in &rows {
        let p = row
            .steady_state_probability
            .map(|p| format!("{p:.3}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5} {:>8.1}-{:<8.1} {:>6} {:>12.2} {:>8}",
            row.state, row.demand_low, row.demand_high, row.order_quantity, row.value, p
        );
    }
    reporting::write_policy_report(&cli.output, &rows)?;

    // 5. BACKTEST AGAINST SIMPLE RULES
    let context = OrderContext {
        num_states: model.num_states(),
        max_order: model.max_order(),
    };
    let mut policies: Vec<(String, Box<dyn OrderPolicy>)> = vec![
        (
            "mdp".to_string(),
            Box::new(MdpPolicy::from_solution(&solution)),
        ),
        ("naive".to_string(), Box::new(NaivePolicy::new())),
        ("never-order".to_string(), Box::new(ConstantPolicy::new(0))),
        ("random".to_string(), Box::new(RandomPolicy::new(cli.seed))),
    ];
    if let Some(pi) = &steady_state {
        policies.push((
            "base-stock".to_string(),
            Box::new(BaseStockPolicy::with_optimal_target(pi, model.costs())),
        ));
    }

    let mut backtest = Backtest::new(*model.costs(), context, discretized.states.clone());
    let ranking = compare_policies(&mut backtest, policies);

    println!("\n=== Backtest Cost on Observed Demand ===");
    for (name, cost) in &ranking {
        println!("{name}: ${cost:.2}");
    }

    if let Some(path) = &cli.history {
        reporting::write_simulation_log(path, &backtest.history)?;
    }

    println!("\nPolicy written to ./{}", cli.output);
    Ok(())
}
