use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use leastactive::balance::{Balancer, LeastActive};
use leastactive::config::Scenario;
use leastactive::core::Invocation;
use leastactive::logger::init_logger;
use leastactive::rng::{RandomSource, SeededRandom};

/// Replay a scenario through the least active balancer and report how often
/// each endpoint gets picked
#[derive(Debug, Parser)]
#[command(name = "leastactive", version)]
struct Args {
    /// JSON scenario describing the endpoints and their load
    #[arg(short, long)]
    scenario: PathBuf,

    /// Number of selections to run
    #[arg(short, long, default_value_t = 10_000)]
    trials: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Method to invoke instead of the one in the scenario
    #[arg(short, long)]
    method: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger();

    let scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let method = args.method.clone().unwrap_or_else(|| scenario.method.clone());

    info!(
        endpoints = scenario.endpoints.len(),
        trials = args.trials,
        %method,
        "running {}",
        LeastActive::NAME
    );

    let picks = match args.seed {
        Some(seed) => {
            let balancer = LeastActive::with_rng(SeededRandom::new(seed));
            simulate(balancer, &scenario, &method, args.trials)?
        }
        None => simulate(LeastActive::new(), &scenario, &method, args.trials)?,
    };

    for endpoint in &scenario.endpoints {
        let count = picks.get(&endpoint.addr).copied().unwrap_or(0);
        let share = count as f64 / args.trials.max(1) as f64;
        info!(
            addr = %endpoint.addr,
            weight = endpoint.weight,
            active = endpoint.active.get(&method).copied().unwrap_or(0),
            picks = count,
            share = %format!("{:.4}", share),
            "endpoint picks"
        );
    }

    Ok(())
}

fn simulate<R: RandomSource>(
    balancer: LeastActive<R>,
    scenario: &Scenario,
    method: &str,
    trials: u64,
) -> anyhow::Result<HashMap<SocketAddr, u64>> {
    let candidates = scenario.snapshots();
    let invocation = Invocation::new(method);
    let mut picks = HashMap::new();

    for _ in 0..trials {
        let chosen = balancer.balance(&candidates, &invocation)?;
        *picks.entry(chosen.addr).or_insert(0) += 1;
    }

    Ok(picks)
}
