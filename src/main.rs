//! Main file runs the command-line application for `fairsub`: it initializes
//! a graph coverage function for an experiment and reports the optimum guess
//! ladder a threshold greedy run would use.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use log::info;
use structopt::StructOpt;

use fairsub::{EstimateConfig, GraphUtility, Oracle, OracleCounter, SubmodularFunction};

/// Loads the experiment's colored graph and computes the guess ladder for
/// the optimum of neighborhood coverage under a cardinality constraint.
///
/// Built-in experiments are "default" (also selected by an empty name) and
/// "small", both seeded random graphs. Any other name is read from
/// `<data-dir>/<name>.edges`, a file with one "u v" edge per line, with
/// optional colors in `<data-dir>/<name>.colors`, one "id color" per line.
///
/// Logging goes through env_logger at info level unless `RUST_LOG` says
/// otherwise.
#[derive(Debug, StructOpt)]
#[structopt(name = "fairsub", about = "Optimum estimates for submodular coverage.")]
struct Opt {
    /// Experiment name.
    #[structopt(long, default_value = "")]
    experiment: String,

    /// Directory holding experiment data files.
    #[structopt(long, default_value = ".")]
    data_dir: PathBuf,

    /// Cardinality constraint `k` on the solution size.
    #[structopt(short, long = "cardinality")]
    k: usize,

    /// Guesses grow by a factor of (1 + epsilon).
    #[structopt(long, default_value = "0.1")]
    epsilon: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let config = EstimateConfig::new(opt.epsilon)?;
    let counter = OracleCounter::new();

    let mut f = GraphUtility::new(&opt.data_dir);
    f.init(&opt.experiment)?;

    let start = Instant::now();
    let guesses = f.get_opt_estimates(&counter, opt.k, &config);
    info!(
        "opt estimates {:.0?}",
        Instant::now().duration_since(start)
    );
    info!(
        "{} guesses for k {} from {} to {}",
        guesses.len(),
        opt.k,
        guesses[0],
        guesses[guesses.len() - 1]
    );
    info!("oracle calls {}", counter.calls());
    Ok(())
}
