// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This is the command line front end of the maximum diversity solver. It
//! solves every instance found at the given path for every requested subset
//! size and prints one row per resolution.

use std::{error::Error, io, time::Duration};

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use maxdiv::{io_utils, solve, DominanceRule, ProviderKind, Report, Reporter, SolverConfig, SolverConfigBuilder, Strategy, VectorSpace};

/// The heuristics that can seed the initial lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Provider {
    Greedy,
    Grasp,
    None,
}

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to an instance file or to a directory of instance files
    path: String,
    /// The number of points to select (can be repeated)
    #[clap(short = 'm', long = "size", default_values_t = vec![2, 3, 4, 5])]
    sizes: Vec<usize>,
    /// The exploration strategy (dfs or best-first)
    #[clap(short, long, default_value = "best-first")]
    strategy: Strategy,
    /// The dominance rule (canonical, total-distance or none)
    #[clap(long, default_value = "canonical")]
    dominance: DominanceRule,
    /// The heuristic used to seed the initial lower bound
    #[clap(short, long, value_enum, default_value = "greedy")]
    provider: Provider,
    /// The number of GRASP iterations
    #[clap(long, default_value = "10")]
    iterations: usize,
    /// The size of the GRASP restricted candidate list
    #[clap(long, default_value = "2")]
    rcl: usize,
    /// The seed of the GRASP random generator
    #[clap(long, default_value = "0")]
    seed: u64,
    /// The maximum amount of time (in seconds) granted to each resolution
    #[clap(short, long)]
    duration: Option<u64>,
    /// Complete each branched node greedily to find good solutions early
    #[clap(long)]
    heuristic_completion: bool,
    /// Keep the hopeless children in the fringe until they are popped
    #[clap(long)]
    no_eager_pruning: bool,
    /// Print one json object per resolution instead of a table
    #[clap(long)]
    json: bool,
}
impl Args {
    fn config(&self) -> Result<SolverConfig, Box<dyn Error>> {
        let provider = match self.provider {
            Provider::Greedy => ProviderKind::Greedy,
            Provider::Grasp => ProviderKind::Grasp { iterations: self.iterations, rcl_size: self.rcl, seed: self.seed },
            Provider::None => ProviderKind::None,
        };
        let config = SolverConfigBuilder::default()
            .strategy(self.strategy)
            .dominance(self.dominance)
            .provider(provider)
            .eager_pruning(!self.no_eager_pruning)
            .heuristic_completion(self.heuristic_completion)
            .time_limit(self.duration.map(Duration::from_secs))
            .build()?;
        Ok(config)
    }
}

/// Logs go to stderr so that the results on stdout stay clean
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("maxdiv=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Solves one (instance, size) pair. A size exceeding the number of points
/// of the instance is skipped with a warning rather than aborting the batch.
fn solve_one(name: &str, space: &VectorSpace, m: usize, config: &SolverConfig) -> maxdiv::Result<Option<Report>> {
    match solve(space, m, config) {
        Ok(outcome) => Ok(Some(Report::new(name, space, m, &outcome))),
        Err(maxdiv::Error::Infeasible { requested, available }) => {
            warn!(instance = name, requested, available, "size skipped");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.config()?;
    let instances = io_utils::read_instances(&args.path)?;
    info!(instances = instances.len(), sizes = ?args.sizes, "starting");

    let mut reporter = Reporter::new(io::stdout().lock());
    for (name, space) in instances.iter() {
        for m in args.sizes.iter().copied() {
            let Some(report) = solve_one(name, space, m, &config)? else {
                continue;
            };
            if args.json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                reporter.write(&report)?;
            }
        }
    }
    reporter.finish()?;
    Ok(())
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to solve the maximum diversity problem on a whole benchmark.
fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
