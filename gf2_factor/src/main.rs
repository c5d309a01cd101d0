use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use gf2_factor::{PairMode, Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "gf2-factor", about = "Factor a packed product of two binary polynomials")]
struct Args {
    /// Seed for the splitting RNG (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Equal-degree split trials per block
    #[arg(long, default_value_t = 256)]
    max_trials: usize,

    /// Factorization attempts before giving up
    #[arg(long, default_value_t = 3)]
    max_attempts: usize,

    /// Print every split of the factors into two products that fit S bits
    #[arg(long)]
    exhaustive: bool,

    /// Problem file; stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let input = match &args.input {
        Some(path) => {
            info!("reading problem from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut config = SolverConfig::default()
        .with_max_split_trials(args.max_trials)
        .with_max_attempts(args.max_attempts);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.exhaustive {
        config = config.with_pair_mode(PairMode::Exhaustive);
    }

    let solver = Solver::new(config)?;
    let lines = solver.solve(&input).map_err(|err| {
        error!("{}", err);
        err
    })?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
