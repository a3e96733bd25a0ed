use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use u_subsets::enumerate::{EnumerationConfig, PathEnumerator};
use u_subsets::registry::{ItemId, ItemRegistry};
use u_subsets::{logger, output, EnumError};

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Enumerates every strictly increasing item subset whose total cost fits a budget."
)]
struct Cli {
    /// Item costs in identifier order, comma separated. Pass the flag with
    /// no value for an empty item list.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        num_args = 0..,
        allow_negative_numbers = true,
        default_values_t = vec![0.0, 2.0, 4.0, 2.0, 4.0, 2.0]
    )]
    costs: Vec<f64>,

    /// Inclusive upper bound on a path's total cost.
    #[clap(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
    budget: f64,

    /// Leading identifier of every path; the first item must exceed it.
    #[clap(long, default_value_t = 1)]
    sentinel: usize,

    /// Print the number of paths on stderr after the listing.
    #[clap(long)]
    summary: bool,

    /// Write diagnostics to stderr.
    #[clap(short, long)]
    verbose: bool,

    /// Write diagnostics to this file instead of stderr.
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), EnumError> {
    if let Some(path) = &cli.log_file {
        if let Err(e) = logger::init_file_logger(path) {
            eprintln!(
                "Warning: failed to open log file {}: {e}. Diagnostics disabled.",
                path.display()
            );
        }
    } else if cli.verbose {
        logger::init_stderr_logger();
    }

    let registry = ItemRegistry::build(&cli.costs)?;
    let config = EnumerationConfig::default()
        .with_budget(cli.budget)
        .with_sentinel(ItemId::new(cli.sentinel));
    logger::log_verbose_message(format!(
        "registry: {} items, costs {:?}",
        registry.len(),
        registry.costs()
    ));

    let result = PathEnumerator::run(&registry, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_paths(&mut out, &result)?;

    if cli.summary {
        eprintln!(
            "{} paths (max depth {}) within budget {}",
            result.len(),
            result.max_depth(),
            result.budget()
        );
    }
    logger::flush();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            logger::flush();
            ExitCode::FAILURE
        }
    }
}
