mod cmd;
mod progress;

use clap::{Args, Parser, Subcommand};
use itamaraca::Overrides;
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "itamaraca")]
#[command(version)]
#[command(about = "Itamaraca moving-window pseudo random number generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct RunArgs {
    /// JSON file with any of: samples, max_value, seeds, lambda, output
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of values to generate
    #[arg(short = 'n', long, global = true)]
    samples: Option<usize>,

    #[arg(long, global = true, allow_negative_numbers = true)]
    max_value: Option<f64>,

    /// Comma separated initial window, oldest first
    #[arg(long, global = true, value_delimiter = ',', allow_negative_numbers = true)]
    seeds: Option<Vec<f64>>,

    #[arg(long, global = true, allow_negative_numbers = true)]
    lambda: Option<f64>,

    /// CSV output path
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            samples: self.samples,
            max_value: self.max_value,
            seeds: self.seeds.clone(),
            lambda: self.lambda,
            output: self.output.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sequence to CSV and preview the first values (default)
    Generate,
    /// Print summary statistics and a histogram without writing a file
    Stats {
        #[arg(long, default_value_t = itamaraca::stats::DEFAULT_BINS)]
        bins: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.run.config.as_deref();
    let overrides = cli.run.overrides();

    let result = match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => cmd::generate(config, overrides),
        Commands::Stats { bins } => cmd::stats(config, overrides, bins),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
