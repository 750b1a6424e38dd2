//! probcalc CLI

mod dispatch;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use dispatch::{Dist, Inputs};

#[derive(Parser)]
#[command(name = "probcalc")]
#[command(about = "probcalc - Binomial, Poisson, Normal and Exponential probabilities")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Output file for results (pretty JSON). Defaults to stdout.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Binomial distribution: k successes in n trials with success probability p
    #[command(allow_negative_numbers = true)]
    Binomial {
        #[arg(value_enum)]
        function: BinomialFn,

        /// Number of trials (>= 1)
        #[arg(long)]
        n: i64,

        /// Number of successes (pmf, cdf, sf)
        #[arg(long)]
        k: Option<i64>,

        /// Success probability per trial, in [0, 1]
        #[arg(long)]
        p: f64,
    },

    /// Poisson distribution: k events at average rate lambda
    #[command(allow_negative_numbers = true)]
    Poisson {
        #[arg(value_enum)]
        function: PoissonFn,

        /// Average event rate (> 0)
        #[arg(long)]
        lambda: f64,

        /// Number of events (pmf, cdf, sf)
        #[arg(long)]
        k: Option<i64>,
    },

    /// Normal distribution N(mu, sigma)
    #[command(allow_negative_numbers = true)]
    Normal {
        #[arg(value_enum)]
        function: NormalFn,

        /// Value of the variable (pdf, cdf, sf, z-score)
        #[arg(long)]
        x: Option<f64>,

        /// Probability in (0, 1) (ppf)
        #[arg(long)]
        p: Option<f64>,

        /// Confidence level in (0, 1) (interval)
        #[arg(long)]
        confidence: Option<f64>,

        /// Mean
        #[arg(long, default_value = "0.0")]
        mu: f64,

        /// Standard deviation (> 0)
        #[arg(long, default_value = "1.0")]
        sigma: f64,
    },

    /// Exponential distribution with rate lambda
    #[command(allow_negative_numbers = true)]
    Exponential {
        #[arg(value_enum)]
        function: ExponentialFn,

        /// Value of the variable (pdf, cdf, sf)
        #[arg(long)]
        x: Option<f64>,

        /// Probability in (0, 1) (ppf)
        #[arg(long)]
        p: Option<f64>,

        /// Rate (> 0)
        #[arg(long)]
        lambda: f64,
    },

    /// Print version
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum BinomialFn {
    Pmf,
    Cdf,
    Sf,
    Mean,
    Variance,
    Std,
}

#[derive(Clone, Copy, ValueEnum)]
enum PoissonFn {
    Pmf,
    Cdf,
    Sf,
    Mean,
    Variance,
    Std,
}

#[derive(Clone, Copy, ValueEnum)]
enum NormalFn {
    Pdf,
    Cdf,
    Sf,
    Ppf,
    ZScore,
    Interval,
    Mean,
    Variance,
    Std,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExponentialFn {
    Pdf,
    Cdf,
    Sf,
    Ppf,
    Mean,
    Variance,
    Std,
}

/// Name of the selected `ValueEnum` variant as registered in the dispatch table.
fn function_name<T: ValueEnum>(f: T) -> String {
    f.to_possible_value().map(|v| v.get_name().to_string()).unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_writer(std::io::stderr).with_target(false).init();

    let (dist, function, inputs) = match cli.command {
        Commands::Binomial { function, n, k, p } => (
            Dist::Binomial,
            function_name(function),
            Inputs { n: Some(n), k, p: Some(p), ..Default::default() },
        ),
        Commands::Poisson { function, lambda, k } => (
            Dist::Poisson,
            function_name(function),
            Inputs { lambda: Some(lambda), k, ..Default::default() },
        ),
        Commands::Normal { function, x, p, confidence, mu, sigma } => (
            Dist::Normal,
            function_name(function),
            Inputs { x, p, confidence, mu: Some(mu), sigma: Some(sigma), ..Default::default() },
        ),
        Commands::Exponential { function, x, p, lambda } => (
            Dist::Exponential,
            function_name(function),
            Inputs { x, p, lambda: Some(lambda), ..Default::default() },
        ),
        Commands::Version => {
            println!("probcalc {}", pc_core::VERSION);
            return Ok(());
        }
    };

    let calc = dispatch::run(dist, &function, &inputs)?;
    tracing::info!(distribution = %calc.distribution, function = %calc.function, "calculation complete");

    write_json(cli.output.as_ref(), serde_json::to_value(&calc)?)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
        tracing::info!(path = %path.display(), "result written");
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
