//! Command-line runner for the sales analytics engine.
//!
//! - `simulate`: stream synthetic sales through the engine and print periodic reports
//! - `benchmark`: compare bounded-heap top-K against a full sort

mod simulate;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sales_bench::{render_benchmark, Benchmark, BenchmarkSummary};
use sales_core::Config;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Real-time best-seller and trend analytics over a stream of sales.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file. Missing fields take their defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stream synthetic sales and report top products and trends.
    Simulate(SimulateArgs),
    /// Benchmark heap-based top-K against a full sort.
    Benchmark(BenchmarkArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct SimulateArgs {
    /// Number of sales to generate.
    #[arg(long)]
    pub events: Option<usize>,

    /// Delay between sales in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// RNG seed for a reproducible stream.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Products shown in each report.
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Report every N sales.
    #[arg(long)]
    pub report_every: Option<usize>,

    /// Write every ingested sale to this CSV file.
    #[arg(long)]
    pub log_csv: Option<PathBuf>,

    /// Print reports as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Age out window entries by wall clock before each report, not only on new sales.
    #[arg(long)]
    pub wall_clock_eviction: bool,
}

#[derive(Args, Debug, Clone)]
struct BenchmarkArgs {
    /// Comma-separated sale counts (e.g., 100,500,1000).
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// K for the top-K extraction.
    #[arg(long)]
    top_k: Option<usize>,

    /// RNG seed for generated sales.
    #[arg(long)]
    seed: Option<u64>,

    /// Print rows and summary as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Simulate(args) => {
            let config = simulate::apply_overrides(config, &args)?;
            simulate::run(config, &args).await?;
        }
        Commands::Benchmark(args) => run_benchmark(config, &args)?,
    }

    Ok(())
}

/// Initialize tracing, honoring `RUST_LOG` when set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sales_stream=info,sales_analytics=info,sales_ingestion=info,sales_bench=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn run_benchmark(mut config: Config, args: &BenchmarkArgs) -> Result<()> {
    if let Some(sizes) = &args.sizes {
        config.benchmark.sizes = sizes.clone();
    }
    if let Some(top_k) = args.top_k {
        config.benchmark.top_k = top_k;
    }
    if args.seed.is_some() {
        config.benchmark.seed = args.seed;
    }

    info!("=== Running Benchmark ===");
    let rows = Benchmark::run(&config.benchmark).context("benchmark failed")?;
    let summary = BenchmarkSummary::from_rows(&rows);

    if args.json {
        let out = serde_json::json!({ "rows": rows, "summary": summary });
        println!("{out}");
    } else {
        print!("{}", render_benchmark(&rows));
        println!("\n{summary}");
    }
    Ok(())
}
