//! Command-line interface for shopdata.
//!
//! # Usage Examples
//!
//! ```bash
//! # Default dataset (10000 customers, 500 products, 200000 sales,
//! # 400000 events) into ./data
//! shopdata --output-dir data
//!
//! # Small deterministic dataset for demos
//! shopdata --output-dir /tmp/demo --seed 7 \
//!   --customers 100 --products 20 --sales 500 --events 1000
//! ```

use clap::Parser;
use shopdata::{run, RunConfig};
use shopdata_core::DatasetConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopdata")]
#[command(about = "Generate a synthetic retail analytics dataset as JSONL files")]
#[command(long_about = None)]
struct Cli {
    /// Output directory for the generated JSONL files
    #[arg(long, short = 'o', default_value = "data")]
    output_dir: PathBuf,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Number of customers to generate
    #[arg(long, default_value = "10000", value_parser = clap::value_parser!(u64).range(1..))]
    customers: u64,

    /// Number of products to generate
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    products: u64,

    /// Number of sales to generate
    #[arg(long, default_value = "200000", value_parser = clap::value_parser!(u64).range(1..))]
    sales: u64,

    /// Number of behavioral events to generate
    #[arg(long, default_value = "400000", value_parser = clap::value_parser!(u64).range(1..))]
    events: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        output_dir: cli.output_dir,
        seed: cli.seed,
        dataset: DatasetConfig {
            customer_count: cli.customers,
            product_count: cli.products,
            sale_count: cli.sales,
            event_count: cli.events,
        },
    };

    run(&config)
}
