//! End-to-end generation pipeline.
//!
//! Generation and aggregation run to completion in memory before any file
//! is written; the five serialization passes then run sequentially, one
//! destination each. A sink failure aborts the run and leaves any partial
//! file behind.

use anyhow::Context;
use shopdata_core::DatasetConfig;
use shopdata_generator::DatasetGenerator;
use shopdata_jsonl::write_collection;
use shopdata_metrics::aggregate_customer_metrics;
use std::path::PathBuf;
use tracing::info;

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory the five JSONL files are written into (created if
    /// missing).
    pub output_dir: PathBuf,
    /// Seed for the shared RNG; the full output is a function of this
    /// seed and the dataset config.
    pub seed: u64,
    /// Collection sizes.
    pub dataset: DatasetConfig,
}

/// Generate the dataset, fold the metrics and write all five collections.
pub fn run(config: &RunConfig) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            config.output_dir.display()
        )
    })?;

    let dataset = DatasetGenerator::new(config.dataset, config.seed)
        .generate()
        .context("dataset generation failed")?;

    info!(
        "aggregating metrics for {} customers over {} events",
        config.dataset.customer_count,
        dataset.events.len()
    );
    let metrics = aggregate_customer_metrics(&dataset.events, config.dataset.customer_count);

    let dir = &config.output_dir;
    write_collection(&dataset.customers, dir.join("customers.jsonl"))?;
    write_collection(&dataset.products, dir.join("products.jsonl"))?;
    write_collection(&dataset.sales, dir.join("sales.jsonl"))?;
    write_collection(&dataset.events, dir.join("events.jsonl"))?;
    write_collection(&metrics, dir.join("customer_metrics.jsonl"))?;

    info!(
        "done, generated customers.jsonl, products.jsonl, sales.jsonl, \
         events.jsonl and customer_metrics.jsonl in '{}'",
        dir.display()
    );

    Ok(())
}
