//! Per-customer metric aggregation for the shopdata generator.
//!
//! This crate folds the full event collection into exactly one
//! [`CustomerMetric`](shopdata_core::CustomerMetric) per customer id,
//! including customers that never produced an event.
//!
//! # Example
//!
//! ```rust
//! use shopdata_core::DatasetConfig;
//! use shopdata_generator::DatasetGenerator;
//! use shopdata_metrics::aggregate_customer_metrics;
//!
//! let config = DatasetConfig {
//!     customer_count: 10,
//!     product_count: 5,
//!     sale_count: 20,
//!     event_count: 100,
//! };
//! let dataset = DatasetGenerator::new(config, 42).generate().unwrap();
//! let metrics = aggregate_customer_metrics(&dataset.events, 10);
//! assert_eq!(metrics.len(), 10);
//! ```

pub mod aggregate;

// Re-export for convenience
pub use aggregate::aggregate_customer_metrics;
