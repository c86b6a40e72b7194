//! Seeded record generators for the shopdata dataset.
//!
//! This crate produces the four generated collections (customers, products,
//! sales, events) from a single seeded RNG, so a run is fully determined by
//! its seed and the collection sizes.
//!
//! # Architecture
//!
//! ```text
//! DatasetConfig + seed
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ DatasetGenerator │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - config        │
//! └────────┬─────────┘
//!          │  customers → products → sales → events
//!          ▼
//!       Dataset
//! ```
//!
//! All generators draw from one shared RNG in a fixed order, so the exact
//! values any one generator produces depend on how many draws ran before
//! it. That ordering is part of the determinism contract: same seed, same
//! config, same output.
//!
//! # Example
//!
//! ```rust
//! use shopdata_core::DatasetConfig;
//! use shopdata_generator::DatasetGenerator;
//!
//! let config = DatasetConfig {
//!     customer_count: 10,
//!     product_count: 5,
//!     sale_count: 20,
//!     event_count: 50,
//! };
//! let dataset = DatasetGenerator::new(config, 42).generate().unwrap();
//! assert_eq!(dataset.customers.len(), 10);
//! assert_eq!(dataset.events.len(), 50);
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{Dataset, DatasetGenerator, GeneratorError};
