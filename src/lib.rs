//! shopdata - deterministic generator of synthetic retail analytics
//! datasets.
//!
//! A single run generates five JSONL collections from one seed:
//!
//! - `customers.jsonl` - registered customers
//! - `products.jsonl` - the product catalog
//! - `sales.jsonl` - completed sales referencing customers and products
//! - `events.jsonl` - behavioral events (view/click/add_to_cart/purchase)
//! - `customer_metrics.jsonl` - per-customer summaries folded from the
//!   event stream
//!
//! See [`pipeline::run`] for the end-to-end flow.

pub mod pipeline;

pub use pipeline::{run, RunConfig};
