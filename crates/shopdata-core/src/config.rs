//! Dataset sizing for a generation run.

use serde::{Deserialize, Serialize};

/// The four collection sizes driving one generation run.
///
/// Sales and events reference customers and products by id, so
/// `customer_count` and `product_count` double as the foreign-key domains
/// for those collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of customers to generate (also the customer FK domain).
    pub customer_count: u64,
    /// Number of products to generate (also the product FK domain).
    pub product_count: u64,
    /// Number of sales to generate.
    pub sale_count: u64,
    /// Number of behavioral events to generate.
    pub event_count: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            customer_count: 10_000,
            product_count: 500,
            sale_count: 200_000,
            event_count: 400_000,
        }
    }
}
