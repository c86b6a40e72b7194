//! Top-level dataset generator tying the collection generators together.

use crate::generators;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shopdata_core::{Customer, DatasetConfig, Event, Product, Sale};
use tracing::info;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The weighted event-type distribution could not be constructed.
    #[error("invalid event-type weights: {0}")]
    InvalidWeights(#[from] rand::distributions::WeightedError),
}

/// The complete in-memory dataset of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub events: Vec<Event>,
}

/// Dataset generator producing all generated collections from one seeded
/// RNG.
///
/// The generator runs the collection generators in a fixed order
/// (customers, products, sales, events), all drawing from the same RNG, so
/// the full dataset is reproducible from the seed and the config alone.
pub struct DatasetGenerator {
    config: DatasetConfig,
    rng: StdRng,
}

impl DatasetGenerator {
    /// Create a new dataset generator with the given config and seed.
    pub fn new(config: DatasetConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the config this generator was built with.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generate all four collections.
    ///
    /// Sales and events sample their foreign keys from the configured
    /// customer and product counts, so every reference lands inside the
    /// generated dense id ranges.
    pub fn generate(mut self) -> Result<Dataset, GeneratorError> {
        let config = self.config;

        info!("generating {} customers", config.customer_count);
        let customers = generators::generate_customers(&mut self.rng, config.customer_count);

        info!("generating {} products", config.product_count);
        let products = generators::generate_products(&mut self.rng, config.product_count);

        info!("generating {} sales", config.sale_count);
        let sales = generators::generate_sales(
            &mut self.rng,
            config.customer_count,
            config.product_count,
            config.sale_count,
        );

        info!("generating {} events", config.event_count);
        let events = generators::generate_events(
            &mut self.rng,
            config.customer_count,
            config.product_count,
            config.event_count,
        )?;

        Ok(Dataset {
            customers,
            products,
            sales,
            events,
        })
    }
}
