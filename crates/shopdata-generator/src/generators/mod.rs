//! Individual collection generators.
//!
//! Each submodule generates one output collection from an explicit RNG
//! handle; [`timestamp`] holds the shared uniform date sampler. Generators
//! never validate foreign keys after the fact - sales and events sample
//! their customer and product ids directly from the dense id ranges, so
//! referential consistency holds by construction.

pub mod customer;
pub mod event;
pub mod product;
pub mod sale;
pub mod timestamp;

pub use customer::generate_customers;
pub use event::generate_events;
pub use product::generate_products;
pub use sale::generate_sales;
pub use timestamp::sample_datetime;
