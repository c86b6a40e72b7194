//! Core types for the shopdata generator.
//!
//! This crate provides the foundational types shared across the generator
//! workspace:
//!
//! - [`Customer`], [`Product`], [`Sale`], [`Event`] - the generated record
//!   types, one per output collection
//! - [`CustomerMetric`] - the per-customer summary derived from the event
//!   stream
//! - [`DatasetConfig`] - the four collection sizes driving a generation run
//!
//! # Architecture
//!
//! ```text
//! shopdata-core (this crate)
//!    │
//!    ├─── shopdata-generator  (produces the record types)
//!    ├─── shopdata-metrics    (folds Event into CustomerMetric)
//!    └─── shopdata-jsonl      (serializes any record collection)
//! ```
//!
//! All timestamps are naive (no timezone) and serialize to ISO-8601
//! (`2023-06-01T00:00:00`), so their textual ordering matches their
//! chronological ordering.

pub mod config;
pub mod records;

// Re-exports for convenience
pub use config::DatasetConfig;
pub use records::{
    Category, Channel, City, Customer, CustomerMetric, Device, Event, EventType, Product, Sale,
};

/// Round a float to two decimal places (cents precision).
///
/// Used for prices, sale amounts and frequency scores so that serialized
/// values never carry more than two fractional digits.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.0 / 24.0), 0.08);
    }

    #[test]
    fn test_round2_idempotent() {
        for raw in [0.005, 1.0 / 3.0, 4999.999, 123.456789] {
            let once = round2(raw);
            assert_eq!(once, round2(once));
        }
    }
}
