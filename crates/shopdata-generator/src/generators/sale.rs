//! Sale record generator.

use crate::generators::timestamp::sample_datetime;
use chrono::NaiveDate;
use rand::Rng;
use shopdata_core::{round2, Sale};

/// Unit price bounds; sampled independently of the referenced product's
/// catalog price.
const UNIT_PRICE_MIN: f64 = 5.0;
const UNIT_PRICE_MAX: f64 = 5000.0;

/// Generate `count` sales with dense ids `1..=count`.
///
/// Customer and product ids are drawn uniformly from `1..=customer_count`
/// and `1..=product_count`; ids may repeat and some may never appear. The
/// amount is an independently sampled unit price times quantity, not the
/// catalog price of the referenced product.
pub fn generate_sales<R: Rng>(
    rng: &mut R,
    customer_count: u64,
    product_count: u64,
    count: u64,
) -> Vec<Sale> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    (1..=count)
        .map(|sale_id| {
            let customer_id = rng.gen_range(1..=customer_count);
            let product_id = rng.gen_range(1..=product_count);
            let quantity = rng.gen_range(1..=5u32);
            let unit_price = round2(rng.gen_range(UNIT_PRICE_MIN..=UNIT_PRICE_MAX));
            Sale {
                sale_id,
                customer_id,
                product_id,
                quantity,
                amount: round2(unit_price * quantity as f64),
                sale_date: sample_datetime(rng, start, end),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_foreign_keys_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let sales = generate_sales(&mut rng, 100, 20, 1000);

        assert_eq!(sales.len(), 1000);
        for sale in &sales {
            assert!((1..=100).contains(&sale.customer_id));
            assert!((1..=20).contains(&sale.product_id));
        }
    }

    #[test]
    fn test_quantity_and_amount() {
        let mut rng = StdRng::seed_from_u64(42);

        for sale in generate_sales(&mut rng, 100, 20, 1000) {
            assert!((1..=5).contains(&sale.quantity));
            assert_eq!(sale.amount, round2(sale.amount));
            // a single unit costs at least 5.0, at most 5000.0
            assert!(sale.amount >= UNIT_PRICE_MIN * sale.quantity as f64 - 0.01);
            assert!(sale.amount <= UNIT_PRICE_MAX * sale.quantity as f64 + 0.01);
        }
    }

    #[test]
    fn test_dense_sale_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let sales = generate_sales(&mut rng, 10, 10, 100);

        for (i, sale) in sales.iter().enumerate() {
            assert_eq!(sale.sale_id, i as u64 + 1);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_sales(&mut rng1, 100, 20, 200),
            generate_sales(&mut rng2, 100, 20, 200)
        );
    }
}
