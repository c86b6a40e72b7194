//! Product record generator.

use rand::Rng;
use shopdata_core::{round2, Category, Product};

/// Generate `count` products with dense ids `1..=count`.
///
/// The category is drawn uniformly, the price uniformly within that
/// category's bounds (two decimal places) and the name derived from
/// category and id.
pub fn generate_products<R: Rng>(rng: &mut R, count: u64) -> Vec<Product> {
    (1..=count)
        .map(|product_id| {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let (min, max) = category.price_bounds();
            Product {
                product_id,
                category,
                price: round2(rng.gen_range(min..=max)),
                name: format!("{category} Product {product_id}"),
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
    fn test_dense_ids_and_names() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = generate_products(&mut rng, 50);

        assert_eq!(products.len(), 50);
        for (i, product) in products.iter().enumerate() {
            let id = i as u64 + 1;
            assert_eq!(product.product_id, id);
            assert_eq!(product.name, format!("{} Product {}", product.category, id));
        }
    }

    #[test]
    fn test_price_within_category_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for product in generate_products(&mut rng, 1000) {
            let (min, max) = product.category.price_bounds();
            assert!(
                product.price >= min && product.price <= max,
                "{} price {} outside [{min}, {max}]",
                product.name,
                product.price
            );
        }
    }

    #[test]
    fn test_price_has_two_decimals() {
        let mut rng = StdRng::seed_from_u64(42);

        for product in generate_products(&mut rng, 1000) {
            assert_eq!(product.price, round2(product.price));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_products(&mut rng1, 50),
            generate_products(&mut rng2, 50)
        );
    }
}
