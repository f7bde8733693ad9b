use std::collections::HashSet;

use crate::models::Product;

/// Whether `product` satisfies every supplied constraint.
/// Bounds are inclusive; an empty size list places no constraint on sizes.
pub fn matches_filter(
    product: &Product,
    min_price: Option<f64>,
    max_price: Option<f64>,
    sizes: &HashSet<String>,
) -> bool {
    if let Some(min) = min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = max_price {
        if product.price > max {
            return false;
        }
    }
    if sizes.is_empty() {
        return true;
    }
    product.sizes().iter().any(|s| sizes.contains(&s.to_lowercase()))
}

/// Stable filter over `products`; the input is left untouched.
pub fn filter_products(
    products: &[Product],
    min_price: Option<f64>,
    max_price: Option<f64>,
    sizes: &[String],
) -> Vec<Product> {
    let wanted: HashSet<String> = sizes
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect();
    products
        .iter()
        .filter(|p| matches_filter(p, min_price, max_price, &wanted))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, sizes: &[&str]) -> Product {
        Product {
            title: Some(format!("item-{}", price)),
            description: None,
            price,
            sizes: Some(sizes.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(10.0, &["S"]),
            product(20.0, &["M", "L"]),
            product(30.0, &["L"]),
        ]
    }

    fn csv(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn price_range_and_sizes_select_single_product() {
        let out = filter_products(&catalog(), Some(15.0), Some(25.0), &csv(&["M", "L"]));
        assert_eq!(out, vec![product(20.0, &["M", "L"])]);
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let out = filter_products(&catalog(), None, None, &[]);
        assert_eq!(out, catalog());
    }

    #[test]
    fn bounds_are_inclusive() {
        let out = filter_products(&catalog(), Some(10.0), Some(20.0), &[]);
        let prices: Vec<f64> = out.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 20.0]);
    }

    #[test]
    fn size_match_ignores_case() {
        let out = filter_products(&catalog(), None, None, &csv(&["s"]));
        assert_eq!(out, vec![product(10.0, &["S"])]);
    }

    #[test]
    fn products_without_sizes_never_match_a_size_filter() {
        let mut items = catalog();
        items.push(Product {
            title: None,
            description: None,
            price: 15.0,
            sizes: None,
        });
        let out = filter_products(&items, None, None, &csv(&["S", "M", "L"]));
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|p| p.sizes.is_some()));
    }

    #[test]
    fn blank_size_tokens_are_no_constraint() {
        let out = filter_products(&catalog(), None, None, &csv(&[" ", ""]));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_products(&[], Some(1.0), Some(2.0), &csv(&["M"])).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let sizes = csv(&["L"]);
        let once = filter_products(&catalog(), Some(15.0), None, &sizes);
        let twice = filter_products(&once, Some(15.0), None, &sizes);
        assert_eq!(once, twice);
    }

    #[test]
    fn result_never_violates_bounds() {
        let (min, max) = (12.0, 28.0);
        for p in filter_products(&catalog(), Some(min), Some(max), &[]) {
            assert!(p.price >= min && p.price <= max);
        }
    }
}
