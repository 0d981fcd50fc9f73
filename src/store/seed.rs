use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::Product;

const CATALOG: [(&str, i64, i64, &str); 5] = [
    ("Laptop", 99999, 50, "Electronics"),
    ("Mouse", 2999, 200, "Electronics"),
    ("Keyboard", 7999, 150, "Electronics"),
    ("Monitor", 29999, 75, "Electronics"),
    ("Desk Chair", 19999, 30, "Furniture"),
];

/// The demo catalog every fresh store starts with. Prices are in cents.
pub fn catalog(now: DateTime<Utc>) -> Vec<Product> {
    CATALOG
        .iter()
        .zip(1..)
        .map(|(&(name, cents, stock, category), id)| Product {
            id,
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            stock,
            category: category.to_string(),
            created_at: now,
            updated_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_sequential_from_one() {
        let products = catalog(Utc::now());
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(products[0].price.to_string(), "999.99");
        assert_eq!(products[4].category, "Furniture");
    }
}
