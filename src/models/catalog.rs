//! Demo Catalog
//!
//! A stand-in for the expensive query a real deployment would paginate.

use serde::{Deserialize, Serialize};

/// One catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 1-based product id
    pub id: u64,
    /// Display name
    pub name: String,
}

/// Seeds `size` products with sequential ids.
pub fn seed_catalog(size: u64) -> Vec<Product> {
    (1..=size)
        .map(|id| Product {
            id,
            name: format!("product_{}", id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = seed_catalog(3);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].id, 1);
        assert_eq!(catalog[2].name, "product_3");
    }

    #[test]
    fn test_product_roundtrip() {
        let product = Product {
            id: 7,
            name: "product_7".to_string(),
        };
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
