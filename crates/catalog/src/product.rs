//! The product record: one inventory item.

use serde::{Deserialize, Serialize};

use stockroom_core::{CatalogError, CatalogResult, CategoryName, ProductId};

/// One inventory item.
///
/// Fields are private; the validating constructor is the only way to build
/// one, so a `Product` in hand is always well-formed (non-blank id, name and
/// category, stock never negative).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: CategoryName,
    stock: i64,
}

impl Product {
    /// Build a validated product. Checks run in argument order and the first
    /// violation wins.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
    ) -> CatalogResult<Self> {
        let id = ProductId::new(id)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::invalid_name("product name cannot be empty"));
        }
        let category = CategoryName::new(category)?;
        if stock < 0 {
            return Err(CatalogError::InvalidStock(stock));
        }
        Ok(Self {
            id,
            name,
            category,
            stock,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Whether stock has fallen below the given reorder level.
    pub fn is_low_stock(&self, reorder_level: i64) -> bool {
        self.stock < reorder_level
    }

    // Caller must guarantee `stock >= 0`; used by merge, where the value
    // comes from another catalog and is already invariant-checked.
    pub(crate) fn set_stock_unchecked(&mut self, stock: i64) {
        debug_assert!(stock >= 0, "stock must stay non-negative");
        self.stock = stock;
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (id {}, category {}, stock {})",
            self.name, self.id, self.category, self.stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_a_well_formed_product() {
        let product = Product::new("1", "Laptop", "Electronics", 50).unwrap();
        assert_eq!(product.id().as_str(), "1");
        assert_eq!(product.name(), "Laptop");
        assert_eq!(product.category().as_str(), "Electronics");
        assert_eq!(product.stock(), 50);
    }

    #[test]
    fn new_rejects_blank_id() {
        match Product::new("  ", "Laptop", "Electronics", 50) {
            Err(CatalogError::InvalidId(_)) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_blank_name() {
        match Product::new("1", "", "Electronics", 50) {
            Err(CatalogError::InvalidName(_)) => {}
            other => panic!("expected InvalidName, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_blank_category() {
        match Product::new("1", "Laptop", "   ", 50) {
            Err(CatalogError::InvalidCategory(_)) => {}
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_negative_stock() {
        match Product::new("1", "Laptop", "Electronics", -1) {
            Err(CatalogError::InvalidStock(-1)) => {}
            other => panic!("expected InvalidStock, got {other:?}"),
        }
    }

    #[test]
    fn id_check_precedes_the_others() {
        // All four arguments invalid; the id failure must win.
        match Product::new("", "", "", -5) {
            Err(CatalogError::InvalidId(_)) => {}
            other => panic!("expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn low_stock_is_strictly_below_the_level() {
        let product = Product::new("1", "Laptop", "Electronics", 10).unwrap();
        assert!(!product.is_low_stock(10));
        assert!(product.is_low_stock(11));
    }

    #[test]
    fn display_reads_as_a_status_fragment() {
        let product = Product::new("1", "Laptop", "Electronics", 50).unwrap();
        assert_eq!(
            product.to_string(),
            "Laptop (id 1, category Electronics, stock 50)"
        );
    }

    #[test]
    fn serializes_with_flat_field_names() {
        let product = Product::new("1", "Laptop", "Electronics", 50).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Laptop",
                "category": "Electronics",
                "stock": 50
            })
        );
    }
}
