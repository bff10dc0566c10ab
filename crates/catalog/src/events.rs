//! Operation outcome events.
//!
//! Every mutating catalog operation reports what it did as values rather
//! than printed text; the `Display` impls carry the human-readable status
//! lines for the demonstration binary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryName, ProductId};

use crate::product::Product;

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product: Product,
    pub previous_category: CategoryName,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockMerged. Emitted when a merge raises an existing product's
/// stock to the other catalog's higher value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMerged {
    pub product_id: ProductId,
    pub previous_stock: i64,
    pub stock: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Whether a low-stock alert fired on first insertion or on an update.
/// The distinction is cosmetic (different wording), both are alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowStockKind {
    OnCreate,
    OnUpdate,
}

/// Event: LowStock. Fired whenever a mutation leaves stock strictly below
/// the catalog's reorder level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStock {
    pub product_id: ProductId,
    pub name: String,
    pub stock: i64,
    pub reorder_level: i64,
    pub kind: LowStockKind,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ProductAdded(ProductAdded),
    ProductUpdated(ProductUpdated),
    StockMerged(StockMerged),
    LowStock(LowStock),
}

impl CatalogEvent {
    /// Stable event name/type identifier.
    pub fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductAdded(_) => "catalog.product.added",
            CatalogEvent::ProductUpdated(_) => "catalog.product.updated",
            CatalogEvent::StockMerged(_) => "catalog.product.stock_merged",
            CatalogEvent::LowStock(_) => "catalog.product.low_stock",
        }
    }

    /// When the event occurred (business time).
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ProductAdded(e) => e.occurred_at,
            CatalogEvent::ProductUpdated(e) => e.occurred_at,
            CatalogEvent::StockMerged(e) => e.occurred_at,
            CatalogEvent::LowStock(e) => e.occurred_at,
        }
    }
}

impl core::fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogEvent::ProductAdded(e) => write!(f, "Added: {}", e.product),
            CatalogEvent::ProductUpdated(e) => write!(f, "Updated: {}", e.product),
            CatalogEvent::StockMerged(e) => write!(
                f,
                "Updated product {} with higher stock: {} -> {}",
                e.product_id, e.previous_stock, e.stock
            ),
            CatalogEvent::LowStock(e) => match e.kind {
                LowStockKind::OnCreate => write!(
                    f,
                    "Alert: product \"{}\" is low in stock. Current stock: {}. Consider restocking.",
                    e.name, e.stock
                ),
                LowStockKind::OnUpdate => write!(
                    f,
                    "Alert: product \"{}\" is running low. Current stock: {}. Reorder soon.",
                    e.name, e.stock
                ),
            },
        }
    }
}
