//! Demonstration entry point: walks the catalog through a fixed sequence of
//! operations and logs one status line per outcome.

use anyhow::Result;
use stockroom_catalog::{Catalog, CatalogEvent};

fn main() -> Result<()> {
    stockroom_observability::init();

    let mut inventory = Catalog::new();

    tracing::info!("adding products");
    report(inventory.upsert("1", "Laptop", "Electronics", 50)?);
    report(inventory.upsert("2", "Chair", "Furniture", 20)?);
    report(inventory.upsert("3", "Apple", "Groceries", 5)?);

    tracing::info!("updating products");
    report(inventory.upsert("1", "Laptop", "Electronics", 10)?);

    tracing::info!("removing product");
    tracing::info!("{}", inventory.remove("2")?);

    tracing::info!("products in category");
    list_category(&inventory, "Electronics")?;

    tracing::info!("top 2 products by stock");
    for product in inventory.top_by_stock(2)? {
        tracing::info!("{product}");
    }

    tracing::info!("merging inventories");
    let mut other = Catalog::new();
    report(other.upsert("4", "Table", "Furniture", 30)?);
    report(other.upsert("1", "Laptop", "Electronics", 60)?);
    report(inventory.merge_from(&other));

    tracing::info!("after merging");
    for category in ["Electronics", "Clothing", "Groceries", "Furniture"] {
        list_category(&inventory, category)?;
    }

    Ok(())
}

fn report(events: Vec<CatalogEvent>) {
    for event in events {
        tracing::info!(event_type = event.event_type(), "{event}");
    }
}

fn list_category(catalog: &Catalog, category: &str) -> Result<()> {
    let products = catalog.products_in_category(category)?;
    if products.is_empty() {
        tracing::info!("No products found in the category: '{category}'.");
    } else {
        tracing::info!("Products in category '{category}':");
        for product in products {
            tracing::info!("{product}");
        }
    }
    Ok(())
}
