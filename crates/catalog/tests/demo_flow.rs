//! End-to-end flow over the public API, mirroring the demonstration binary.

use stockroom_catalog::{Catalog, CatalogEvent, LowStockKind, RemovalOutcome};

fn ids(products: &[stockroom_catalog::Product]) -> Vec<&str> {
    products.iter().map(|p| p.id().as_str()).collect()
}

#[test]
fn demonstration_sequence_reaches_the_expected_final_state() {
    let mut inventory = Catalog::new();

    // 1. Seed three products.
    inventory.upsert("1", "Laptop", "Electronics", 50).unwrap();
    inventory.upsert("2", "Chair", "Furniture", 20).unwrap();
    let events = inventory.upsert("3", "Apple", "Groceries", 5).unwrap();
    assert!(
        matches!(&events[1], CatalogEvent::LowStock(e) if e.kind == LowStockKind::OnCreate),
        "seeding with stock 5 must alert"
    );

    // 2. Update product "1" down to stock 10 (at the level, so no alert).
    let events = inventory.upsert("1", "Laptop", "Electronics", 10).unwrap();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], CatalogEvent::ProductUpdated(_)));

    // 3. Remove product "2".
    assert!(matches!(
        inventory.remove("2").unwrap(),
        RemovalOutcome::Removed(_)
    ));

    // 4. Electronics currently holds just the laptop.
    let electronics = inventory.products_in_category("Electronics").unwrap();
    assert_eq!(ids(&electronics), ["1"]);

    // 5. Top two by stock: laptop (10) then apple (5).
    let top = inventory.top_by_stock(2).unwrap();
    assert_eq!(ids(&top), ["1", "3"]);
    assert_eq!(top[0].stock(), 10);
    assert_eq!(top[1].stock(), 5);

    // 6. Merge in a second catalog.
    let mut other = Catalog::new();
    other.upsert("4", "Table", "Furniture", 30).unwrap();
    other.upsert("1", "Laptop", "Electronics", 60).unwrap();
    let events = inventory.merge_from(&other);
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], CatalogEvent::ProductAdded(e) if e.product.id().as_str() == "4"));
    assert!(matches!(
        &events[1],
        CatalogEvent::StockMerged(e) if e.previous_stock == 10 && e.stock == 60
    ));

    // 7. Final listings.
    let electronics = inventory.products_in_category("Electronics").unwrap();
    assert_eq!(ids(&electronics), ["1"]);
    assert_eq!(electronics[0].stock(), 60);

    assert!(inventory.products_in_category("Clothing").unwrap().is_empty());

    let groceries = inventory.products_in_category("Groceries").unwrap();
    assert_eq!(ids(&groceries), ["3"]);
    assert_eq!(groceries[0].stock(), 5);

    let furniture = inventory.products_in_category("Furniture").unwrap();
    assert_eq!(ids(&furniture), ["4"]);
}

#[test]
fn merge_is_one_directional_and_prefers_higher_stock() {
    let mut a = Catalog::new();
    a.upsert("1", "Laptop", "Electronics", 10).unwrap();
    let mut b = Catalog::new();
    b.upsert("1", "Laptop", "Electronics", 60).unwrap();

    a.merge_from(&b);
    assert_eq!(a.get("1").unwrap().stock(), 60);
    assert_eq!(b.get("1").unwrap().stock(), 60);

    // Reverse direction: B already holds the higher value, so merging the
    // lower catalog in changes nothing.
    let mut b2 = Catalog::new();
    b2.upsert("1", "Laptop", "Electronics", 60).unwrap();
    let mut a2 = Catalog::new();
    a2.upsert("1", "Laptop", "Electronics", 10).unwrap();
    let events = b2.merge_from(&a2);
    assert!(events.is_empty());
    assert_eq!(b2.get("1").unwrap().stock(), 60);
}
