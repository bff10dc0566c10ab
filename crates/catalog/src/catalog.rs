//! The catalog: dual-indexed inventory state and its operations.

use std::collections::{BTreeMap, BinaryHeap, HashMap};

use chrono::Utc;

use stockroom_core::{CatalogError, CatalogResult, CategoryName, ProductId};

use crate::events::{
    CatalogEvent, LowStock, LowStockKind, ProductAdded, ProductUpdated, StockMerged,
};
use crate::product::Product;

/// Default stock threshold below which low-stock alerts fire.
pub const DEFAULT_REORDER_LEVEL: i64 = 10;

/// Immutable catalog configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Stock strictly below this level triggers a low-stock alert.
    pub reorder_level: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            reorder_level: DEFAULT_REORDER_LEVEL,
        }
    }
}

/// Outcome of a removal: a missing product is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed(Product),
    NotFound(ProductId),
}

impl core::fmt::Display for RemovalOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RemovalOutcome::Removed(product) => write!(f, "Removed: {product}"),
            RemovalOutcome::NotFound(id) => write!(f, "Product id '{id}' not found."),
        }
    }
}

/// By-id entry. The sequence number records insertion order and is the
/// documented tie-break for top-K ranking and merge iteration.
#[derive(Debug, Clone)]
struct StoredProduct {
    product: Product,
    seq: u64,
}

/// In-memory inventory catalog.
///
/// Owns two indexes over the same product set: a by-id map (the
/// authoritative records) and a by-category map of id buckets. Buckets hold
/// ids only; full records are always re-derived from the by-id map, so the
/// two indexes cannot drift into holding different copies. Buckets that
/// become empty are dropped.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
    products: HashMap<ProductId, StoredProduct>,
    categories: BTreeMap<CategoryName, Vec<ProductId>>,
    next_seq: u64,
}

impl Catalog {
    /// Empty catalog with the default reorder level.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            products: HashMap::new(),
            categories: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub fn reorder_level(&self) -> i64 {
        self.config.reorder_level
    }

    /// Insert a new product or update an existing one in place.
    ///
    /// Validation runs first and the call mutates nothing on failure. An
    /// update whose category changed moves the product between buckets; in
    /// all cases the product re-enters its bucket, so bucket order is the
    /// order in which products last entered the category.
    pub fn upsert(
        &mut self,
        id: &str,
        name: &str,
        category: &str,
        stock: i64,
    ) -> CatalogResult<Vec<CatalogEvent>> {
        let product = Product::new(id, name, category, stock)?;
        Ok(self.upsert_product(product))
    }

    fn upsert_product(&mut self, product: Product) -> Vec<CatalogEvent> {
        let occurred_at = Utc::now();
        let mut events = Vec::with_capacity(2);

        let previous_category = self
            .products
            .get(product.id())
            .map(|stored| stored.product.category().clone());

        let low_stock_kind = match previous_category {
            Some(previous_category) => {
                self.remove_from_bucket(&previous_category, product.id());
                self.push_into_bucket(product.category().clone(), product.id().clone());
                if let Some(stored) = self.products.get_mut(product.id()) {
                    stored.product = product.clone();
                }
                events.push(CatalogEvent::ProductUpdated(ProductUpdated {
                    product: product.clone(),
                    previous_category,
                    occurred_at,
                }));
                LowStockKind::OnUpdate
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.push_into_bucket(product.category().clone(), product.id().clone());
                self.products.insert(
                    product.id().clone(),
                    StoredProduct {
                        product: product.clone(),
                        seq,
                    },
                );
                events.push(CatalogEvent::ProductAdded(ProductAdded {
                    product: product.clone(),
                    occurred_at,
                }));
                LowStockKind::OnCreate
            }
        };

        if product.is_low_stock(self.config.reorder_level) {
            events.push(CatalogEvent::LowStock(LowStock {
                product_id: product.id().clone(),
                name: product.name().to_string(),
                stock: product.stock(),
                reorder_level: self.config.reorder_level,
                kind: low_stock_kind,
                occurred_at,
            }));
        }

        events
    }

    /// Remove a product from both indexes, dropping its bucket if emptied.
    pub fn remove(&mut self, id: &str) -> CatalogResult<RemovalOutcome> {
        let id = ProductId::new(id)?;
        match self.products.remove(&id) {
            Some(stored) => {
                let category = stored.product.category().clone();
                self.remove_from_bucket(&category, &id);
                Ok(RemovalOutcome::Removed(stored.product))
            }
            None => Ok(RemovalOutcome::NotFound(id)),
        }
    }

    /// All products in a category, ordered by when each product last
    /// entered the category. Missing or emptied categories yield an empty
    /// vector.
    pub fn products_in_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let category = CategoryName::new(category)?;
        let Some(bucket) = self.categories.get(&category) else {
            return Ok(Vec::new());
        };
        Ok(bucket
            .iter()
            .filter_map(|id| self.products.get(id))
            .map(|stored| stored.product.clone())
            .collect())
    }

    /// The `min(k, len)` products with the highest stock, strictly ordered:
    /// stock descending, ties broken by insertion order. Repeat calls
    /// without intervening mutation return the same sequence.
    pub fn top_by_stock(&self, k: usize) -> CatalogResult<Vec<Product>> {
        if k == 0 {
            return Err(CatalogError::invalid_argument("k must be positive"));
        }

        let mut heap: BinaryHeap<Ranked<'_>> = self
            .products
            .values()
            .map(|stored| Ranked {
                stock: stored.product.stock(),
                seq: stored.seq,
                product: &stored.product,
            })
            .collect();

        let mut top = Vec::with_capacity(k.min(self.products.len()));
        while top.len() < k {
            let Some(ranked) = heap.pop() else {
                break;
            };
            top.push(ranked.product.clone());
        }
        Ok(top)
    }

    /// One-way merge: for every product of `other`, adopt its stock if
    /// strictly greater than ours (name/category untouched), or import the
    /// product wholesale if we do not know the id. `other` is never
    /// mutated. Products are visited in `other`'s insertion order.
    pub fn merge_from(&mut self, other: &Catalog) -> Vec<CatalogEvent> {
        let mut incoming: Vec<&StoredProduct> = other.products.values().collect();
        incoming.sort_by_key(|stored| stored.seq);

        let mut events = Vec::new();
        for stored in incoming {
            let theirs = &stored.product;
            match self.products.get_mut(theirs.id()) {
                Some(ours) => {
                    if theirs.stock() > ours.product.stock() {
                        let previous_stock = ours.product.stock();
                        // Buckets key by id, so a pure stock change needs
                        // no category re-indexing.
                        ours.product.set_stock_unchecked(theirs.stock());
                        events.push(CatalogEvent::StockMerged(StockMerged {
                            product_id: theirs.id().clone(),
                            previous_stock,
                            stock: theirs.stock(),
                            occurred_at: Utc::now(),
                        }));
                    }
                }
                None => events.extend(self.upsert_product(theirs.clone())),
            }
        }
        events
    }

    /// Point lookup by id. Unknown (or blank) ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id).map(|stored| &stored.product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Category names currently holding at least one product, in name order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories.keys()
    }

    fn push_into_bucket(&mut self, category: CategoryName, id: ProductId) {
        self.categories.entry(category).or_default().push(id);
    }

    fn remove_from_bucket(&mut self, category: &CategoryName, id: &ProductId) {
        if let Some(bucket) = self.categories.get_mut(category) {
            bucket.retain(|candidate| candidate != id);
            if bucket.is_empty() {
                self.categories.remove(category);
            }
        }
    }
}

/// Max-heap key for top-K extraction: highest stock first, then earliest
/// insertion. Sequence numbers are unique, so the ordering is total.
struct Ranked<'a> {
    stock: i64,
    seq: u64,
    product: &'a Product,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.stock
            .cmp(&other.stock)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == core::cmp::Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}
