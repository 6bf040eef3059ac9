use super::snapshot::{ImportReport, Snapshot};
use super::{StorageBackend, DEFAULT_STORAGE_KEY};
use crate::error::{PersistenceError, Result, StockError};
use crate::model::{Product, ProductDraft, ProductId, Stats};
use crate::validation::validate_draft;
use std::collections::HashSet;
use tracing::{debug, warn};

/// The authoritative product list, kept in sync with one storage slot.
///
/// Every mutation builds the next list, writes it out, and only then
/// replaces the in-memory state. A failed write therefore leaves the store
/// exactly as it was before the call.
pub struct ProductStore<B: StorageBackend> {
    backend: B,
    key: String,
    products: Vec<Product>,
}

impl<B: StorageBackend> ProductStore<B> {
    /// Opens the store on the default slot and loads its contents.
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn open_with_key(backend: B, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            products: Vec::new(),
        };
        store.products = store.load();
        store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the persisted list.
    ///
    /// Never fails: a missing slot, a read error or unparsable data all
    /// yield an empty list. Duplicate ids keep their first occurrence.
    pub fn load(&self) -> Vec<Product> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read product slot, starting empty");
                return Vec::new();
            }
        };

        let parsed: Vec<Product> = match serde_json::from_slice(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(key = %self.key, error = %e, "product slot is corrupt, starting empty");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let products: Vec<Product> = parsed
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id.clone());
                if !fresh {
                    warn!(id = %p.id, "dropping product with duplicate id");
                }
                fresh
            })
            .collect();

        debug!(key = %self.key, count = products.len(), "loaded products");
        products
    }

    /// Writes `products` as the full content of the slot.
    pub fn save(&self, products: &[Product]) -> std::result::Result<(), PersistenceError> {
        let raw = serde_json::to_vec(products)?;
        self.backend.set(&self.key, &raw)?;
        debug!(key = %self.key, count = products.len(), "saved products");
        Ok(())
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn add(&mut self, draft: &ProductDraft) -> Result<Product> {
        let valid = validate_draft(draft, &self.products, None)?;
        let product = Product {
            id: self.fresh_id(),
            name: valid.name,
            quantity: valid.quantity,
        };

        let mut next = self.products.clone();
        next.push(product.clone());
        self.commit(next)?;
        Ok(product)
    }

    pub fn update(&mut self, id: &ProductId, draft: &ProductDraft) -> Result<Product> {
        let position = self
            .position(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;
        let valid = validate_draft(draft, &self.products, Some(id))?;
        let product = Product {
            id: id.clone(),
            name: valid.name,
            quantity: valid.quantity,
        };

        let mut next = self.products.clone();
        next[position] = product.clone();
        self.commit(next)?;
        Ok(product)
    }

    /// Deletes a product, returning the removed record.
    pub fn remove(&mut self, id: &ProductId) -> Result<Product> {
        let position = self
            .position(id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;

        let mut next = self.products.clone();
        let removed = next.remove(position);
        self.commit(next)?;
        Ok(removed)
    }

    /// Deletes several products with a single write.
    ///
    /// Every id must exist; otherwise nothing is removed. Repeated ids are
    /// removed once. Returns the removed records in the order given.
    pub fn remove_many(&mut self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let mut removed = Vec::new();
        let mut next = self.products.clone();

        for id in ids {
            match next.iter().position(|p| &p.id == id) {
                Some(position) => removed.push(next.remove(position)),
                None if removed.iter().any(|p: &Product| &p.id == id) => {}
                None => return Err(StockError::NotFound(id.to_string())),
            }
        }

        self.commit(next)?;
        Ok(removed)
    }

    /// Case-insensitive substring search on names, in insertion order.
    ///
    /// A missing or blank term returns every product.
    pub fn query(&self, term: Option<&str>) -> Vec<&Product> {
        match term {
            Some(term) if !term.trim().is_empty() => {
                let needle = term.to_lowercase();
                self.products
                    .iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .collect()
            }
            _ => self.products.iter().collect(),
        }
    }

    pub fn stats(&self) -> Stats {
        Stats::from_products(&self.products)
    }

    /// Removes every product. Returns how many were dropped.
    pub fn clear(&mut self) -> Result<usize> {
        let count = self.products.len();
        self.commit(Vec::new())?;
        Ok(count)
    }

    pub fn export(&self) -> Snapshot {
        Snapshot::new(self.products.clone())
    }

    /// Merges a snapshot in as new products.
    ///
    /// Each entry goes through the normal validation (against what is
    /// already stored plus what this import has accepted so far) and gets a
    /// fresh id. Rejected entries are reported, not fatal. Accepted entries
    /// are persisted in a single write.
    pub fn import(&mut self, snapshot: Snapshot) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        let mut next = self.products.clone();

        for incoming in snapshot.products {
            let draft = ProductDraft::from(&incoming);
            match validate_draft(&draft, &next, None) {
                Ok(valid) => {
                    let product = Product {
                        id: fresh_id_among(&next),
                        name: valid.name,
                        quantity: valid.quantity,
                    };
                    next.push(product.clone());
                    report.imported.push(product);
                }
                Err(e) => report.skipped.push((draft, e)),
            }
        }

        if !report.imported.is_empty() {
            self.commit(next)?;
        }
        Ok(report)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| &p.id == id)
    }

    fn fresh_id(&self) -> ProductId {
        fresh_id_among(&self.products)
    }

    fn commit(&mut self, next: Vec<Product>) -> Result<()> {
        if let Err(e) = self.save(&next) {
            warn!(key = %self.key, error = %e, "write failed, keeping previous state");
            return Err(e.into());
        }
        self.products = next;
        Ok(())
    }
}

fn fresh_id_among(products: &[Product]) -> ProductId {
    loop {
        let id = ProductId::generate();
        if !products.iter().any(|p| p.id == id) {
            return id;
        }
    }
}
