use crate::error::{Result, StockError};
use crate::index::{resolve, ProductSelector};
use crate::model::ProductId;
use crate::store::{ProductStore, StorageBackend};

/// Resolves every selector up front, failing on the first unknown one so
/// that multi-product commands either touch all requested products or none.
pub fn resolve_selectors<B: StorageBackend>(
    store: &ProductStore<B>,
    selectors: &[ProductSelector],
) -> Result<Vec<(ProductSelector, ProductId)>> {
    selectors
        .iter()
        .map(|sel| {
            resolve(store.products(), sel)
                .map(|id| (sel.clone(), id))
                .ok_or_else(|| StockError::NotFound(sel.to_string()))
        })
        .collect()
}
