use crate::commands::{CmdMessage, CmdResult, ProductEdit};
use crate::error::{Result, StockError};
use crate::index::ProductSelector;
use crate::model::ProductDraft;
use crate::store::{ProductStore, StorageBackend};

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    store: &mut ProductStore<B>,
    selector: &ProductSelector,
    edit: ProductEdit,
) -> Result<CmdResult> {
    if edit.is_empty() {
        return Err(StockError::Api(
            "Nothing to update: pass a new name and/or quantity".to_string(),
        ));
    }

    let (_, id) = resolve_selectors(store, std::slice::from_ref(selector))?
        .pop()
        .ok_or_else(|| StockError::NotFound(selector.to_string()))?;
    let current = store
        .get(&id)
        .ok_or_else(|| StockError::NotFound(id.to_string()))?;

    let mut draft = ProductDraft::from(current);
    if let Some(name) = edit.name {
        draft.name = name;
    }
    if let Some(quantity) = edit.quantity {
        draft.quantity = quantity;
    }

    let product = store.update(&id, &draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {} ({})",
        selector, product.name, product.quantity
    )));
    Ok(result.with_affected_products(vec![product]))
}
