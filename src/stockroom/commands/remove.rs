use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ProductSelector;
use crate::model::ProductId;
use crate::store::{ProductStore, StorageBackend};

use super::helpers::resolve_selectors;

pub fn run<B: StorageBackend>(
    store: &mut ProductStore<B>,
    selectors: &[ProductSelector],
) -> Result<CmdResult> {
    // Resolve against the list as it is now; positions shift once products go.
    let resolved = resolve_selectors(store, selectors)?;
    let ids: Vec<ProductId> = resolved.iter().map(|(_, id)| id.clone()).collect();
    let removed = store.remove_many(&ids)?;

    let mut result = CmdResult::default();
    for product in &removed {
        let selector = resolved
            .iter()
            .find(|(_, id)| id == &product.id)
            .map(|(sel, _)| sel.to_string())
            .unwrap_or_else(|| product.id.to_string());
        result.add_message(CmdMessage::success(format!(
            "Product removed ({}): {}",
            selector, product.name
        )));
    }

    Ok(result.with_affected_products(removed))
}
