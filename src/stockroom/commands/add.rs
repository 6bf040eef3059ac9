use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductDraft;
use crate::store::{ProductStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut ProductStore<B>, draft: ProductDraft) -> Result<CmdResult> {
    let product = store.add(&draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {} ({})",
        product.name, product.quantity
    )));
    Ok(result.with_affected_products(vec![product]))
}
