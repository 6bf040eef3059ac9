//! Demo data for trying the tool out. Not part of the store contract.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::ProductDraft;
use crate::store::{ProductStore, StorageBackend};

pub const DEMO_PRODUCTS: &[(&str, i64)] = &[
    ("Notebook Dell", 15),
    ("Mouse Logitech", 3),
    ("Teclado Mecânico", 0),
    ("Monitor 24\"", 8),
    ("Webcam HD", 12),
];

/// Adds the demo products, skipping any whose name is already taken.
pub fn run<B: StorageBackend>(store: &mut ProductStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for (name, quantity) in DEMO_PRODUCTS {
        match store.add(&ProductDraft::new(*name, *quantity)) {
            Ok(product) => result.affected_products.push(product),
            Err(StockError::Validation(reason)) => {
                result.add_message(CmdMessage::info(format!("Skipped \"{}\": {}", name, reason)))
            }
            Err(e) => return Err(e),
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Added {} demo products",
        result.affected_products.len()
    )));
    Ok(result)
}
