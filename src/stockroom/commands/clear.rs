use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::{ProductStore, StorageBackend};

/// Removes every product. Requires explicit confirmation.
pub fn run<B: StorageBackend>(store: &mut ProductStore<B>, confirmed: bool) -> Result<CmdResult> {
    if !confirmed {
        return Err(StockError::Api(
            "Refusing to clear all data without confirmation (pass --yes)".to_string(),
        ));
    }

    let removed = store.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Removed {} products", removed)));
    Ok(result)
}
