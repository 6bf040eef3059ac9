use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::snapshot::Snapshot;
use crate::store::{ProductStore, StorageBackend};
use std::fs;
use std::path::Path;

pub fn run<B: StorageBackend>(store: &mut ProductStore<B>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path)
        .map_err(|e| StockError::Snapshot(format!("{}: {}", path.display(), e)))?;
    let snapshot = Snapshot::from_json(&raw)?;
    let report = store.import(snapshot)?;

    let mut result = CmdResult::default();
    for (draft, reason) in &report.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Skipped \"{}\": {}",
            draft.name, reason
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        report.imported.len()
    )));
    Ok(result.with_affected_products(report.imported))
}
