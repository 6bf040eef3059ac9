use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::snapshot::Snapshot;
use crate::store::{ProductStore, StorageBackend};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes a snapshot of the store into `dir`.
pub fn run<B: StorageBackend>(store: &ProductStore<B>, dir: &Path) -> Result<CmdResult> {
    let snapshot = store.export();
    let path = dir.join(snapshot.file_name());

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| StockError::Snapshot(e.to_string()))?;
    }
    let file = fs::File::create(&path).map_err(|e| StockError::Snapshot(e.to_string()))?;
    write_snapshot(file, &snapshot)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} products to {}",
        snapshot.products.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

fn write_snapshot<W: Write>(mut writer: W, snapshot: &Snapshot) -> Result<()> {
    let json = snapshot.to_json()?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| StockError::Snapshot(e.to_string()))?;
    Ok(())
}
