//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every stockroom operation, whatever the UI.
//!
//! The facade:
//! - **Normalizes inputs** (user references like `3` or an id become
//!   [`ProductSelector`]s)
//! - **Dispatches** to the matching command
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! `StockApi<B: StorageBackend>` is generic over storage so the same facade
//! runs on [`FsBackend`](crate::store::fs::FsBackend) in production and on
//! [`MemBackend`](crate::store::memory::MemBackend) in tests.

use crate::commands;
use crate::error::{Result, StockError};
use crate::index::ProductSelector;
use crate::model::ProductDraft;
use crate::store::{ProductStore, StorageBackend};
use std::path::{Path, PathBuf};

/// The main API facade. Owns the store for the life of the process.
pub struct StockApi<B: StorageBackend> {
    store: ProductStore<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> StockApi<B> {
    pub fn new(store: ProductStore<B>, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn add_product(&mut self, name: String, quantity: i64) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, ProductDraft::new(name, quantity))
    }

    pub fn update_product(
        &mut self,
        reference: &str,
        edit: commands::ProductEdit,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(reference)?;
        commands::update::run(&mut self.store, &selector, edit)
    }

    pub fn remove_products<I: AsRef<str>>(
        &mut self,
        references: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(references)?;
        commands::remove::run(&mut self.store, &selectors)
    }

    pub fn list_products(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn export_products(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, dir)
    }

    pub fn import_products(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn seed_demo(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store)
    }

    pub fn clear_products(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store, confirmed)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn store(&self) -> &ProductStore<B> {
        &self.store
    }
}

fn parse_selector(input: &str) -> Result<ProductSelector> {
    input.parse().map_err(StockError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ProductSelector>> {
    if inputs.is_empty() {
        return Err(StockError::Api("No product given".to_string()));
    }
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ProductEdit};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    fn api() -> StockApi<MemBackend> {
        StockApi::new(
            ProductStore::open(MemBackend::new()),
            PathBuf::from("/nonexistent"),
        )
    }

    #[test]
    fn test_add_dispatches_to_store() {
        let mut api = api();
        let result = api.add_product("Mouse".into(), 3).unwrap();
        assert_eq!(result.affected_products[0].name, "Mouse");
        assert_eq!(api.store().products().len(), 1);
    }

    #[test]
    fn test_update_accepts_index_or_id() {
        let mut api = api();
        let id = api.add_product("Mouse".into(), 3).unwrap().affected_products[0]
            .id
            .clone();

        api.update_product("1", ProductEdit::new(None, Some(4)))
            .unwrap();
        api.update_product(id.as_str(), ProductEdit::new(None, Some(5)))
            .unwrap();
        assert_eq!(api.store().products()[0].quantity, 5);
    }

    #[test]
    fn test_remove_requires_references() {
        let mut api = api();
        let empty: [&str; 0] = [];
        assert!(matches!(
            api.remove_products(&empty),
            Err(StockError::Api(_))
        ));
        assert!(matches!(api.remove_products(&["0"]), Err(StockError::Api(_))));
    }

    #[test]
    fn test_remove_unknown_id_is_not_found() {
        let mut api = api();
        assert!(matches!(
            api.remove_products(&["no-such-id"]),
            Err(StockError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_and_stats() {
        let mut api = api();
        api.seed_demo().unwrap();
        assert_eq!(api.list_products(Some("mo")).unwrap().listed_products.len(), 2);
        assert_eq!(api.stats().unwrap().stats.unwrap().total, 5);
    }

    #[test]
    fn test_config_uses_data_dir() {
        let dir = TempDir::new().unwrap();
        let api = StockApi::new(
            ProductStore::open(MemBackend::new()),
            dir.path().to_path_buf(),
        );
        api.config(ConfigAction::Set("export-dir".into(), "out".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}
