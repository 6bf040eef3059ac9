use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_products, DisplayProduct};
use crate::store::{ProductStore, StorageBackend};

/// Lists products, optionally filtered by a name search.
///
/// Listed entries keep the index they have in the unfiltered list.
pub fn run<B: StorageBackend>(store: &ProductStore<B>, search: Option<&str>) -> Result<CmdResult> {
    let matching: Vec<_> = store.query(search).into_iter().map(|p| &p.id).collect();
    let listed: Vec<DisplayProduct> = index_products(store.products())
        .into_iter()
        .filter(|dp| matching.contains(&&dp.product.id))
        .collect();

    Ok(CmdResult::default()
        .with_listed_products(listed)
        .with_stats(store.stats()))
}
