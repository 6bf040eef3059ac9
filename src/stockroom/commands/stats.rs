use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ProductStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ProductStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(store.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductDraft;
    use crate::store::memory::MemBackend;

    #[test]
    fn test_counts_low_and_empty_separately() {
        let mut store = ProductStore::open(MemBackend::new());
        for (name, qty) in [("AA", 0), ("BB", 1), ("CC", 5), ("DD", 6)] {
            store.add(&ProductDraft::new(name, qty)).unwrap();
        }
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.low_or_empty, 2);
        assert_eq!(stats.out_of_stock, 1);
    }
}
