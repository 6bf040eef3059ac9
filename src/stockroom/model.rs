use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Products with a quantity at or below this (but above zero) are low on stock.
pub const LOW_STOCK_THRESHOLD: u64 = 5;

/// Largest quantity a product can hold. Drafts are signed, so stored
/// quantities stay within `i64` range.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

/// Opaque product identifier.
///
/// New ids are UUIDs, but anything read back from storage is kept verbatim,
/// so older blobs with other id schemes keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "quantidade", deserialize_with = "bounded_quantity")]
    pub quantity: u64,
}

impl Product {
    pub fn status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }
}

fn bounded_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let quantity = u64::deserialize(deserializer)?;
    if quantity > MAX_QUANTITY {
        return Err(serde::de::Error::custom(format!(
            "quantity {} exceeds {}",
            quantity, MAX_QUANTITY
        )));
    }
    Ok(quantity)
}

/// Unvalidated input for creating or editing a product.
///
/// The quantity is signed so that negative input can be rejected with a
/// proper error instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            // Quantities above MAX_QUANTITY are rejected on read and by validation.
            quantity: i64::try_from(product.quantity).unwrap_or(i64::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    Low,
    Normal,
}

impl StockStatus {
    pub fn for_quantity(quantity: u64) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::Low => "Low",
            StockStatus::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate counts over the whole store.
///
/// `low_or_empty` only counts products with `0 < quantity <= 5`; empty
/// products are reported in `out_of_stock` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub low_or_empty: usize,
    pub out_of_stock: usize,
}

impl Stats {
    pub fn from_products(products: &[Product]) -> Self {
        let mut stats = Stats {
            total: products.len(),
            ..Stats::default()
        };
        for product in products {
            match product.status() {
                StockStatus::Low => stats.low_or_empty += 1,
                StockStatus::OutOfStock => stats.out_of_stock += 1,
                StockStatus::Normal => {}
            }
        }
        stats
    }
}
