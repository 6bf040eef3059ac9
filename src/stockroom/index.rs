//! # Display Indexes
//!
//! Product ids are UUIDs, which nobody wants to type. Listings therefore
//! number products `1, 2, 3...` in insertion order, and commands accept
//! either that number or a full id.
//!
//! Indexes are canonical: they are assigned over the *full* list, so a
//! filtered view (`list -s mo`) shows the same numbers as an unfiltered
//! one and `remove 3` means the same product in both. A number beyond the
//! end of the list is looked up as an id instead.

use crate::model::{Product, ProductId, StockStatus};
use std::str::FromStr;

/// A user input selecting one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSelector {
    Index(usize),
    Id(ProductId),
}

impl FromStr for ProductSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty product reference".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(ProductSelector::Index(n));
        }
        Ok(ProductSelector::Id(ProductId::from(s)))
    }
}

impl std::fmt::Display for ProductSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSelector::Index(n) => write!(f, "{}", n),
            ProductSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A product together with its canonical index and derived status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayProduct {
    pub index: usize,
    pub product: Product,
    pub status: StockStatus,
}

/// Numbers the full product list, starting at 1.
pub fn index_products(products: &[Product]) -> Vec<DisplayProduct> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| DisplayProduct {
            index: i + 1,
            product: p.clone(),
            status: p.status(),
        })
        .collect()
}

/// Finds the id a selector points at.
///
/// A number past the end of the list is tried as an id, since older data
/// uses all-digit ids (millisecond timestamps).
pub fn resolve(products: &[Product], selector: &ProductSelector) -> Option<ProductId> {
    match selector {
        ProductSelector::Index(n) => n
            .checked_sub(1)
            .and_then(|i| products.get(i))
            .or_else(|| find_by_id(products, &n.to_string()))
            .map(|p| p.id.clone()),
        ProductSelector::Id(id) => find_by_id(products, id.as_str()).map(|p| p.id.clone()),
    }
}

fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id.as_str() == id)
}
