//! Versioned export document.
//!
//! ```json
//! {
//!   "products": [{"id": "...", "name": "Mouse", "quantity": 3}],
//!   "exportedAt": "2026-10-14T09:30:00Z",
//!   "version": "1.0"
//! }
//! ```

use crate::error::{StockError, ValidationError};
use crate::model::{Product, ProductDraft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(alias = "produtos")]
    pub products: Vec<Product>,
    #[serde(alias = "exportadoEm")]
    pub exported_at: DateTime<Utc>,
    #[serde(alias = "versao")]
    pub version: String,
}

impl Snapshot {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            exported_at: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, StockError> {
        serde_json::to_string_pretty(self).map_err(|e| StockError::Snapshot(e.to_string()))
    }

    /// Parses a snapshot, rejecting versions this build does not understand.
    pub fn from_json(raw: &str) -> Result<Self, StockError> {
        let snapshot: Snapshot =
            serde_json::from_str(raw).map_err(|e| StockError::Snapshot(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StockError::Snapshot(format!(
                "Unsupported snapshot version: {}",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }

    /// Suggested file name, e.g. `inventory-backup-2026-10-14.json`.
    pub fn file_name(&self) -> String {
        format!(
            "inventory-backup-{}.json",
            self.exported_at.format("%Y-%m-%d")
        )
    }
}

/// Outcome of merging a snapshot into a store.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: Vec<Product>,
    pub skipped: Vec<(ProductDraft, ValidationError)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn test_wire_field_names() {
        let snapshot = Snapshot::new(vec![Product {
            id: ProductId::from("a"),
            name: "Mouse".into(),
            quantity: 3,
        }]);
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["version"], "1.0");
        assert!(json["exportedAt"].is_string());
        assert_eq!(json["products"][0]["name"], "Mouse");
    }

    #[test]
    fn test_rejects_unknown_version() {
        let raw = r#"{"products":[],"exportedAt":"2026-01-01T00:00:00Z","version":"2.0"}"#;
        let err = Snapshot::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("2.0"));
    }

    #[test]
    fn test_reads_legacy_snapshot() {
        let raw = r#"{
            "produtos": [{"id": "1700000000000", "nome": "Webcam HD", "quantidade": 12}],
            "exportadoEm": "2024-03-01T10:00:00.000Z",
            "versao": "1.0"
        }"#;
        let snapshot = Snapshot::from_json(raw).unwrap();
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].name, "Webcam HD");
    }

    #[test]
    fn test_file_name_uses_export_date() {
        let raw = r#"{"products":[],"exportedAt":"2026-10-14T23:59:00Z","version":"1.0"}"#;
        let snapshot = Snapshot::from_json(raw).unwrap();
        assert_eq!(snapshot.file_name(), "inventory-backup-2026-10-14.json");
    }
}
