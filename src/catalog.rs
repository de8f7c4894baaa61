//! Item catalog loading.
//!
//! The core treats the item collection as an externally injected, read-only
//! input. This module supplies it: either the built-in demo set or a JSON
//! file of `[{ "name": ..., "updated": ... }]` records.

use std::path::Path;

use crate::model::types::Item;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate item id {0:?}")]
    DuplicateId(String),
}

/// The demo project set.
pub fn demo_catalog() -> Vec<Item> {
    vec![
        Item::new("frontend-app", "7 days ago"),
        Item::new("backend-api", "11 days ago"),
        Item::new("mobile-app", "28 days ago"),
        Item::new("data-pipeline", "7 days ago"),
        Item::new("ml-service", "13 days ago"),
    ]
}

/// Load items from a JSON file, backfilling ids and rejecting duplicates.
pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let mut items: Vec<Item> = serde_json::from_str(&raw)?;
    let mut seen = std::collections::HashSet::new();
    for item in &mut items {
        item.ensure_id();
        if !seen.insert(item.id.clone()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }
    Ok(items)
}
