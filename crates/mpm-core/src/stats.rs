//! Inventory-wide counts.

use serde::{Deserialize, Serialize};

use crate::error::InventoryResult;
use crate::store::InventoryStore;

/// Totals across the whole graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_machines: u64,
    pub total_parts: u64,
    /// Parts with no outgoing BELONGS_TO relation.
    pub unlinked_parts: u64,
}

/// Count machines, parts, and unlinked parts.
pub async fn get_inventory_stats(store: &dyn InventoryStore) -> InventoryResult<InventoryStats> {
    store.inventory_stats().await
}
