//! Inventory count queries.

use anyhow::Result;
use mpm_core::InventoryStats;
use neo4rs::Query;

use super::decode;
use crate::GraphClient;

/// Three independent counts evaluated in one round trip.
pub const INVENTORY_STATS: &str = "
    CALL {
        MATCH (m:Machine) RETURN count(m) AS machineCount
    }
    CALL {
        MATCH (p:Part) RETURN count(p) AS partCount
    }
    CALL {
        MATCH (p:Part) WHERE NOT (p)-[:BELONGS_TO]->() RETURN count(p) AS unlinkedCount
    }
    RETURN machineCount, partCount, unlinkedCount";

/// Count machines, parts, and parts without a BELONGS_TO relation.
pub async fn inventory_stats(client: &GraphClient) -> Result<InventoryStats> {
    let row = client
        .query_one(Query::new(INVENTORY_STATS.to_string()))
        .await?
        .ok_or_else(|| anyhow::anyhow!("Inventory count query returned no row"))?;

    let machines: i64 = decode(&row, "machineCount")?;
    let parts: i64 = decode(&row, "partCount")?;
    let unlinked: i64 = decode(&row, "unlinkedCount")?;

    Ok(InventoryStats {
        total_machines: machines.max(0) as u64,
        total_parts: parts.max(0) as u64,
        unlinked_parts: unlinked.max(0) as u64,
    })
}
