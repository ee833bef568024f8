//! Neo4j-backed [`InventoryStore`].

use async_trait::async_trait;
use mpm_core::machine::model::{Machine, MachineWithParts, NewMachine};
use mpm_core::part::model::{NewPart, Part};
use mpm_core::{InventoryResult, InventoryStats, InventoryStore};

use crate::queries;
use crate::GraphClient;

/// Inventory persisted as `:Part` and `:Machine` nodes joined by `:BELONGS_TO`.
#[derive(Clone)]
pub struct Neo4jStore {
    client: GraphClient,
}

impl Neo4jStore {
    pub fn new(client: GraphClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphClient {
        &self.client
    }
}

#[async_trait]
impl InventoryStore for Neo4jStore {
    async fn create_part(&self, uuid: &str, part: &NewPart) -> InventoryResult<Option<Part>> {
        Ok(queries::parts::create_part(&self.client, uuid, part).await?)
    }

    async fn create_machine(&self, uuid: &str, machine: &NewMachine) -> InventoryResult<Option<Machine>> {
        Ok(queries::machines::create_machine(&self.client, uuid, machine).await?)
    }

    async fn link_part_to_machine(&self, machine_name: &str, part_number: &str) -> InventoryResult<bool> {
        Ok(queries::machines::link_part_to_machine(&self.client, machine_name, part_number).await?)
    }

    async fn find_part_by_number(&self, number: &str) -> InventoryResult<Option<Part>> {
        Ok(queries::parts::find_part_by_number(&self.client, number).await?)
    }

    async fn inventory_stats(&self) -> InventoryResult<InventoryStats> {
        Ok(queries::stats::inventory_stats(&self.client).await?)
    }

    async fn find_machine_with_parts(&self, name: &str, site: &str) -> InventoryResult<Option<MachineWithParts>> {
        Ok(queries::machines::find_machine_with_parts(&self.client, name, site).await?)
    }
}
