//! Persistence seam for parts, machines, and their links.
//!
//! The production implementation is the Neo4j store in `mpm-graph`;
//! [`crate::memory::InMemoryStore`] backs the tests.

use async_trait::async_trait;

use crate::error::InventoryResult;
use crate::machine::model::{Machine, MachineWithParts, NewMachine};
use crate::part::model::{NewPart, Part};
use crate::stats::InventoryStats;

#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Persist a new part node. `None` means the store returned no record.
    async fn create_part(&self, uuid: &str, part: &NewPart) -> InventoryResult<Option<Part>>;

    /// Persist a new machine node. `None` means the store returned no record.
    async fn create_machine(&self, uuid: &str, machine: &NewMachine) -> InventoryResult<Option<Machine>>;

    /// Merge a BELONGS_TO relation from the part with `part_number` to the
    /// machine named `machine_name`.
    ///
    /// Returns `false` when either end is missing; nothing is written then.
    async fn link_part_to_machine(&self, machine_name: &str, part_number: &str) -> InventoryResult<bool>;

    /// First part with the given number, ordered by uuid.
    async fn find_part_by_number(&self, number: &str) -> InventoryResult<Option<Part>>;

    async fn inventory_stats(&self) -> InventoryResult<InventoryStats>;

    /// Machine matching both name and site, with all linked parts.
    async fn find_machine_with_parts(&self, name: &str, site: &str) -> InventoryResult<Option<MachineWithParts>>;
}
