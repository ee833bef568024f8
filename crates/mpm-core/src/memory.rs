//! In-memory implementation of [`InventoryStore`].
//!
//! Mirrors the graph store's semantics (first match by uuid on ambiguous
//! keys, merge on link) without a database. Used by the test suites.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::InventoryResult;
use crate::machine::model::{Machine, MachineWithParts, NewMachine};
use crate::part::model::{NewPart, Part};
use crate::stats::InventoryStats;
use crate::store::InventoryStore;

#[derive(Default)]
struct Graph {
    parts: HashMap<String, Part>,
    machines: HashMap<String, Machine>,
    /// (part uuid, machine uuid)
    belongs_to: BTreeSet<(String, String)>,
}

impl Graph {
    fn first_part_by_number(&self, number: &str) -> Option<&Part> {
        let mut candidates: Vec<&Part> = self.parts.values().filter(|p| p.number == number).collect();
        candidates.sort_by(|a, b| a.uuid.cmp(&b.uuid));
        if candidates.len() > 1 {
            warn!(number, matches = candidates.len(), "Part number is ambiguous, using first by uuid");
        }
        candidates.into_iter().next()
    }

    fn first_machine_by<F>(&self, key: &str, pred: F) -> Option<&Machine>
    where
        F: Fn(&Machine) -> bool,
    {
        let mut candidates: Vec<&Machine> = self.machines.values().filter(|m| pred(m)).collect();
        candidates.sort_by(|a, b| a.uuid.cmp(&b.uuid));
        if candidates.len() > 1 {
            warn!(key, matches = candidates.len(), "Machine lookup is ambiguous, using first by uuid");
        }
        candidates.into_iter().next()
    }
}

/// Store backed by process memory.
#[derive(Default)]
pub struct InMemoryStore {
    graph: RwLock<Graph>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of BELONGS_TO relations currently held.
    pub async fn relation_count(&self) -> usize {
        self.graph.read().await.belongs_to.len()
    }
}

#[async_trait]
impl InventoryStore for InMemoryStore {
    async fn create_part(&self, uuid: &str, part: &NewPart) -> InventoryResult<Option<Part>> {
        let created = Part::from_new(uuid, part);
        self.graph.write().await.parts.insert(uuid.to_string(), created.clone());
        Ok(Some(created))
    }

    async fn create_machine(&self, uuid: &str, machine: &NewMachine) -> InventoryResult<Option<Machine>> {
        let created = Machine::from_new(uuid, machine);
        self.graph.write().await.machines.insert(uuid.to_string(), created.clone());
        Ok(Some(created))
    }

    async fn link_part_to_machine(&self, machine_name: &str, part_number: &str) -> InventoryResult<bool> {
        let mut graph = self.graph.write().await;

        let machine_id = match graph.first_machine_by(machine_name, |m| m.name == machine_name) {
            Some(m) => m.uuid.clone(),
            None => return Ok(false),
        };
        let part_id = match graph.first_part_by_number(part_number) {
            Some(p) => p.uuid.clone(),
            None => return Ok(false),
        };

        graph.belongs_to.insert((part_id, machine_id));
        Ok(true)
    }

    async fn find_part_by_number(&self, number: &str) -> InventoryResult<Option<Part>> {
        let graph = self.graph.read().await;

        Ok(graph.first_part_by_number(number).map(|part| {
            let linked_machine = graph
                .belongs_to
                .iter()
                .filter(|(p, _)| *p == part.uuid)
                .filter_map(|(_, m)| graph.machines.get(m))
                .map(|m| m.name.clone())
                .next();

            Part {
                linked_machine,
                ..part.clone()
            }
        }))
    }

    async fn inventory_stats(&self) -> InventoryResult<InventoryStats> {
        let graph = self.graph.read().await;

        let linked: BTreeSet<&String> = graph.belongs_to.iter().map(|(p, _)| p).collect();
        let unlinked = graph.parts.keys().filter(|id| !linked.contains(id)).count();

        Ok(InventoryStats {
            total_machines: graph.machines.len() as u64,
            total_parts: graph.parts.len() as u64,
            unlinked_parts: unlinked as u64,
        })
    }

    async fn find_machine_with_parts(&self, name: &str, site: &str) -> InventoryResult<Option<MachineWithParts>> {
        let graph = self.graph.read().await;

        let Some(machine) = graph.first_machine_by(name, |m| m.name == name && m.site == site) else {
            return Ok(None);
        };

        let mut parts: Vec<Part> = graph
            .belongs_to
            .iter()
            .filter(|(_, m)| *m == machine.uuid)
            .filter_map(|(p, _)| graph.parts.get(p))
            .cloned()
            .collect();
        parts.sort_by(|a, b| a.uuid.cmp(&b.uuid));

        Ok(Some(MachineWithParts {
            machine: machine.clone(),
            parts,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(number: &str) -> NewPart {
        NewPart {
            name: "Gear".to_string(),
            number: number.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_numbers_resolve_to_lowest_uuid() {
        let store = InMemoryStore::new();
        store.create_part("b-uuid", &part("P-1")).await.unwrap();
        store.create_part("a-uuid", &part("P-1")).await.unwrap();

        let found = store.find_part_by_number("P-1").await.unwrap().unwrap();
        assert_eq!(found.uuid, "a-uuid");
    }

    #[tokio::test]
    async fn test_link_merges_single_relation() {
        let store = InMemoryStore::new();
        let lathe = NewMachine {
            name: "Lathe".to_string(),
            site: "Plant A".to_string(),
            description: None,
        };
        store.create_machine("m-1", &lathe).await.unwrap();
        store.create_part("p-1", &part("P-1")).await.unwrap();

        assert!(store.link_part_to_machine("Lathe", "P-1").await.unwrap());
        assert!(store.link_part_to_machine("Lathe", "P-1").await.unwrap());
        assert_eq!(store.relation_count().await, 1);

        let found = store.find_part_by_number("P-1").await.unwrap().unwrap();
        assert_eq!(found.linked_machine.as_deref(), Some("Lathe"));
    }

    #[tokio::test]
    async fn test_failed_link_writes_nothing() {
        let store = InMemoryStore::new();
        store.create_part("p-1", &part("P-1")).await.unwrap();

        assert!(!store.link_part_to_machine("Ghost", "P-1").await.unwrap());
        assert_eq!(store.relation_count().await, 0);
    }
}
