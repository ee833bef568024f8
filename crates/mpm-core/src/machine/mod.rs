//! Machines and part membership.

pub mod model;

use tracing::info;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};
use crate::store::InventoryStore;
use model::{LinkConfirmation, Machine, MachineWithParts, NewMachine};

/// Register a new machine.
pub async fn create_machine(store: &dyn InventoryStore, machine: &NewMachine) -> InventoryResult<Machine> {
    let id = Uuid::new_v4().to_string();

    let created = store
        .create_machine(&id, machine)
        .await?
        .ok_or_else(|| InventoryError::Persistence("machine".to_string()))?;

    info!(uuid = %created.uuid, name = %created.name, site = %created.site, "Created machine");
    Ok(created)
}

/// Link the part with `part_number` to the machine named `machine_name`.
///
/// Linking an already linked pair leaves the single relation in place.
pub async fn link_part_to_machine(
    store: &dyn InventoryStore,
    machine_name: &str,
    part_number: &str,
) -> InventoryResult<LinkConfirmation> {
    if !store.link_part_to_machine(machine_name, part_number).await? {
        return Err(InventoryError::LinkTargetNotFound {
            machine: machine_name.to_string(),
            part: part_number.to_string(),
        });
    }

    info!(machine = machine_name, part = part_number, "Linked part to machine");
    Ok(LinkConfirmation::new(part_number, machine_name))
}

/// Get a machine by name and site together with its linked parts.
pub async fn get_machine_with_parts(
    store: &dyn InventoryStore,
    name: &str,
    site: &str,
) -> InventoryResult<MachineWithParts> {
    store
        .find_machine_with_parts(name, site)
        .await?
        .ok_or_else(|| InventoryError::MachineNotFound {
            name: name.to_string(),
            site: site.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use crate::part::model::NewPart;
    use crate::stats::get_inventory_stats;

    fn machine(name: &str, site: &str) -> NewMachine {
        NewMachine {
            name: name.to_string(),
            site: site.to_string(),
            description: None,
        }
    }

    async fn seed_part(store: &InMemoryStore, number: &str) {
        let part = NewPart {
            name: format!("Part {}", number),
            number: number.to_string(),
            description: None,
        };
        store
            .create_part(&Uuid::new_v4().to_string(), &part)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_machine() {
        let store = InMemoryStore::new();
        let created = create_machine(&store, &machine("Lathe", "Plant A")).await.unwrap();
        assert_eq!(created.name, "Lathe");
        assert_eq!(created.site, "Plant A");
        assert!(created.description.is_none());
        assert!(Uuid::parse_str(&created.uuid).is_ok());
    }

    #[tokio::test]
    async fn test_link_is_idempotent() {
        let store = InMemoryStore::new();
        create_machine(&store, &machine("Lathe", "Plant A")).await.unwrap();
        seed_part(&store, "P-1").await;
        seed_part(&store, "P-2").await;

        let first = link_part_to_machine(&store, "Lathe", "P-1").await.unwrap();
        assert_eq!(first.message, "Part 'P-1' successfully linked to Machine 'Lathe'.");
        link_part_to_machine(&store, "Lathe", "P-1").await.unwrap();

        let stats = get_inventory_stats(&store).await.unwrap();
        assert_eq!(stats.unlinked_parts, 1);

        let with_parts = get_machine_with_parts(&store, "Lathe", "Plant A").await.unwrap();
        assert_eq!(with_parts.parts.len(), 1);
        assert_eq!(with_parts.parts[0].number, "P-1");
    }

    #[tokio::test]
    async fn test_link_missing_targets() {
        let store = InMemoryStore::new();
        create_machine(&store, &machine("Lathe", "Plant A")).await.unwrap();
        seed_part(&store, "P-1").await;

        let missing_machine = link_part_to_machine(&store, "Mill", "P-1").await;
        assert!(matches!(missing_machine, Err(InventoryError::LinkTargetNotFound { .. })));

        let missing_part = link_part_to_machine(&store, "Lathe", "P-404").await;
        assert!(matches!(missing_part, Err(InventoryError::LinkTargetNotFound { .. })));

        let stats = get_inventory_stats(&store).await.unwrap();
        assert_eq!(stats.unlinked_parts, 1);
    }

    #[tokio::test]
    async fn test_stats_after_partial_linking() {
        let store = InMemoryStore::new();
        create_machine(&store, &machine("Lathe", "Plant A")).await.unwrap();
        create_machine(&store, &machine("Mill", "Plant B")).await.unwrap();
        seed_part(&store, "P-1").await;
        seed_part(&store, "P-2").await;
        seed_part(&store, "P-3").await;
        link_part_to_machine(&store, "Mill", "P-2").await.unwrap();

        let stats = get_inventory_stats(&store).await.unwrap();
        assert_eq!(stats.total_machines, 2);
        assert_eq!(stats.total_parts, 3);
        assert_eq!(stats.unlinked_parts, 2);
    }

    #[tokio::test]
    async fn test_machine_without_parts() {
        let store = InMemoryStore::new();
        create_machine(&store, &machine("Press", "Plant C")).await.unwrap();

        let with_parts = get_machine_with_parts(&store, "Press", "Plant C").await.unwrap();
        assert_eq!(with_parts.machine.name, "Press");
        assert!(with_parts.parts.is_empty());
    }

    #[tokio::test]
    async fn test_machine_lookup_requires_site() {
        let store = InMemoryStore::new();
        create_machine(&store, &machine("Press", "Plant C")).await.unwrap();

        let result = get_machine_with_parts(&store, "Press", "Plant D").await;
        assert!(matches!(result, Err(InventoryError::MachineNotFound { .. })));
    }
}
