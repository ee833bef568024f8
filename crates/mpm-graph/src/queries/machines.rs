//! Machine and BELONGS_TO queries.

use anyhow::Result;
use mpm_core::machine::model::{Machine, MachineWithParts, NewMachine};
use neo4rs::Query;
use tracing::warn;

use super::{decode, MachineRecord, PartRecord};
use crate::GraphClient;

pub const CREATE_MACHINE: &str = "
    CREATE (m:Machine {uuid: $uuid, name: $name, site: $site, description: $description})
    RETURN m {.uuid, .name, .site, .description} AS machine";

/// Picks the first machine and the first part (by uuid) and merges one
/// relation between them. Returns no row when either side is missing.
pub const LINK_PART_TO_MACHINE: &str = "
    MATCH (m:Machine {name: $machine_name})
    WITH m ORDER BY m.uuid
    WITH collect(m) AS machines
    MATCH (p:Part {number: $part_number})
    WITH machines, p ORDER BY p.uuid
    WITH machines, collect(p) AS parts
    WHERE size(machines) > 0 AND size(parts) > 0
    WITH machines[0] AS m, parts[0] AS p, size(machines) AS machine_matches, size(parts) AS part_matches
    MERGE (p)-[:BELONGS_TO]->(m)
    RETURN machine_matches, part_matches";

pub const MACHINE_WITH_PARTS: &str = "
    MATCH (m:Machine {name: $name, site: $site})
    WITH m ORDER BY m.uuid
    WITH collect(m) AS machines
    WHERE size(machines) > 0
    WITH machines[0] AS m, size(machines) AS matches
    OPTIONAL MATCH (p:Part)-[:BELONGS_TO]->(m)
    WITH m, matches, p ORDER BY p.uuid
    RETURN m {.uuid, .name, .site, .description} AS machine,
           collect(p {.uuid, .name, .number, .description}) AS parts,
           matches";

/// Create a machine node and return it as stored.
pub async fn create_machine(client: &GraphClient, uuid: &str, machine: &NewMachine) -> Result<Option<Machine>> {
    let query = Query::new(CREATE_MACHINE.to_string())
        .param("uuid", uuid)
        .param("name", machine.name.as_str())
        .param("site", machine.site.as_str())
        .param("description", machine.description.clone());

    match client.query_one(query).await? {
        Some(row) => {
            let record: MachineRecord = decode(&row, "machine")?;
            Ok(Some(record.into()))
        }
        None => Ok(None),
    }
}

/// Merge `(part)-[:BELONGS_TO]->(machine)`. Returns false if either end is missing.
pub async fn link_part_to_machine(client: &GraphClient, machine_name: &str, part_number: &str) -> Result<bool> {
    let query = Query::new(LINK_PART_TO_MACHINE.to_string())
        .param("machine_name", machine_name)
        .param("part_number", part_number);

    let Some(row) = client.query_one(query).await? else {
        return Ok(false);
    };

    let machine_matches: i64 = decode(&row, "machine_matches")?;
    let part_matches: i64 = decode(&row, "part_matches")?;
    if machine_matches > 1 {
        warn!(machine_name, matches = machine_matches, "Machine name is ambiguous, linked first by uuid");
    }
    if part_matches > 1 {
        warn!(part_number, matches = part_matches, "Part number is ambiguous, linked first by uuid");
    }

    Ok(true)
}

/// Find a machine by name and site and collect its parts.
pub async fn find_machine_with_parts(client: &GraphClient, name: &str, site: &str) -> Result<Option<MachineWithParts>> {
    let query = Query::new(MACHINE_WITH_PARTS.to_string())
        .param("name", name)
        .param("site", site);

    let Some(row) = client.query_one(query).await? else {
        return Ok(None);
    };

    let machine: MachineRecord = decode(&row, "machine")?;
    let parts: Vec<PartRecord> = decode(&row, "parts")?;
    let matches: i64 = decode(&row, "matches")?;
    if matches > 1 {
        warn!(machine = name, site, matches, "Machine name and site are ambiguous, using first by uuid");
    }

    Ok(Some(MachineWithParts {
        machine: machine.into(),
        parts: parts.into_iter().map(|p| p.into_part(None)).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_merges_instead_of_creating() {
        assert!(LINK_PART_TO_MACHINE.contains("MERGE (p)-[:BELONGS_TO]->(m)"));
        assert!(!LINK_PART_TO_MACHINE.contains("CREATE"));
    }

    #[test]
    fn test_machine_parts_are_optional() {
        assert!(MACHINE_WITH_PARTS.contains("OPTIONAL MATCH (p:Part)-[:BELONGS_TO]->(m)"));
        assert!(MACHINE_WITH_PARTS.contains("$site"));
    }

    #[test]
    fn test_create_machine_binds_every_field() {
        for param in ["$uuid", "$name", "$site", "$description"] {
            assert!(CREATE_MACHINE.contains(param), "missing {}", param);
        }
    }
}
