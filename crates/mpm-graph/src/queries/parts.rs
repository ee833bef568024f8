//! Part queries.

use anyhow::Result;
use mpm_core::part::model::{NewPart, Part};
use neo4rs::Query;
use tracing::warn;

use super::{decode, PartRecord};
use crate::GraphClient;

pub const CREATE_PART: &str = "
    CREATE (p:Part {uuid: $uuid, name: $name, number: $number, description: $description})
    RETURN p {.uuid, .name, .number, .description} AS part";

/// Candidates are ordered by uuid; a second row means the number is ambiguous.
pub const PART_BY_NUMBER: &str = "
    MATCH (p:Part {number: $number})
    OPTIONAL MATCH (p)-[:BELONGS_TO]->(m:Machine)
    WITH p, m ORDER BY m.uuid
    WITH p, collect(m.name)[0] AS linked_machine
    RETURN p {.uuid, .name, .number, .description} AS part, linked_machine
    ORDER BY part.uuid
    LIMIT 2";

/// Create a part node and return it as stored.
pub async fn create_part(client: &GraphClient, uuid: &str, part: &NewPart) -> Result<Option<Part>> {
    let query = Query::new(CREATE_PART.to_string())
        .param("uuid", uuid)
        .param("name", part.name.as_str())
        .param("number", part.number.as_str())
        .param("description", part.description.clone());

    match client.query_one(query).await? {
        Some(row) => {
            let record: PartRecord = decode(&row, "part")?;
            Ok(Some(record.into_part(None)))
        }
        None => Ok(None),
    }
}

/// Find the first part with `number`, including the machine it belongs to.
pub async fn find_part_by_number(client: &GraphClient, number: &str) -> Result<Option<Part>> {
    let query = Query::new(PART_BY_NUMBER.to_string()).param("number", number);

    let rows = client.query(query).await?;
    if rows.len() > 1 {
        warn!(number, "Part number is ambiguous, using first by uuid");
    }

    match rows.into_iter().next() {
        Some(row) => {
            let record: PartRecord = decode(&row, "part")?;
            let linked_machine: Option<String> = decode(&row, "linked_machine")?;
            Ok(Some(record.into_part(linked_machine)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_part_binds_every_field() {
        for param in ["$uuid", "$name", "$number", "$description"] {
            assert!(CREATE_PART.contains(param), "missing {}", param);
        }
    }

    #[test]
    fn test_part_lookup_is_deterministic() {
        assert!(PART_BY_NUMBER.contains("ORDER BY part.uuid"));
        assert!(PART_BY_NUMBER.contains("OPTIONAL MATCH"));
    }
}
