//! Neo4j schema initialization (lookup indexes).

use anyhow::Result;
use neo4rs::Query;
use tracing::info;

use crate::GraphClient;

/// Cypher statements for schema initialization.
///
/// Plain range indexes only. Part numbers and machine names are lookup keys
/// but are not declared unique.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE INDEX part_uuid IF NOT EXISTS FOR (p:Part) ON (p.uuid)",
    "CREATE INDEX part_number IF NOT EXISTS FOR (p:Part) ON (p.number)",
    "CREATE INDEX machine_uuid IF NOT EXISTS FOR (m:Machine) ON (m.uuid)",
    "CREATE INDEX machine_name_site IF NOT EXISTS FOR (m:Machine) ON (m.name, m.site)",
    "CREATE INDEX machine_name IF NOT EXISTS FOR (m:Machine) ON (m.name)",
];

/// Initialize Neo4j schema with indexes.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses.
pub async fn initialize_schema(client: &GraphClient) -> Result<()> {
    info!("Initializing Neo4j schema...");

    for statement in SCHEMA_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!("Neo4j schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_no_uniqueness() {
        for statement in SCHEMA_STATEMENTS {
            assert!(statement.contains("IF NOT EXISTS"));
            assert!(!statement.contains("CONSTRAINT"));
        }
    }
}
