//! Query/response mapping.
//!
//! One function per use case. Each issues a single parameterized Cypher
//! statement and decodes the returned row into a typed record. A missing
//! or mistyped field is an error, never a silent default.

pub mod machines;
pub mod parts;
pub mod stats;

use anyhow::{anyhow, Result};
use mpm_core::machine::model::Machine;
use mpm_core::part::model::Part;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Decode a named column of a result row.
pub(crate) fn decode<T: DeserializeOwned>(row: &neo4rs::Row, field: &str) -> Result<T> {
    row.get::<T>(field)
        .map_err(|e| anyhow!("Failed to decode field '{}': {:?}", field, e))
}

/// Projection of a `:Part` node as returned by `p {.uuid, .name, .number, .description}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PartRecord {
    pub uuid: String,
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl PartRecord {
    pub fn into_part(self, linked_machine: Option<String>) -> Part {
        Part {
            uuid: self.uuid,
            name: self.name,
            number: self.number,
            description: self.description,
            linked_machine,
        }
    }
}

/// Projection of a `:Machine` node as returned by `m {.uuid, .name, .site, .description}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineRecord {
    pub uuid: String,
    pub name: String,
    pub site: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<MachineRecord> for Machine {
    fn from(record: MachineRecord) -> Self {
        Self {
            uuid: record.uuid,
            name: record.name,
            site: record.site,
            description: record.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo4rs::{BoltList, BoltMap, BoltNull, BoltString, BoltType};
    use serde_json::json;

    #[test]
    fn test_part_record_null_description() {
        let record: PartRecord = serde_json::from_value(json!({
            "uuid": "0b8f", "name": "Shaft", "number": "P-7", "description": null
        }))
        .unwrap();

        let part = record.into_part(Some("Lathe".to_string()));
        assert_eq!(part.description, None);
        assert_eq!(part.linked_machine.as_deref(), Some("Lathe"));
    }

    #[test]
    fn test_part_record_requires_number() {
        let result: std::result::Result<PartRecord, _> =
            serde_json::from_value(json!({ "uuid": "0b8f", "name": "Shaft" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_machine_record_conversion() {
        let record: MachineRecord = serde_json::from_value(json!({
            "uuid": "77aa", "name": "Mill", "site": "Plant B"
        }))
        .unwrap();

        let machine = Machine::from(record);
        assert_eq!(machine.site, "Plant B");
        assert!(machine.description.is_none());
    }

    fn bolt_map(entries: &[(&str, BoltType)]) -> BoltType {
        let mut map = BoltMap::new();
        for (key, value) in entries {
            map.put(BoltString::from(*key), value.clone());
        }
        BoltType::Map(map)
    }

    fn part_node(uuid: &str, number: &str, description: BoltType) -> BoltType {
        bolt_map(&[
            ("uuid", BoltType::from(uuid)),
            ("name", BoltType::from("Shaft")),
            ("number", BoltType::from(number)),
            ("description", description),
        ])
    }

    fn row(columns: Vec<(&str, BoltType)>) -> neo4rs::Row {
        let (fields, values): (Vec<_>, Vec<_>) = columns
            .into_iter()
            .map(|(name, value)| (BoltType::from(name), value))
            .unzip();
        neo4rs::Row::new(BoltList::from(fields), BoltList::from(values))
    }

    #[test]
    fn test_decode_part_row_with_null_fields() {
        let row = row(vec![
            ("part", part_node("0b8f", "P-7", BoltType::Null(BoltNull))),
            ("linked_machine", BoltType::Null(BoltNull)),
        ]);

        let record: PartRecord = decode(&row, "part").unwrap();
        let linked: Option<String> = decode(&row, "linked_machine").unwrap();
        let part = record.into_part(linked);

        assert_eq!(part.number, "P-7");
        assert_eq!(part.description, None);
        assert_eq!(part.linked_machine, None);
    }

    #[test]
    fn test_decode_collected_parts_and_counts() {
        let parts = BoltType::List(BoltList::from(vec![
            part_node("0001", "P-1", BoltType::from("first")),
            part_node("0002", "P-2", BoltType::Null(BoltNull)),
        ]));
        let row = row(vec![
            ("machine", bolt_map(&[
                ("uuid", BoltType::from("77aa")),
                ("name", BoltType::from("Mill")),
                ("site", BoltType::from("Plant B")),
                ("description", BoltType::Null(BoltNull)),
            ])),
            ("parts", parts),
            ("partCount", BoltType::from(3i64)),
        ]);

        let machine = Machine::from(decode::<MachineRecord>(&row, "machine").unwrap());
        let parts: Vec<PartRecord> = decode(&row, "parts").unwrap();
        let total: i64 = decode(&row, "partCount").unwrap();

        assert_eq!(machine.name, "Mill");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].description.as_deref(), Some("first"));
        assert!(parts[1].description.is_none());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_decode_missing_column_is_error() {
        let row = row(vec![("partCount", BoltType::from(3i64))]);

        let err = decode::<String>(&row, "part").unwrap_err();
        assert!(err.to_string().contains("'part'"));
    }
}
