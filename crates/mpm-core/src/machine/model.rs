//! Machine domain models.

use serde::{Deserialize, Serialize};

use crate::part::model::Part;

/// Fields supplied when registering a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMachine {
    pub name: String,
    pub site: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A persisted machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub uuid: String,
    pub name: String,
    pub site: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Machine {
    pub fn from_new(uuid: impl Into<String>, new: &NewMachine) -> Self {
        Self {
            uuid: uuid.into(),
            name: new.name.clone(),
            site: new.site.clone(),
            description: new.description.clone(),
        }
    }
}

/// A machine together with every part linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineWithParts {
    #[serde(flatten)]
    pub machine: Machine,
    pub parts: Vec<Part>,
}

/// Confirmation returned after linking a part to a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfirmation {
    pub message: String,
}

impl LinkConfirmation {
    pub fn new(part_number: &str, machine_name: &str) -> Self {
        Self {
            message: format!(
                "Part '{}' successfully linked to Machine '{}'.",
                part_number, machine_name
            ),
        }
    }
}
