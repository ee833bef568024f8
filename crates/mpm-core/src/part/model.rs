//! Part domain models.

use serde::{Deserialize, Serialize};

/// Fields supplied when registering a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPart {
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A persisted part.
///
/// The drawing file lives in the drawing store under `uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub uuid: String,
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Name of the machine this part belongs to, when known.
    #[serde(default)]
    pub linked_machine: Option<String>,
}

impl Part {
    pub fn from_new(uuid: impl Into<String>, new: &NewPart) -> Self {
        Self {
            uuid: uuid.into(),
            name: new.name.clone(),
            number: new.number.clone(),
            description: new.description.clone(),
            linked_machine: None,
        }
    }
}

/// An uploaded drawing as received from the client.
#[derive(Debug, Clone)]
pub struct DrawingUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
