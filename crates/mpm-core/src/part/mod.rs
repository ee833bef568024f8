//! Part registration, lookup, and drawings.

pub mod model;

use tracing::{info, warn};
use uuid::Uuid;

use crate::drawing::{is_pdf_file_name, DrawingStore};
use crate::error::{InventoryError, InventoryResult};
use crate::store::InventoryStore;
use model::{DrawingUpload, NewPart, Part};

/// Register a part and store its PDF drawing under a fresh identifier.
///
/// The node is written before the file. If the file write fails the node
/// stays in the graph without a drawing.
pub async fn create_part(
    store: &dyn InventoryStore,
    drawings: &DrawingStore,
    part: &NewPart,
    drawing: &DrawingUpload,
) -> InventoryResult<Part> {
    if !is_pdf_file_name(&drawing.file_name) {
        return Err(InventoryError::InvalidDrawing(drawing.file_name.clone()));
    }

    let id = Uuid::new_v4();

    let created = store
        .create_part(&id.to_string(), part)
        .await?
        .ok_or_else(|| InventoryError::Persistence("part".to_string()))?;

    if let Err(e) = drawings.save(&id, &drawing.bytes).await {
        warn!(uuid = %id, error = %e, "Part node created but drawing could not be written");
        return Err(e);
    }

    info!(uuid = %id, number = %created.number, "Created part");
    Ok(created)
}

/// Get a part by its number.
pub async fn get_part_by_number(store: &dyn InventoryStore, number: &str) -> InventoryResult<Part> {
    store
        .find_part_by_number(number)
        .await?
        .ok_or_else(|| InventoryError::PartNotFound(number.to_string()))
}

/// Read the drawing stored for a part identifier.
pub async fn get_part_drawing(drawings: &DrawingStore, id: &str) -> InventoryResult<Vec<u8>> {
    drawings.load(id).await
}
