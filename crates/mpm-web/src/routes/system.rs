//! Liveness and inventory-wide endpoints.

use axum::{extract::State, Json};
use mpm_core::InventoryStats;
use serde_json::{json, Value};

use crate::error::{api_error, ApiError};
use crate::state::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Neo4j Machine-Parts API is running" }))
}

pub async fn inventory_stats(State(state): State<AppState>) -> Result<Json<InventoryStats>, ApiError> {
    let stats = mpm_core::stats::get_inventory_stats(state.store.as_ref())
        .await
        .map_err(api_error)?;

    Ok(Json(stats))
}
