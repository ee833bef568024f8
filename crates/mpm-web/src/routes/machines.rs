//! Machine route handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use mpm_core::machine::model::{LinkConfirmation, Machine, MachineWithParts, NewMachine};
use serde::Deserialize;

use crate::error::{api_error, rejection_error, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AssociateParams {
    pub machine_name: String,
    pub part_number: String,
}

pub async fn create_machine(
    State(state): State<AppState>,
    payload: Result<Json<NewMachine>, JsonRejection>,
) -> Result<(StatusCode, Json<Machine>), ApiError> {
    let Json(req) = payload.map_err(|e| rejection_error(e.status(), e.body_text()))?;
    let machine = mpm_core::machine::create_machine(state.store.as_ref(), &req)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(machine)))
}

pub async fn associate_part(
    State(state): State<AppState>,
    params: Result<Query<AssociateParams>, QueryRejection>,
) -> Result<Json<LinkConfirmation>, ApiError> {
    let Query(params) = params.map_err(|e| rejection_error(e.status(), e.body_text()))?;
    let confirmation = mpm_core::machine::link_part_to_machine(
        state.store.as_ref(),
        &params.machine_name,
        &params.part_number,
    )
    .await
    .map_err(api_error)?;

    Ok(Json(confirmation))
}

pub async fn get_machine_with_parts(
    State(state): State<AppState>,
    Path((name, site)): Path<(String, String)>,
) -> Result<Json<MachineWithParts>, ApiError> {
    let machine = mpm_core::machine::get_machine_with_parts(state.store.as_ref(), &name, &site)
        .await
        .map_err(api_error)?;

    Ok(Json(machine))
}
