//! Part route handlers.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use mpm_core::part::model::{DrawingUpload, NewPart, Part};
use mpm_core::InventoryError;

use crate::error::{api_error, rejection_error, ApiError};
use crate::state::AppState;

/// Fields collected from the `multipart/form-data` create request.
#[derive(Default)]
struct PartForm {
    name: Option<String>,
    number: Option<String>,
    description: Option<String>,
    drawing: Option<DrawingUpload>,
}

impl PartForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(multipart_error)?;
                    form.drawing = Some(DrawingUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                "name" | "number" | "description" => {
                    let value = field
                        .text()
                        .await
                        .map_err(multipart_error)?;
                    match field_name.as_str() {
                        "name" => form.name = Some(value),
                        "number" => form.number = Some(value),
                        _ => form.description = Some(value),
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn into_parts(self) -> Result<(NewPart, DrawingUpload), InventoryError> {
        let name = self.name.ok_or_else(|| InventoryError::validation("missing form field 'name'"))?;
        let number = self.number.ok_or_else(|| InventoryError::validation("missing form field 'number'"))?;
        let drawing = self.drawing.ok_or_else(|| InventoryError::validation("missing form field 'file'"))?;

        Ok((
            NewPart {
                name,
                number,
                description: self.description,
            },
            drawing,
        ))
    }
}

/// Oversized uploads keep their 413 instead of collapsing into a 400.
fn multipart_error(err: MultipartError) -> ApiError {
    rejection_error(err.status(), err.body_text())
}

/// Upload a new part with its PDF drawing.
pub async fn create_part(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Part>), ApiError> {
    let multipart = multipart.map_err(|e| rejection_error(e.status(), e.body_text()))?;
    let form = PartForm::read(multipart).await?;
    let (part, drawing) = form.into_parts().map_err(api_error)?;

    let created = mpm_core::part::create_part(state.store.as_ref(), &state.drawings, &part, &drawing)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_part(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<Part>, ApiError> {
    let part = mpm_core::part::get_part_by_number(state.store.as_ref(), &number)
        .await
        .map_err(api_error)?;

    Ok(Json(part))
}

/// Serve the stored drawing inline as a PDF.
pub async fn get_part_drawing(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = mpm_core::part::get_part_drawing(&state.drawings, &uuid)
        .await
        .map_err(api_error)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (header::CONTENT_DISPOSITION, format!("inline; filename=\"{}.pdf\"", uuid)),
    ];

    Ok((headers, bytes))
}
