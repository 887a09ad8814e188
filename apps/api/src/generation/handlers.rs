//! Axum route handler for AI worksheet generation.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::{
    generate_worksheet, GenerateWorksheetRequest, GenerateWorksheetResponse,
};
use crate::state::AppState;

/// POST /api/v1/worksheets/generate
///
/// Drafts a new unpublished quiz for a subsection. The response carries the
/// drafts for immediate admin preview; publishing is a separate review step.
pub async fn handle_generate_worksheet(
    State(state): State<AppState>,
    Json(request): Json<GenerateWorksheetRequest>,
) -> Result<Json<GenerateWorksheetResponse>, AppError> {
    let response = generate_worksheet(&state.db, state.drafter.as_ref(), request).await?;
    Ok(Json(response))
}
