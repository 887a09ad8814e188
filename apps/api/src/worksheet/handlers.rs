//! Axum route handlers for the printable worksheet surface.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::queries;
use crate::errors::AppError;
use crate::models::catalog::QuizHead;
use crate::models::question::QuestionRow;
use crate::state::AppState;
use crate::worksheet::compose::{
    compose_worksheet, standalone_html, WorksheetDocument, WorksheetOptions,
};

async fn load_quiz_for_render(
    state: &AppState,
    quiz_id: Uuid,
) -> Result<(QuizHead, Vec<QuestionRow>), AppError> {
    let head = queries::get_quiz_head(&state.db, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} not found")))?;
    let questions = queries::list_questions(&state.db, quiz_id).await?;
    Ok((head, questions))
}

/// GET /api/v1/worksheets/:quiz_id/print
///
/// Paginates and renders the quiz as a printable document. Recomputed from
/// freshly fetched rows on every call; the paginated form is never stored.
pub async fn handle_print_worksheet(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Query(opts): Query<WorksheetOptions>,
) -> Result<Json<WorksheetDocument>, AppError> {
    let (head, questions) = load_quiz_for_render(&state, quiz_id).await?;
    let document = compose_worksheet(&head, questions, opts, &state.sheet);

    info!(
        "Rendered worksheet for quiz {quiz_id}: {} questions over {} pages",
        document.question_count,
        document.pages.len()
    );

    Ok(Json(document))
}

#[derive(Debug, Serialize)]
pub struct ExportWorksheetResponse {
    pub s3_key: String,
    pub page_count: usize,
}

/// POST /api/v1/worksheets/:quiz_id/export
///
/// Renders the worksheet as a standalone HTML file and uploads it to object
/// storage for download/sharing. Returns the object key.
pub async fn handle_export_worksheet(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Query(opts): Query<WorksheetOptions>,
) -> Result<Json<ExportWorksheetResponse>, AppError> {
    let (head, questions) = load_quiz_for_render(&state, quiz_id).await?;
    let document = compose_worksheet(&head, questions, opts, &state.sheet);
    let html = standalone_html(&head, &document);

    let s3_key = format!("worksheets/{quiz_id}/{}.html", Uuid::new_v4());
    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&s3_key)
        .content_type("text/html; charset=utf-8")
        .body(ByteStream::from(Bytes::from(html)))
        .send()
        .await
        .map_err(|e| AppError::S3(e.to_string()))?;

    info!("Exported worksheet for quiz {quiz_id} to s3://{}/{s3_key}", state.config.s3_bucket);

    Ok(Json(ExportWorksheetResponse {
        s3_key,
        page_count: document.pages.len(),
    }))
}
