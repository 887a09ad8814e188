//! Axum route handlers for quiz attempts.

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::attempts::scoring::{score_attempt, AttemptScore, SubmittedAnswer};
use crate::catalog::queries;
use crate::errors::AppError;
use crate::models::attempt::{AttemptAnswerRow, QuizAttemptRow};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitAttemptRequest {
    /// Identity from the upstream auth layer; omitted for anonymous practice.
    pub user_id: Option<Uuid>,
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAttemptResponse {
    pub attempt_id: Uuid,
    pub score: AttemptScore,
}

#[derive(Debug, Serialize)]
pub struct AttemptDetailResponse {
    pub attempt: QuizAttemptRow,
    pub answers: Vec<AttemptAnswerRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/quizzes/:id/attempts
///
/// Grades the submission against the quiz's questions and persists the
/// attempt with one answer row per question outcome.
pub async fn handle_submit_attempt(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    Json(request): Json<SubmitAttemptRequest>,
) -> Result<Json<SubmitAttemptResponse>, AppError> {
    let quiz = queries::get_quiz(&state.db, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} not found")))?;

    let questions = queries::list_questions(&state.db, quiz_id).await?;
    if questions.is_empty() {
        return Err(AppError::Validation(format!(
            "Quiz {quiz_id} has no questions to grade"
        )));
    }

    // Reject answers pointing outside this quiz instead of silently dropping.
    let known_ids: HashSet<Uuid> = questions.iter().map(|q| q.id).collect();
    if let Some(stray) = request
        .answers
        .iter()
        .find(|a| !known_ids.contains(&a.question_id))
    {
        return Err(AppError::Validation(format!(
            "Answer references question {} which is not part of quiz {quiz_id}",
            stray.question_id
        )));
    }

    let score = score_attempt(&questions, &request.answers);

    let attempt_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO quiz_attempts
            (id, quiz_id, user_id, score_percent, correct_count, gradable_count)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(attempt_id)
    .bind(quiz.id)
    .bind(request.user_id)
    .bind(score.score_percent)
    .bind(score.correct_count as i32)
    .bind(score.gradable_count as i32)
    .execute(&state.db)
    .await?;

    for outcome in &score.outcomes {
        sqlx::query(
            r#"
            INSERT INTO attempt_answers
                (id, attempt_id, question_id, selected_option, is_correct)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(attempt_id)
        .bind(outcome.question_id)
        .bind(outcome.selected.map(|label| label.to_string()))
        .bind(outcome.is_correct)
        .execute(&state.db)
        .await?;
    }

    info!(
        "Attempt {attempt_id} on quiz {quiz_id}: {}/{} correct",
        score.correct_count, score.gradable_count
    );

    Ok(Json(SubmitAttemptResponse { attempt_id, score }))
}

/// GET /api/v1/attempts/:id
pub async fn handle_get_attempt(
    State(state): State<AppState>,
    Path(attempt_id): Path<Uuid>,
) -> Result<Json<AttemptDetailResponse>, AppError> {
    let attempt =
        sqlx::query_as::<_, QuizAttemptRow>("SELECT * FROM quiz_attempts WHERE id = $1")
            .bind(attempt_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attempt {attempt_id} not found")))?;

    let answers = sqlx::query_as::<_, AttemptAnswerRow>(
        "SELECT * FROM attempt_answers WHERE attempt_id = $1",
    )
    .bind(attempt_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(AttemptDetailResponse { attempt, answers }))
}
