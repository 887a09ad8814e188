//! Axum route handlers for the admin analytics surface.
//!
//! All handlers here require the `x-admin-token` header to match the
//! configured shared secret. This is a gate for the dashboard, not an auth
//! system — user identity belongs to the upstream identity service.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::analytics::aggregate::{aggregate_quiz_analytics, QuizAnalytics};
use crate::catalog::queries;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::attempt::{AttemptAnswerRow, QuizAttemptRow};
use crate::state::AppState;

const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

fn require_admin(headers: &HeaderMap, config: &Config) -> Result<(), AppError> {
    let presented = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    match presented {
        Some(token) if token == config.admin_token => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Per-quiz usage row for the overview listing.
#[derive(Debug, Serialize, FromRow)]
pub struct QuizUsageRow {
    pub quiz_id: Uuid,
    pub title: String,
    pub attempt_count: i64,
    pub mean_score_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsOverviewResponse {
    pub quizzes: Vec<QuizUsageRow>,
}

/// GET /api/v1/admin/analytics/overview
///
/// Attempt volume and mean score per quiz, most-attempted first.
pub async fn handle_analytics_overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AnalyticsOverviewResponse>, AppError> {
    require_admin(&headers, &state.config)?;

    let quizzes = sqlx::query_as::<_, QuizUsageRow>(
        r#"
        SELECT q.id                AS quiz_id,
               q.title             AS title,
               COUNT(a.id)         AS attempt_count,
               AVG(a.score_percent) AS mean_score_percent
        FROM quizzes q
        LEFT JOIN quiz_attempts a ON a.quiz_id = q.id
        GROUP BY q.id, q.title
        ORDER BY attempt_count DESC, q.title
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(AnalyticsOverviewResponse { quizzes }))
}

/// GET /api/v1/admin/analytics/quizzes/:id
///
/// Full per-question breakdown for one quiz.
pub async fn handle_quiz_analytics(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<QuizAnalytics>, AppError> {
    require_admin(&headers, &state.config)?;

    queries::get_quiz(&state.db, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} not found")))?;

    let questions = queries::list_questions(&state.db, quiz_id).await?;

    let attempts =
        sqlx::query_as::<_, QuizAttemptRow>("SELECT * FROM quiz_attempts WHERE quiz_id = $1")
            .bind(quiz_id)
            .fetch_all(&state.db)
            .await?;

    let answers = sqlx::query_as::<_, AttemptAnswerRow>(
        r#"
        SELECT aa.*
        FROM attempt_answers aa
        JOIN quiz_attempts a ON a.id = aa.attempt_id
        WHERE a.quiz_id = $1
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&state.db)
    .await?;

    let analytics = aggregate_quiz_analytics(quiz_id, &questions, &attempts, &answers);
    Ok(Json(analytics))
}
