//! Worksheet generation pipeline.
//!
//! Flow: validate request → draft via the `QuestionDrafter` seam → structural
//! validation (retried — the model occasionally keys an answer to an option
//! it never wrote) → persist as an unpublished quiz → return the drafts.
//!
//! Generated quizzes stay `is_published = false` until a human reviews them
//! in the admin surface; nothing here reaches students directly.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::queries;
use crate::errors::AppError;
use crate::generation::drafter::{DraftQuestion, DraftSpec, QuestionDrafter};

/// Max drafting attempts when the model returns structurally invalid questions.
const MAX_DRAFT_RETRIES: u32 = 2;

const MAX_QUESTIONS_PER_REQUEST: u8 = 25;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateWorksheetRequest {
    pub subsection_id: Uuid,
    pub topic: String,
    pub difficulty: String,
    pub question_count: u8,
    /// Quiz title override; defaults to "<topic> practice".
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateWorksheetResponse {
    pub quiz_id: Uuid,
    pub question_count: usize,
    pub status: String,
    pub questions: Vec<DraftQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline and persists the result.
pub async fn generate_worksheet(
    pool: &PgPool,
    drafter: &dyn QuestionDrafter,
    request: GenerateWorksheetRequest,
) -> Result<GenerateWorksheetResponse, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.question_count == 0 || request.question_count > MAX_QUESTIONS_PER_REQUEST {
        return Err(AppError::Validation(format!(
            "question_count must be between 1 and {MAX_QUESTIONS_PER_REQUEST}"
        )));
    }
    match request.difficulty.as_str() {
        "easy" | "medium" | "hard" => {}
        other => {
            return Err(AppError::Validation(format!(
                "difficulty must be easy, medium, or hard (got '{other}')"
            )));
        }
    }

    queries::get_subsection(pool, request.subsection_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Subsection {} not found", request.subsection_id))
        })?;

    let spec = DraftSpec {
        topic: request.topic.clone(),
        difficulty: request.difficulty.clone(),
        question_count: request.question_count,
    };
    let drafts = draft_with_retry(drafter, &spec).await?;

    // Persist quiz + questions. Drafts are unpublished until reviewed.
    let quiz_id = Uuid::new_v4();
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} practice", request.topic.trim()));

    sqlx::query(
        r#"
        INSERT INTO quizzes (id, subsection_id, title, difficulty, is_published)
        VALUES ($1, $2, $3, $4, false)
        "#,
    )
    .bind(quiz_id)
    .bind(request.subsection_id)
    .bind(&title)
    .bind(&request.difficulty)
    .execute(pool)
    .await?;

    for (position, draft) in drafts.iter().enumerate() {
        let row = draft.clone().into_row(quiz_id, position as i32);
        sqlx::query(
            r#"
            INSERT INTO questions
                (id, quiz_id, position, question_text,
                 option_a, option_b, option_c, option_d,
                 correct_option, short_explanation)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(row.id)
        .bind(row.quiz_id)
        .bind(row.position)
        .bind(&row.question_text)
        .bind(&row.option_a)
        .bind(&row.option_b)
        .bind(&row.option_c)
        .bind(&row.option_d)
        .bind(&row.correct_option)
        .bind(&row.short_explanation)
        .execute(pool)
        .await?;
    }

    info!(
        "Generated quiz {quiz_id} ('{title}') with {} draft questions",
        drafts.len()
    );

    Ok(GenerateWorksheetResponse {
        quiz_id,
        question_count: drafts.len(),
        status: "draft".to_string(),
        questions: drafts,
    })
}

/// Calls the drafter, retrying while any draft fails structural validation.
async fn draft_with_retry(
    drafter: &dyn QuestionDrafter,
    spec: &DraftSpec,
) -> Result<Vec<DraftQuestion>, AppError> {
    let mut last_failure = String::new();

    for attempt in 0..=MAX_DRAFT_RETRIES {
        let drafts = drafter.draft(spec).await?;

        if drafts.is_empty() {
            last_failure = "drafter returned no questions".to_string();
        } else {
            let failures: Vec<String> = drafts
                .iter()
                .enumerate()
                .filter_map(|(i, d)| d.validate().err().map(|e| format!("question {i}: {e}")))
                .collect();
            if failures.is_empty() {
                return Ok(drafts);
            }
            last_failure = failures.join("; ");
        }

        warn!(
            "Draft attempt {}/{} rejected: {last_failure}",
            attempt + 1,
            MAX_DRAFT_RETRIES + 1
        );
    }

    Err(AppError::UnprocessableEntity(format!(
        "Drafted questions failed validation after {} attempts: {last_failure}",
        MAX_DRAFT_RETRIES + 1
    )))
}
