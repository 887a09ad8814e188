//! Axum route handlers for the catalog and quiz-preview surface.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::queries;
use crate::errors::AppError;
use crate::models::catalog::{CourseRow, QuizHead, QuizRow, SectionRow, SubsectionRow};
use crate::models::question::{OptionLabel, QuestionRow};
use crate::render::render_rich;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SectionWithSubsections {
    pub section: SectionRow,
    pub subsections: Vec<SubsectionRow>,
}

#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub course: CourseRow,
    pub sections: Vec<SectionWithSubsections>,
}

/// One answer choice as shown to a quiz taker.
#[derive(Debug, Serialize)]
pub struct PublicOption {
    pub label: OptionLabel,
    pub html: String,
}

/// A question stripped for quiz taking: rendered through the shared
/// markdown+TeX pipeline, with the correct option and explanation withheld.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: Uuid,
    pub position: i32,
    pub question_html: String,
    pub options: Vec<PublicOption>,
}

impl PublicQuestion {
    pub fn from_row(row: &QuestionRow) -> Self {
        PublicQuestion {
            id: row.id,
            position: row.position,
            question_html: render_rich(&row.question_text),
            options: row
                .present_options()
                .map(|(label, text)| PublicOption {
                    label,
                    html: render_rich(text),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizDetailResponse {
    pub quiz: QuizRow,
    pub head: QuizHead,
    pub questions: Vec<PublicQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/catalog/courses
pub async fn handle_list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseRow>>, AppError> {
    let courses = queries::list_courses(&state.db).await?;
    Ok(Json(courses))
}

/// GET /api/v1/catalog/courses/:id
pub async fn handle_course_detail(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseDetailResponse>, AppError> {
    let course = queries::get_course(&state.db, course_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Course {course_id} not found")))?;

    let mut sections = Vec::new();
    for section in queries::list_sections(&state.db, course_id).await? {
        let subsections = queries::list_subsections(&state.db, section.id).await?;
        sections.push(SectionWithSubsections {
            section,
            subsections,
        });
    }

    Ok(Json(CourseDetailResponse { course, sections }))
}

/// GET /api/v1/catalog/subsections/:id/quizzes
pub async fn handle_subsection_quizzes(
    State(state): State<AppState>,
    Path(subsection_id): Path<Uuid>,
) -> Result<Json<Vec<QuizRow>>, AppError> {
    queries::get_subsection(&state.db, subsection_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Subsection {subsection_id} not found")))?;

    let quizzes = queries::list_published_quizzes(&state.db, subsection_id).await?;
    Ok(Json(quizzes))
}

/// GET /api/v1/quizzes/:id
///
/// Quiz-taking payload: questions with rendered text and options only —
/// correct answers and explanations never leave the server here.
pub async fn handle_quiz_detail(
    State(state): State<AppState>,
    Path(quiz_id): Path<Uuid>,
) -> Result<Json<QuizDetailResponse>, AppError> {
    let quiz = queries::get_quiz(&state.db, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} not found")))?;

    let head = queries::get_quiz_head(&state.db, quiz_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Quiz {quiz_id} has no catalog placement")))?;

    let rows = queries::list_questions(&state.db, quiz_id).await?;
    let questions = rows.iter().map(PublicQuestion::from_row).collect();

    Ok(Json(QuizDetailResponse {
        quiz,
        head,
        questions,
    }))
}
