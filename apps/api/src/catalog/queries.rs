//! Shared catalog/question fetch helpers.
//!
//! Row access used by more than one handler module lives here so the routes
//! stay thin and the SQL is written once.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::catalog::{CourseRow, QuizHead, QuizRow, SectionRow, SubsectionRow};
use crate::models::question::QuestionRow;

pub async fn list_courses(pool: &PgPool) -> Result<Vec<CourseRow>, sqlx::Error> {
    sqlx::query_as::<_, CourseRow>("SELECT * FROM courses ORDER BY position, title")
        .fetch_all(pool)
        .await
}

pub async fn get_course(pool: &PgPool, course_id: Uuid) -> Result<Option<CourseRow>, sqlx::Error> {
    sqlx::query_as::<_, CourseRow>("SELECT * FROM courses WHERE id = $1")
        .bind(course_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_sections(pool: &PgPool, course_id: Uuid) -> Result<Vec<SectionRow>, sqlx::Error> {
    sqlx::query_as::<_, SectionRow>(
        "SELECT * FROM sections WHERE course_id = $1 ORDER BY position, title",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await
}

pub async fn list_subsections(
    pool: &PgPool,
    section_id: Uuid,
) -> Result<Vec<SubsectionRow>, sqlx::Error> {
    sqlx::query_as::<_, SubsectionRow>(
        "SELECT * FROM subsections WHERE section_id = $1 ORDER BY position, title",
    )
    .bind(section_id)
    .fetch_all(pool)
    .await
}

pub async fn get_subsection(
    pool: &PgPool,
    subsection_id: Uuid,
) -> Result<Option<SubsectionRow>, sqlx::Error> {
    sqlx::query_as::<_, SubsectionRow>("SELECT * FROM subsections WHERE id = $1")
        .bind(subsection_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_published_quizzes(
    pool: &PgPool,
    subsection_id: Uuid,
) -> Result<Vec<QuizRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizRow>(
        "SELECT * FROM quizzes WHERE subsection_id = $1 AND is_published ORDER BY created_at",
    )
    .bind(subsection_id)
    .fetch_all(pool)
    .await
}

pub async fn get_quiz(pool: &PgPool, quiz_id: Uuid) -> Result<Option<QuizRow>, sqlx::Error> {
    sqlx::query_as::<_, QuizRow>("SELECT * FROM quizzes WHERE id = $1")
        .bind(quiz_id)
        .fetch_optional(pool)
        .await
}

/// Quiz metadata plus its course/section/subsection breadcrumb, joined in one
/// query. Feeds the worksheet title block.
pub async fn get_quiz_head(pool: &PgPool, quiz_id: Uuid) -> Result<Option<QuizHead>, sqlx::Error> {
    sqlx::query_as::<_, QuizHead>(
        r#"
        SELECT q.id          AS quiz_id,
               q.title       AS quiz_title,
               q.difficulty  AS difficulty,
               ss.title      AS subsection_title,
               s.title       AS section_title,
               c.title       AS course_title
        FROM quizzes q
        JOIN subsections ss ON ss.id = q.subsection_id
        JOIN sections s     ON s.id = ss.section_id
        JOIN courses c      ON c.id = s.course_id
        WHERE q.id = $1
        "#,
    )
    .bind(quiz_id)
    .fetch_optional(pool)
    .await
}

/// All questions of a quiz in worksheet order.
pub async fn list_questions(
    pool: &PgPool,
    quiz_id: Uuid,
) -> Result<Vec<QuestionRow>, sqlx::Error> {
    sqlx::query_as::<_, QuestionRow>(
        "SELECT * FROM questions WHERE quiz_id = $1 ORDER BY position, created_at",
    )
    .bind(quiz_id)
    .fetch_all(pool)
    .await
}
