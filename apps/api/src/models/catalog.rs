//! Catalog rows: courses, their sections/subsections, and quizzes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SectionRow {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubsectionRow {
    pub id: Uuid,
    pub section_id: Uuid,
    pub title: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizRow {
    pub id: Uuid,
    pub subsection_id: Uuid,
    pub title: String,
    /// Display difficulty: "easy", "medium", "hard".
    pub difficulty: String,
    /// Drafts from the AI generator stay unpublished until reviewed.
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Breadcrumb + quiz metadata for the worksheet title block, joined from the
/// catalog tables in one query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizHead {
    pub quiz_id: Uuid,
    pub quiz_title: String,
    pub difficulty: String,
    pub subsection_title: String,
    pub section_title: String,
    pub course_title: String,
}
