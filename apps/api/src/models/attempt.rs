//! Quiz attempt rows. One attempt row per submission, one answer row per
//! question the attempt addressed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizAttemptRow {
    pub id: Uuid,
    pub quiz_id: Uuid,
    /// Identity from the upstream auth service; anonymous practice is allowed.
    pub user_id: Option<Uuid>,
    /// Percentage over gradable questions only (0.0 when none were gradable).
    pub score_percent: f64,
    pub correct_count: i32,
    pub gradable_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttemptAnswerRow {
    pub id: Uuid,
    pub attempt_id: Uuid,
    pub question_id: Uuid,
    /// The submitted option letter as received; `None` for unanswered.
    pub selected_option: Option<String>,
    pub is_correct: bool,
}
